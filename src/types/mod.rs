// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the ODA Canvas custom resources.

pub mod api;
pub mod component;

pub use api::{DependentAPI, ExposedAPI};
pub use component::Component;
