// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and ODA resource lookups.

pub mod client;
pub mod logs;
pub mod resources;

pub use client::create_client;
pub use logs::get_controller_logs;
pub use resources::{
    get_component, get_component_by_version, get_custom_resource, get_dependent_api,
    get_exposed_api,
};
