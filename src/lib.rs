// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookup helpers for ODA Canvas custom resources, for use in BDD test kits.
//!
//! Each helper issues a single list call filtered on `metadata.name` and
//! returns the first match, or `None` when the resource does not exist yet.

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::{InventoryError, Result};
pub use kubernetes::{
    get_component, get_component_by_version, get_controller_logs, get_custom_resource,
    get_dependent_api, get_exposed_api,
};
pub use types::{Component, DependentAPI, ExposedAPI};
