// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::controller;
use anyhow::Result;
use std::env;

/// Test-kit configuration loaded from environment variables.
///
/// Cluster credentials stay ambient (default kubeconfig context); only the
/// coordinates of the ODA controller pod can be overridden here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the canvas (and its controller pod) is installed into
    pub canvas_namespace: String,
    /// Label selector used to find the controller pod
    pub controller_label_selector: String,
    /// Container within the controller pod to read logs from
    pub controller_container: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// standard canvas install locations.
    pub fn from_env() -> Result<Self> {
        let canvas_namespace =
            env::var("CANVAS_NAMESPACE").unwrap_or_else(|_| controller::NAMESPACE.to_string());
        let controller_label_selector = env::var("CONTROLLER_LABEL_SELECTOR")
            .unwrap_or_else(|_| controller::LABEL_SELECTOR.to_string());
        let controller_container = env::var("CONTROLLER_CONTAINER")
            .unwrap_or_else(|_| controller::CONTAINER.to_string());

        Ok(Config {
            canvas_namespace,
            controller_label_selector,
            controller_container,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_namespace: controller::NAMESPACE.to_string(),
            controller_label_selector: controller::LABEL_SELECTOR.to_string(),
            controller_container: controller::CONTAINER.to_string(),
        }
    }
}
