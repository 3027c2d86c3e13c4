// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from ambient or explicit kubeconfig

use crate::error::{InventoryError, Result};
use kube::{config::KubeConfigOptions, Client};
use tracing::debug;

/// Create a Kubernetes client from the default configuration (in-cluster
/// environment or the current kubeconfig context).
pub async fn create_client() -> Result<Client> {
    Client::try_default()
        .await
        .map_err(|e| InventoryError::KubeconfigError(format!("Failed to infer config: {}", e)))
}

/// Create a client for a named context in the default kubeconfig file.
pub async fn create_client_for_context(context: &str) -> Result<Client> {
    debug!("Creating client for kubeconfig context '{}'", context);
    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };
    let client_config = kube::Config::from_kubeconfig(&options).await.map_err(|e| {
        InventoryError::KubeconfigError(format!(
            "Failed to load kubeconfig for context {}: {}",
            context, e
        ))
    })?;

    Client::try_from(client_config)
        .map_err(|e| InventoryError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
        InventoryError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e))
    })?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                InventoryError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| InventoryError::KubeconfigError(format!("Failed to create client: {}", e)))
}
