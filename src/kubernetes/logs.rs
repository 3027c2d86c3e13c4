// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Log retrieval from the ODA controller pod

use crate::config::Config;
use crate::error::{InventoryError, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{ListParams, LogParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// Fetch the logs of the ODA controller pod.
///
/// The controller pod is found by label selector in the canvas namespace;
/// if the selector matches several pods the first one is read.
#[instrument(skip(client, config))]
pub async fn get_controller_logs(client: &Client, config: &Config) -> Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), &config.canvas_namespace);
    let params = ListParams::default().labels(&config.controller_label_selector);
    let pod_list = pods.list(&params).await?;

    let Some(pod) = pod_list.items.into_iter().next() else {
        return Err(InventoryError::ControllerNotFound(format!(
            "no pod matching '{}' in namespace '{}'",
            config.controller_label_selector, config.canvas_namespace
        )));
    };

    let pod_name = pod.name_any();
    debug!(
        "Reading logs from pod {}/{} container {}",
        config.canvas_namespace, pod_name, config.controller_container
    );

    let log_params = LogParams {
        container: Some(config.controller_container.clone()),
        ..Default::default()
    };

    Ok(pods.logs(&pod_name, &log_params).await?)
}
