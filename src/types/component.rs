// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "oda.tmforum.org", version = "v1beta4", kind = "Component")]
#[kube(namespaced)]
#[kube(status = "ComponentStatus")]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The component's exposed and dependent APIs, passed through untyped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_function: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_function: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_function: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
pub struct ComponentStatus {
    // The canvas operator writes the rollup under this literal key
    #[serde(rename = "summary/status", skip_serializing_if = "Option::is_none")]
    pub summary_status: Option<ComponentSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
pub struct ComponentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_status: Option<String>,
}

impl Component {
    /// The rollup deployment status written by the canvas operator
    pub fn deployment_status(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.summary_status.as_ref())
            .and_then(|s| s.deployment_status.as_deref())
    }

    /// Check if the component has finished deploying
    pub fn is_deployed(&self) -> bool {
        self.deployment_status() == Some("Complete")
    }
}
