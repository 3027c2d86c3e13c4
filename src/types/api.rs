// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "oda.tmforum.org", version = "v1beta4", kind = "ExposedAPI")]
#[kube(namespaced)]
#[kube(status = "ExposedAPIStatus")]
#[serde(rename_all = "camelCase")]
pub struct ExposedAPISpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<Vec<ApiSpecification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpecification {
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExposedAPIStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_status: Option<ApiEndpointStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<ImplementationStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpointStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
}

impl ExposedAPI {
    /// The published URL of this API, once the controller has exposed it
    pub fn url(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.api_status.as_ref())
            .and_then(|a| a.url.as_deref())
    }

    /// Check if both the gateway endpoint and the implementation are ready
    pub fn is_ready(&self) -> bool {
        let Some(status) = self.status.as_ref() else {
            return false;
        };
        let endpoint_ready = status
            .api_status
            .as_ref()
            .is_some_and(|a| a.ready == Some(true));
        let implementation_ready = status
            .implementation
            .as_ref()
            .is_some_and(|i| i.ready == Some(true));
        endpoint_ready && implementation_ready
    }
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "oda.tmforum.org", version = "v1beta4", kind = "DependentAPI")]
#[kube(namespaced)]
#[kube(status = "DependentAPIStatus")]
#[serde(rename_all = "camelCase")]
pub struct DependentAPISpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<Vec<ApiSpecification>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependentAPIStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
}

impl DependentAPI {
    /// The resolved URL of the upstream API this component depends on
    pub fn url(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.url.as_deref())
    }

    pub fn is_ready(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.ready == Some(true))
    }
}
