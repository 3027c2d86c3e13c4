// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookups of ODA custom resources by their deterministic instance name.
//!
//! A component instance's sub-resources are named `{release}-{component}-{resource}`
//! by the canvas operator, so every lookup is a namespaced list call filtered
//! on `metadata.name`.

use crate::constants::{plurals, GROUP, VERSION};
use crate::error::Result;
use crate::types::{Component, DependentAPI, ExposedAPI};
use kube::api::{Api, ListParams};
use kube::core::{ApiResource, DynamicObject};
use kube::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{instrument, warn};

/// Build the name the canvas operator gives a sub-resource of a component instance
pub fn resource_fullname(release_name: &str, component_name: &str, resource_name: &str) -> String {
    format!("{}-{}-{}", release_name, component_name, resource_name)
}

/// Map a CRD plural to its kind. Known ODA plurals map directly; anything
/// else is de-pluralized and capitalized (only used client-side, the list
/// URL is built from the plural).
fn kind_for_plural(plural: &str) -> String {
    match plural {
        plurals::EXPOSED_APIS => "ExposedAPI".to_string(),
        plurals::DEPENDENT_APIS => "DependentAPI".to_string(),
        plurals::COMPONENTS => "Component".to_string(),
        other => {
            let singular = other.strip_suffix('s').unwrap_or(other);
            let mut chars = singular.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Build a dynamic API handle for an ODA resource type at a given version
fn dynamic_api(
    client: &Client,
    namespace: &str,
    version: &str,
    plural: &str,
) -> Api<DynamicObject> {
    let resource = ApiResource {
        group: GROUP.to_string(),
        version: version.to_string(),
        api_version: format!("{}/{}", GROUP, version),
        kind: kind_for_plural(plural),
        plural: plural.to_string(),
    };
    Api::namespaced_with(client.clone(), namespace, &resource)
}

/// List objects matching a name and return the first, if any.
///
/// Exactly one match is expected. The operator-assigned names make clashes
/// unlikely, but the API contract does not rule them out, so duplicates are
/// logged before the first item wins.
async fn first_named<K>(api: &Api<K>, plural: &str, name: &str) -> Result<Option<K>>
where
    K: Clone + DeserializeOwned + Debug,
{
    let params = ListParams::default().fields(&format!("metadata.name={}", name));
    let list = api.list(&params).await?;

    if list.items.len() > 1 {
        warn!(
            "Found {} {} objects named '{}', returning the first",
            list.items.len(),
            plural,
            name
        );
    }

    Ok(list.items.into_iter().next())
}

/// Look up any ODA custom resource by its plural name, at the default CRD
/// version. Returns `None` if no object with the constructed name exists.
#[instrument(skip(client))]
pub async fn get_custom_resource(
    client: &Client,
    plural: &str,
    resource_name: &str,
    component_name: &str,
    release_name: &str,
    namespace: &str,
) -> Result<Option<DynamicObject>> {
    let name = resource_fullname(release_name, component_name, resource_name);
    let api = dynamic_api(client, namespace, VERSION, plural);
    first_named(&api, plural, &name).await
}

/// Look up the ExposedAPI resource for an API of a component instance.
#[instrument(skip(client))]
pub async fn get_exposed_api(
    client: &Client,
    api_name: &str,
    component_name: &str,
    release_name: &str,
    namespace: &str,
) -> Result<Option<ExposedAPI>> {
    let name = resource_fullname(release_name, component_name, api_name);
    let api: Api<ExposedAPI> = Api::namespaced(client.clone(), namespace);
    first_named(&api, plurals::EXPOSED_APIS, &name).await
}

/// Look up the DependentAPI resource for an API of a component instance.
#[instrument(skip(client))]
pub async fn get_dependent_api(
    client: &Client,
    api_name: &str,
    component_name: &str,
    release_name: &str,
    namespace: &str,
) -> Result<Option<DependentAPI>> {
    let name = resource_fullname(release_name, component_name, api_name);
    let api: Api<DependentAPI> = Api::namespaced(client.clone(), namespace);
    first_named(&api, plurals::DEPENDENT_APIS, &name).await
}

/// Look up a Component resource by its instance name, at the default CRD version.
#[instrument(skip(client))]
pub async fn get_component(
    client: &Client,
    component_name: &str,
    namespace: &str,
) -> Result<Option<Component>> {
    let api: Api<Component> = Api::namespaced(client.clone(), namespace);
    first_named(&api, plurals::COMPONENTS, component_name).await
}

/// Look up a Component resource at a caller-chosen CRD version.
#[instrument(skip(client))]
pub async fn get_component_by_version(
    client: &Client,
    component_name: &str,
    version: &str,
    namespace: &str,
) -> Result<Option<DynamicObject>> {
    let api = dynamic_api(client, namespace, version, plurals::COMPONENTS);
    first_named(&api, plurals::COMPONENTS, component_name).await
}
