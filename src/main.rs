// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use tracing::info;

use canvas_inventory::kubernetes::client::create_client;
use canvas_inventory::kubernetes::{
    get_component, get_component_by_version, get_controller_logs, get_custom_resource,
    get_dependent_api, get_exposed_api,
};
use canvas_inventory::Config;

const USAGE: &str = "Usage: canvas-inventory <command> [args]

Commands:
  component <name> <namespace>
  component-version <name> <version> <namespace>
  exposed-api <api> <component> <release> <namespace>
  dependent-api <api> <component> <release> <namespace>
  resource <plural> <resource> <component> <release> <namespace>
  logs";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!("{}", USAGE);
    };

    let config = Config::from_env()?;
    let client = create_client().await?;
    info!("Connected to Kubernetes cluster");

    match (command.as_str(), &args[1..]) {
        ("component", [name, namespace]) => {
            print_lookup(get_component(&client, name, namespace).await?)?;
        }
        ("component-version", [name, version, namespace]) => {
            print_lookup(get_component_by_version(&client, name, version, namespace).await?)?;
        }
        ("exposed-api", [api, component, release, namespace]) => {
            print_lookup(get_exposed_api(&client, api, component, release, namespace).await?)?;
        }
        ("dependent-api", [api, component, release, namespace]) => {
            print_lookup(get_dependent_api(&client, api, component, release, namespace).await?)?;
        }
        ("resource", [plural, resource, component, release, namespace]) => {
            print_lookup(
                get_custom_resource(&client, plural, resource, component, release, namespace)
                    .await?,
            )?;
        }
        ("logs", []) => {
            println!("{}", get_controller_logs(&client, &config).await?);
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

fn print_lookup<T: serde::Serialize>(object: Option<T>) -> Result<()> {
    match object {
        Some(object) => println!("{}", serde_json::to_string_pretty(&object)?),
        None => println!("null"),
    }
    Ok(())
}
