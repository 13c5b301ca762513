// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pre-install checks run against the target cluster.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{
    detect_gke, ensure_namespace, has_default_storage_class, list_storage_classes,
};
use k8s_openapi::api::core::v1::Namespace;
use kube::{Api, Client};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Outcome of a preflight run
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreflightReport {
    pub managed_flavor: bool,
    pub namespace: String,
    pub has_default_storage_class: bool,
}

/// Detect the cluster flavor, ensure the target namespace and inspect storage classes.
///
/// Errors are returned as-is; retrying is up to the caller.
#[instrument(skip(client, config), fields(namespace = %config.target_namespace))]
pub async fn run_preflight(client: &Client, config: &Config) -> Result<PreflightReport> {
    let managed_flavor = detect_gke(client).await?;
    if managed_flavor {
        info!("Target cluster is running on GKE");
    }

    let namespaces: Api<Namespace> = Api::all(client.clone());
    ensure_namespace(&namespaces, &config.target_namespace).await?;

    let storage_classes = list_storage_classes(client).await?;
    let has_default = has_default_storage_class(&storage_classes);
    if !has_default {
        warn!(
            "No default storage class among {} storage classes, volume claims without a class will stay pending",
            storage_classes.len()
        );
    }

    Ok(PreflightReport {
        managed_flavor,
        namespace: config.target_namespace.clone(),
        has_default_storage_class: has_default,
    })
}
