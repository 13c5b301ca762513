// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Managed cluster flavor detection

use crate::constants::GKE_VERSION_MARKER;
use crate::error::Result;
use k8s_openapi::apimachinery::pkg::version::Info;
use kube::Client;
use tracing::{debug, instrument};

/// Check whether the API server version was reported by a GKE cluster.
///
/// Plain substring match on the git version, no version parsing.
pub fn is_gke(version: &Info) -> bool {
    version.git_version.contains(GKE_VERSION_MARKER)
}

/// Query the API server version and classify the cluster
#[instrument(skip(client))]
pub async fn detect_gke(client: &Client) -> Result<bool> {
    let version = client.apiserver_version().await?;
    let gke = is_gke(&version);
    debug!("API server version {} (gke: {})", version.git_version, gke);
    Ok(gke)
}
