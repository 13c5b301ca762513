// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clusterprep::config::Config;
use clusterprep::kubernetes::patch_kubeconfig_file;
use clusterprep::preflight::run_preflight;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting cluster preflight");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: target_namespace={}",
        config.target_namespace
    );

    // Normalize the kubeconfig before the client reads it
    if let Some(path) = &config.kubeconfig_patch_path {
        patch_kubeconfig_file(path)?;
    }

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let report = run_preflight(&client, &config).await?;
    info!("Preflight finished: {}", serde_json::to_string(&report)?);

    Ok(())
}
