// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Preflight configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the application will be installed into
    pub target_namespace: String,
    /// Kubeconfig file to normalize for non-interactive use before the checks run
    pub kubeconfig_patch_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_namespace = lookup(vars::TARGET_NAMESPACE)
            .filter(|ns| !ns.is_empty())
            .with_context(|| format!("{} environment variable not set", vars::TARGET_NAMESPACE))?;
        let kubeconfig_patch_path = lookup(vars::KUBECONFIG_PATCH_PATH)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            target_namespace,
            kubeconfig_patch_path,
        })
    }
}
