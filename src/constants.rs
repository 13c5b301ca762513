// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubeconfig keys rewritten before handing the file to automation
pub mod kubeconfig {
    /// Auth provider config key holding the path of the helper executable
    pub const CMD_PATH: &str = "cmd-path";
}

/// Substring of the API server git version reported by GKE clusters
pub const GKE_VERSION_MARKER: &str = "-gke";

/// Storage class parameter marking a class as the cluster default
pub const DEFAULT_STORAGE_CLASS_KEY: &str = "storageclass.beta.kubernetes.io/is-default-class";

/// Environment variables read by [`crate::config::Config`]
pub mod env {
    pub const TARGET_NAMESPACE: &str = "TARGET_NAMESPACE";
    pub const KUBECONFIG_PATCH_PATH: &str = "KUBECONFIG_PATCH_PATH";
}
