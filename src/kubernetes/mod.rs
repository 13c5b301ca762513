// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster readiness checks: kubeconfig normalization, flavor detection,
//! storage class inspection and namespace management.

pub mod credentials;
pub mod flavor;
pub mod namespaces;
pub mod storage;

pub use credentials::{patch_command_path, patch_kubeconfig_file};
pub use flavor::{detect_gke, is_gke};
pub use namespaces::{ensure_namespace, NamespaceStore};
pub use storage::{has_default_storage_class, list_storage_classes};
