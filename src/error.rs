// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreflightError {
    /// Transport, auth or server failure from the cluster API
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to read or write kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid credential record: {0}")]
    InvalidCredential(String),

    #[error("Namespace {0} not found")]
    NamespaceNotFound(String),

    #[error("Namespace {0} already exists")]
    NamespaceAlreadyExists(String),

    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),
}

pub type Result<T> = std::result::Result<T, PreflightError>;
