// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{PreflightError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api,
};
use tracing::{debug, info, instrument};

/// Lookup and creation of cluster namespaces.
///
/// `get` must fail with [`PreflightError::NamespaceNotFound`] when the
/// namespace is absent, and `create` with
/// [`PreflightError::NamespaceAlreadyExists`] on a conflict. Any other error
/// is treated as a transport failure.
#[async_trait]
pub trait NamespaceStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Namespace>;
    async fn create(&self, namespace: &Namespace) -> Result<Namespace>;
}

#[async_trait]
impl NamespaceStore for Api<Namespace> {
    async fn get(&self, name: &str) -> Result<Namespace> {
        Api::get(self, name).await.map_err(|e| match e {
            kube::Error::Api(err) if err.code == 404 => {
                PreflightError::NamespaceNotFound(name.to_string())
            }
            e => e.into(),
        })
    }

    async fn create(&self, namespace: &Namespace) -> Result<Namespace> {
        Api::create(self, &PostParams::default(), namespace)
            .await
            .map_err(|e| match e {
                kube::Error::Api(err) if err.code == 409 => PreflightError::NamespaceAlreadyExists(
                    namespace.metadata.name.clone().unwrap_or_default(),
                ),
                e => e.into(),
            })
    }
}

/// Ensure a namespace exists in the cluster, create if it doesn't.
///
/// The lookup and the creation are two separate calls, so concurrent callers
/// can both see the namespace as missing. The loser of that race gets a
/// conflict from the cluster, which is reported as success here.
#[instrument(skip(store))]
pub async fn ensure_namespace<S>(store: &S, name: &str) -> Result<()>
where
    S: NamespaceStore + ?Sized,
{
    if name.is_empty() {
        return Err(PreflightError::InvalidNamespace(
            "namespace name must not be empty".to_string(),
        ));
    }

    match store.get(name).await {
        Ok(_) => {
            debug!("Namespace {} already exists", name);
            Ok(())
        }
        Err(PreflightError::NamespaceNotFound(_)) => {
            info!("Creating namespace {}", name);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            match store.create(&ns).await {
                Ok(_) => {
                    info!("Namespace {} created successfully", name);
                    Ok(())
                }
                Err(PreflightError::NamespaceAlreadyExists(_)) => {
                    debug!("Namespace {} was created concurrently", name);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}
