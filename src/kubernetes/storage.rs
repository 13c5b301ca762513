// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Default storage class inspection

use crate::constants::DEFAULT_STORAGE_CLASS_KEY;
use crate::error::Result;
use k8s_openapi::api::storage::v1::StorageClass;
use kube::{api::ListParams, Api, Client};
use tracing::instrument;

/// Check whether any storage class carries the default-class key.
///
/// Only the presence of the key is checked, its value is ignored: a class
/// marked `"false"` still counts as a default.
// TODO: confirm with product owners whether a "false" marker should count.
pub fn has_default_storage_class(storage_classes: &[StorageClass]) -> bool {
    storage_classes.iter().any(|sc| {
        sc.parameters
            .as_ref()
            .is_some_and(|p| p.contains_key(DEFAULT_STORAGE_CLASS_KEY))
    })
}

/// List the storage classes currently defined in the cluster
#[instrument(skip(client))]
pub async fn list_storage_classes(client: &Client) -> Result<Vec<StorageClass>> {
    let storage_classes: Api<StorageClass> = Api::all(client.clone());
    Ok(storage_classes.list(&ListParams::default()).await?.items)
}
