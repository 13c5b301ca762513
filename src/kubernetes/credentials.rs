// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig normalization for non-interactive use.
//!
//! Kubeconfigs written by `gcloud` embed the absolute path of the helper
//! binary in the auth provider config. That path rarely exists inside the
//! container or CI runner that later uses the file, so it is reduced to the
//! bare executable name and resolved through `PATH` instead.

use crate::constants::kubeconfig::CMD_PATH;
use crate::error::{PreflightError, Result};
use kube::config::Kubeconfig;
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rewrite every auth provider `cmd-path` to its trailing path segment.
///
/// Entries without an auth provider or without the key are left as they are.
/// All values are validated before anything is rewritten, so on error the
/// kubeconfig is untouched.
pub fn patch_command_path(kubeconfig: &mut Kubeconfig) -> Result<()> {
    let mut rewrites = Vec::new();

    for (idx, named) in kubeconfig.auth_infos.iter().enumerate() {
        let Some(cmd_path) = named
            .auth_info
            .as_ref()
            .and_then(|a| a.auth_provider.as_ref())
            .and_then(|p| p.config.get(CMD_PATH))
        else {
            continue;
        };

        let Some(command) = command_name(cmd_path) else {
            return Err(PreflightError::InvalidCredential(format!(
                "user {} has {} '{}' without an executable name",
                named.name, CMD_PATH, cmd_path
            )));
        };

        if command != cmd_path {
            rewrites.push((idx, command.to_string()));
        }
    }

    for (idx, command) in rewrites {
        let Some(named) = kubeconfig.auth_infos.get_mut(idx) else {
            continue;
        };
        if let Some(provider) = named
            .auth_info
            .as_mut()
            .and_then(|a| a.auth_provider.as_mut())
        {
            debug!("Rewriting {} for user {} to {}", CMD_PATH, named.name, command);
            provider.config.insert(CMD_PATH.to_string(), command);
        }
    }

    Ok(())
}

/// Read a kubeconfig file, patch its command paths and write it back in place.
///
/// The file is handled as a plain YAML document rather than a [`Kubeconfig`]:
/// relative certificate and token paths stay relative, fields unknown to
/// `kube` survive and key order is kept. Only `cmd-path` values change.
#[instrument]
pub fn patch_kubeconfig_file(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        PreflightError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let mut kubeconfig: Value = serde_yaml::from_str(&raw).map_err(|e| {
        PreflightError::KubeconfigError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    patch_command_path_yaml(&mut kubeconfig)?;

    let yaml = serde_yaml::to_string(&kubeconfig).map_err(|e| {
        PreflightError::KubeconfigError(format!("Failed to serialize kubeconfig: {}", e))
    })?;
    std::fs::write(path, yaml).map_err(|e| {
        PreflightError::KubeconfigError(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!("Patched kubeconfig {}", path.display());
    Ok(())
}

/// Same rewrite as [`patch_command_path`] on an untyped kubeconfig document.
fn patch_command_path_yaml(kubeconfig: &mut Value) -> Result<()> {
    let Some(users) = kubeconfig
        .get_mut("users")
        .and_then(Value::as_sequence_mut)
    else {
        return Ok(());
    };

    let mut rewrites = Vec::new();

    for (idx, user) in users.iter().enumerate() {
        let Some(cmd_path) = user
            .get("user")
            .and_then(|u| u.get("auth-provider"))
            .and_then(|p| p.get("config"))
            .and_then(|c| c.get(CMD_PATH))
        else {
            continue;
        };
        let name = user.get("name").and_then(Value::as_str).unwrap_or_default();

        let Some(cmd_path) = cmd_path.as_str() else {
            return Err(PreflightError::InvalidCredential(format!(
                "user {} has a {} that is not a string",
                name, CMD_PATH
            )));
        };
        let Some(command) = command_name(cmd_path) else {
            return Err(PreflightError::InvalidCredential(format!(
                "user {} has {} '{}' without an executable name",
                name, CMD_PATH, cmd_path
            )));
        };

        if command != cmd_path {
            rewrites.push((idx, name.to_string(), command.to_string()));
        }
    }

    for (idx, name, command) in rewrites {
        if let Some(config) = users
            .get_mut(idx)
            .and_then(|u| u.get_mut("user"))
            .and_then(|u| u.get_mut("auth-provider"))
            .and_then(|p| p.get_mut("config"))
            .and_then(Value::as_mapping_mut)
        {
            debug!("Rewriting {} for user {} to {}", CMD_PATH, name, command);
            config.insert(Value::from(CMD_PATH), Value::from(command));
        }
    }

    Ok(())
}

/// Trailing file name of a command path. A path ending in `.` or `..` has none.
fn command_name(cmd_path: &str) -> Option<&str> {
    if cmd_path == "." || cmd_path.ends_with("/.") {
        return None;
    }
    Path::new(cmd_path).file_name().and_then(|name| name.to_str())
}
