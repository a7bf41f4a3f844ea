// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::error::{Result, ToolsError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client authenticated with the kubeconfig at `path`
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn create_client(path: &Path) -> Result<Client> {
    debug!("Reading kubeconfig");

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        ToolsError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    let client = create_client_from_kubeconfig(&kubeconfig).await?;
    info!("Connected to Kubernetes cluster");
    Ok(client)
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| ToolsError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| ToolsError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| ToolsError::KubeconfigError(format!("Failed to create client: {}", e)))
}
