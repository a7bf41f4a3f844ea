// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lookup utilities

use crate::error::{Result, ToolsError};
use k8s_openapi::api::core::v1::Namespace;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Check that a namespace exists in the cluster
#[instrument(skip(client))]
pub async fn check_namespace_exists(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            debug!("Namespace {} exists", namespace);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => Err(ToolsError::NamespaceError(
            format!("namespace {} not found", namespace),
        )),
        Err(e) => Err(e.into()),
    }
}
