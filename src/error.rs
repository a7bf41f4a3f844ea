// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Namespace check failed: {0}")]
    NamespaceError(String),

    #[error("Invalid label filter: {0}")]
    InvalidLabelFilter(String),
}

pub type Result<T> = std::result::Result<T, ToolsError>;
