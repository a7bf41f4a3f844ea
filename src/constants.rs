// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label that tells the edgemesh proxy to leave a Service alone
pub mod noproxy {
    pub const LABEL_KEY: &str = "noproxy";
    pub const LABEL_VALUE: &str = "edgemesh";
}

/// Service spec values the reconciler cares about
pub mod service {
    pub const TYPE_CLUSTER_IP: &str = "ClusterIP";
    /// `spec.clusterIP` of a headless Service
    pub const HEADLESS_CLUSTER_IP: &str = "None";
}

/// Node address type used to pick the edgemesh-server address
pub const NODE_INTERNAL_IP: &str = "InternalIP";

/// Kubeconfig used when `KUBECONFIG` is not set
pub const DEFAULT_KUBECONFIG_PATH: &str = "/root/.kube/config";

pub const DEFAULT_NAMESPACES: &str = "default";

pub const DEFAULT_LOG_FILTER: &str = "info";
