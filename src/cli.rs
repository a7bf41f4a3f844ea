// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments for the `noproxy` and `select` tools.

use crate::constants::DEFAULT_NAMESPACES;
use clap::Parser;
use std::path::PathBuf;

/// Label ClusterIP Services with noproxy=edgemesh so edgemesh does not hijack their traffic.
///
/// Only Services of type ClusterIP that are not headless are labeled. Services that
/// already carry a noproxy label are left untouched.
#[derive(Debug, Parser)]
#[command(name = "noproxy", version, about)]
pub struct NoProxyArgs {
    /// Services in these namespaces will be labeled with noproxy=edgemesh.
    /// Names are trimmed, so " default" means "default"; empty names are ignored
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_NAMESPACES)]
    pub namespaces: Vec<String>,

    /// Path to the kubeconfig file (overrides KUBECONFIG)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
}

/// Select one node from the cluster to run edgemesh-server and print "nodeName,nodeIP".
#[derive(Debug, Parser)]
#[command(name = "select", version, about)]
pub struct SelectArgs {
    /// Filter nodes by these labels, e.g. key1=val1,key2=val2
    #[arg(long, default_value = "")]
    pub filter_labels: String,

    /// Seed for the random node draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the kubeconfig file (overrides KUBECONFIG)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
}
