// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_KUBECONFIG_PATH;
use std::env;
use std::path::PathBuf;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file the cluster client authenticates with
    pub kubeconfig: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let kubeconfig = env::var("KUBECONFIG")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_KUBECONFIG_PATH.to_string());

        Config {
            kubeconfig: PathBuf::from(kubeconfig),
        }
    }

    /// Replace the kubeconfig path when one was given on the command line
    pub fn with_kubeconfig(mut self, kubeconfig: Option<PathBuf>) -> Self {
        if let Some(path) = kubeconfig {
            self.kubeconfig = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kubeconfig: PathBuf::from(DEFAULT_KUBECONFIG_PATH),
        }
    }
}
