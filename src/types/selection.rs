// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// Node picked to run edgemesh-server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub node_name: String,
    /// Address exactly as reported in the node status
    pub node_ip: String,
}

/// Renders as `nodeName,nodeIP`, the format shell callers split on.
impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.node_name, self.node_ip)
    }
}
