// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node selection for placing edgemesh-server.

pub mod node;
pub mod output;

pub use node::{choose_node, internal_ip, NodeSelector};
pub use output::write_selection;
