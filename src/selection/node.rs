// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node selector - picks a random node and its internal IP for edgemesh-server.

use crate::constants::NODE_INTERNAL_IP;
use crate::types::{LabelFilter, SelectionResult};
use k8s_openapi::api::core::v1::Node;
use kube::{api::ListParams, Api, Client, ResourceExt};
use rand::seq::SliceRandom;
use rand::Rng;
use std::net::IpAddr;
use tracing::debug;

pub struct NodeSelector {
    client: Client,
}

impl NodeSelector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Pick one node matching `filter` at random and return its name and internal IP.
    ///
    /// Fails quiet: a failed node listing, an empty candidate set or a node without a
    /// usable internal IP all yield `None`. Callers print nothing in that case and shell
    /// consumers treat empty output as failure.
    pub async fn select<R: Rng + ?Sized>(
        &self,
        filter: &LabelFilter,
        rng: &mut R,
    ) -> Option<SelectionResult> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        let node_list = match nodes.list(&ListParams::default()).await {
            Ok(list) => list,
            Err(e) => {
                debug!("Failed to list nodes, filter labels {}: {}", filter, e);
                return None;
            }
        };

        choose_node(node_list.items, filter, rng)
    }
}

/// Draw one node matching `filter` uniformly at random and resolve its internal IP.
///
/// The drawn node is final: if it has no usable internal IP there is no second draw.
pub fn choose_node<R: Rng + ?Sized>(
    nodes: Vec<Node>,
    filter: &LabelFilter,
    rng: &mut R,
) -> Option<SelectionResult> {
    let candidates: Vec<Node> = nodes
        .into_iter()
        .filter(|n| filter.matches(n.metadata.labels.as_ref()))
        .collect();

    let node = candidates.choose(rng)?;
    let node_ip = internal_ip(node)?;

    Some(SelectionResult {
        node_name: node.name_any(),
        node_ip,
    })
}

/// First `InternalIP` address of the node that parses as an IP literal.
///
/// The address text is returned as stored on the node, not re-rendered.
pub fn internal_ip(node: &Node) -> Option<String> {
    node.status
        .as_ref()?
        .addresses
        .as_ref()?
        .iter()
        .find(|a| a.type_ == NODE_INTERNAL_IP && a.address.parse::<IpAddr>().is_ok())
        .map(|a| a.address.clone())
}
