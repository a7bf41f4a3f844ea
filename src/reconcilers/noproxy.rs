// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! NoProxy reconciler - labels ClusterIP Services so edgemesh does not intercept them.

use crate::constants::{noproxy, service};
use crate::error::Result;
use crate::kubernetes::check_namespace_exists;
use k8s_openapi::api::core::v1::Service;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, error, info, instrument, warn};

/// Outcome of a single reconciler run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Services that got the label, as `namespace/name`
    pub labeled: Vec<String>,
    /// Services whose update was rejected, as `namespace/name`
    pub failed: Vec<String>,
    /// Namespaces that were missing or could not be read
    pub skipped_namespaces: Vec<String>,
    /// Services that were not eligible or already labeled
    pub unchanged: usize,
}

pub struct NoProxyReconciler {
    client: Client,
}

impl NoProxyReconciler {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Label every eligible Service in `namespaces`, in the given order.
    ///
    /// Errors never abort the run: a bad namespace is skipped and a failed update
    /// moves on to the next Service.
    pub async fn run(&self, namespaces: &[String]) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for namespace in namespaces.iter().map(|ns| ns.trim()) {
            if namespace.is_empty() {
                debug!("Ignoring empty namespace name");
                continue;
            }

            if let Err(e) = check_namespace_exists(&self.client, namespace).await {
                warn!("Check namespace {} failed: {}, skip", namespace, e);
                report.skipped_namespaces.push(namespace.to_string());
                continue;
            }

            if let Err(e) = self.label_services(namespace, &mut report).await {
                error!("Failed to list services in {}: {}", namespace, e);
                report.skipped_namespaces.push(namespace.to_string());
            }
        }

        info!(
            "Labeled {} services, {} failed, {} unchanged, {} namespaces skipped",
            report.labeled.len(),
            report.failed.len(),
            report.unchanged,
            report.skipped_namespaces.len()
        );

        report
    }

    #[instrument(skip(self, report))]
    async fn label_services(&self, namespace: &str, report: &mut ReconcileReport) -> Result<()> {
        let services: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        let service_list = services.list(&ListParams::default()).await?;

        for mut svc in service_list.items {
            if !needs_noproxy_label(&svc) {
                report.unchanged += 1;
                continue;
            }

            let name = svc.name_any();
            apply_noproxy_label(&mut svc);

            match services.replace(&name, &PostParams::default(), &svc).await {
                Ok(_) => {
                    info!(
                        "{}/{} add {}={} label",
                        namespace,
                        name,
                        noproxy::LABEL_KEY,
                        noproxy::LABEL_VALUE
                    );
                    report.labeled.push(format!("{}/{}", namespace, name));
                }
                Err(e) => {
                    error!(
                        "{}/{} add {}={} label failed: {}, skip",
                        namespace,
                        name,
                        noproxy::LABEL_KEY,
                        noproxy::LABEL_VALUE,
                        e
                    );
                    report.failed.push(format!("{}/{}", namespace, name));
                }
            }
        }

        Ok(())
    }
}

/// Check if a Service is a non-headless ClusterIP Service without a noproxy label
pub fn needs_noproxy_label(svc: &Service) -> bool {
    let spec = svc.spec.as_ref();

    // An unset type is defaulted to ClusterIP by the API server
    let is_cluster_ip = spec
        .and_then(|s| s.type_.as_deref())
        .is_none_or(|t| t == service::TYPE_CLUSTER_IP);
    if !is_cluster_ip {
        return false;
    }

    let is_headless = spec
        .and_then(|s| s.cluster_ip.as_deref())
        .is_some_and(|ip| ip == service::HEADLESS_CLUSTER_IP);
    if is_headless {
        return false;
    }

    !svc.labels().contains_key(noproxy::LABEL_KEY)
}

/// Set the noproxy label, keeping every other label
pub fn apply_noproxy_label(svc: &mut Service) {
    svc.labels_mut()
        .insert(noproxy::LABEL_KEY.to_string(), noproxy::LABEL_VALUE.to_string());
}
