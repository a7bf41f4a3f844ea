// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::info;

use edgemesh_tools::cli::NoProxyArgs;
use edgemesh_tools::config::Config;
use edgemesh_tools::kubernetes::create_client;
use edgemesh_tools::logging::init_tracing;
use edgemesh_tools::reconcilers::NoProxyReconciler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = NoProxyArgs::parse();
    init_tracing();

    let config = Config::from_env().with_kubeconfig(args.kubeconfig);
    info!(
        "Labeling services in namespaces {:?} using kubeconfig {}",
        args.namespaces,
        config.kubeconfig.display()
    );

    // Without a client there is nothing to do, so this is the only fatal error
    let client = create_client(&config.kubeconfig).await?;

    NoProxyReconciler::new(client).run(&args.namespaces).await;

    Ok(())
}
