// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use edgemesh_tools::cli::SelectArgs;
use edgemesh_tools::config::Config;
use edgemesh_tools::kubernetes::create_client;
use edgemesh_tools::logging::init_tracing;
use edgemesh_tools::selection::{write_selection, NodeSelector};
use edgemesh_tools::types::LabelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = SelectArgs::parse();
    init_tracing();

    // Output is consumed by scripts: anything that goes wrong after this point prints nothing
    let filter: LabelFilter = match args.filter_labels.parse() {
        Ok(f) => f,
        Err(e) => {
            warn!("{}", e);
            return Ok(());
        }
    };

    let config = Config::from_env().with_kubeconfig(args.kubeconfig);
    let client = create_client(&config.kubeconfig).await?;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    if let Some(result) = NodeSelector::new(client).select(&filter, &mut rng).await {
        write_selection(std::io::stdout().lock(), &result);
    }

    Ok(())
}
