//! The `hardfork` command: bump the persisted chain version.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use mesh_ledger::{ChainConfig, NetworkContext};

/// Options for `meshforge hardfork`.
#[derive(Debug, clap::Args)]
pub struct HardforkArgs {
    /// Path of the network to fork.
    #[arg(long = "data-dir", alias = "data")]
    pub data_dir: Option<PathBuf>,
}

/// Run the hardfork flow.
pub fn run(args: HardforkArgs, silent: bool) -> Result<()> {
    let data_dir = args
        .data_dir
        .unwrap_or_else(NetworkContext::default_data_dir);
    let ctx = NetworkContext::new(data_dir, "main_net", silent);

    let mut config = ChainConfig::read_from_memory(&ctx)?;
    let previous = config.chain_version.clone();
    config.bump_version()?;
    config.write_to_memory(&ctx)?;

    info!(from = %previous, to = %config.chain_version, "chain version bumped");
    println!(
        "Forked network {}: chain version {} -> {}.",
        config.network_id, previous, config.chain_version
    );
    Ok(())
}
