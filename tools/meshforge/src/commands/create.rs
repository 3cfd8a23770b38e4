//! The `create` command: bootstrap a new network.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use tracing::info;

use mesh_genesis::{assemble_config, bootstrap, GenesisDocument};
use mesh_ledger::NetworkContext;

use crate::prompt::TerminalPrompt;

/// Options for `meshforge create`.
#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    /// Path to store network files in.
    #[arg(long = "data-dir", alias = "data")]
    pub data_dir: Option<PathBuf>,

    /// Name to register the network as.
    #[arg(long = "network-name", alias = "network", default_value = "main_net")]
    pub network_name: String,

    /// Existing chain configuration file to bootstrap from.
    #[arg(long = "config-path", alias = "config")]
    pub config_path: Option<PathBuf>,

    /// Genesis document to bootstrap configuration creation from; may define
    /// the allocation, network id, and inflation rate.
    #[arg(long = "genesis-path", alias = "genesis")]
    pub genesis_path: Option<PathBuf>,
}

/// Run the create flow.
pub fn run(args: CreateArgs, silent: bool) -> Result<()> {
    let mut prompt = TerminalPrompt;

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => {
            let default_dir = NetworkContext::default_data_dir();
            let answer = mesh_genesis::ask_normalized(
                &mut prompt,
                "Where would you like your new network to be stored?",
                &mesh_genesis::AskOptions::with_default(&default_dir.to_string_lossy()),
            )?;
            PathBuf::from(answer)
        }
    };

    if data_dir.exists() && data_dir.read_dir()?.next().is_some() {
        let wipe = Confirm::new()
            .with_prompt(format!(
                "It looks like a network already exists in {}. Remove it and continue?",
                data_dir.display()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !wipe {
            anyhow::bail!("aborted: {} already contains a network", data_dir.display());
        }
        for entry in fs::read_dir(&data_dir)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        info!(data_dir = %data_dir.display(), "cleared existing network files");
    }

    let ctx = NetworkContext::new(data_dir, args.network_name, silent);

    let config = if let Some(config_path) = args.config_path {
        // Bootstrap from an already-assembled configuration.
        let raw = fs::read(&config_path)
            .with_context(|| format!("reading configuration {}", config_path.display()))?;
        let config: mesh_ledger::ChainConfig = serde_json::from_slice(&raw)
            .with_context(|| format!("decoding configuration {}", config_path.display()))?;
        config
    } else {
        let document = GenesisDocument::from_path(args.genesis_path.as_deref())?;
        assemble_config(&ctx, &mut prompt, &document)?
    };

    config.write_to_memory(&ctx)?;
    bootstrap(&ctx)?;

    println!(
        "\nYou're all good to go! Your new network has been created in {}.",
        ctx.data_dir.display()
    );
    println!(
        "Try running a node with --network {}_{} to get started.",
        ctx.network_name, config.network_id
    );
    Ok(())
}
