//! meshforge: a CLI for creating, managing, and analyzing blockmesh networks.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{create, hardfork, search};

/// meshforge: create, fork, and search blockmesh networks.
#[derive(Parser, Debug)]
#[command(name = "meshforge", version, about)]
struct Args {
    /// Suppress progress logging.
    #[arg(long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new network.
    #[command(visible_aliases = ["new", "init"])]
    Create(create::CreateArgs),

    /// Search the stored chains for a particular phrase.
    #[command(visible_aliases = ["analyze", "query", "s"])]
    Search(search::SearchArgs),

    /// Fork a network by bumping its chain version.
    #[command(visible_aliases = ["fork", "f"])]
    Hardfork(hardfork::HardforkArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.silent { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match args.command {
        Command::Create(create_args) => create::run(create_args, args.silent),
        Command::Search(search_args) => search::run(search_args, args.silent),
        Command::Hardfork(hardfork_args) => hardfork::run(hardfork_args, args.silent),
    }
}
