//! # mesh-genesis - Genesis Construction Pipeline
//!
//! Bootstraps a new blockmesh network: generates validated account
//! identities, assembles the initial allocation table (from a declarative
//! genesis document or interactive elicitation), derives the deterministic
//! network/chain identifiers, and materializes the chain's genesis block.
//!
//! ## Pipeline
//!
//! ```text
//! genesis document / prompt answers
//!         │
//!         ▼
//!   AllocationTable  ←── generated accounts (sentinel-free addresses)
//!         │
//!         ▼
//!   assemble_config  ←── derive_chain_id(network_id)
//!         │
//!         ▼
//!   ChainConfig::write_to_memory   (explicit, caller-driven)
//!         │
//!         ▼
//!      bootstrap     ──→ chain + genesis block on disk
//! ```
//!
//! The pipeline is single-threaded and synchronous; each step completes
//! before the next begins. It assumes exclusive ownership of the data
//! directory for the duration of one invocation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alloc;
pub mod assemble;
pub mod bootstrap;
pub mod errors;
pub mod identity;
pub mod keygen;
pub mod prompt;

// Re-exports
pub use alloc::{
    decode_alloc, request_alloc, AllocationEntry, AllocationTable, MAX_INTERACTIVE_ENTRIES,
};
pub use assemble::{assemble_config, GenesisDocument, CHAIN_VERSION};
pub use bootstrap::bootstrap;
pub use errors::GenesisError;
pub use identity::derive_chain_id;
pub use keygen::{generate_account, make_faucet_account};
pub use prompt::{ask_normalized, AskOptions, Prompt, ScriptedPrompt};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
