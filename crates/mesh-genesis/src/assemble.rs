//! # Genesis Configuration Assembly
//!
//! Composes the allocation table, derived identifiers, and version stamp
//! into a [`ChainConfig`]. Assembly has no side effects of its own:
//! persisting the result (`write_to_memory`) is the caller's explicit next
//! step, so an assembled config can be inspected or discarded before being
//! committed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use mesh_ledger::{ChainConfig, LedgerError, NetworkContext};

use crate::alloc::{decode_alloc, request_alloc, AllocationTable};
use crate::errors::GenesisError;
use crate::identity::derive_chain_id;
use crate::prompt::{ask_normalized, AskOptions, Prompt};

/// Chain version stamped into newly assembled configurations.
pub const CHAIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A declarative genesis document. Absent fields trigger interactive
/// elicitation with the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenesisDocument {
    /// Numeric network identifier.
    #[serde(rename = "networkID")]
    pub network_id: Option<u64>,
    /// Yearly inflation rate as a fraction.
    pub inflation: Option<f64>,
    /// Allocation map: address string → `{"balance": "<decimal>"}`.
    pub alloc: Option<Value>,
}

impl GenesisDocument {
    /// Read a genesis document from `path`. `None` yields an empty document
    /// (every field elicited interactively).
    pub fn from_path(path: Option<&Path>) -> Result<Self, GenesisError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read(path).map_err(LedgerError::Io)?;
        serde_json::from_slice(&raw)
            .map_err(|e| GenesisError::MalformedDocument(format!("{}: {e}", path.display())))
    }
}

/// Assemble a complete chain configuration from `document`, eliciting any
/// absent field through `prompt`.
pub fn assemble_config(
    ctx: &NetworkContext,
    prompt: &mut dyn Prompt,
    document: &GenesisDocument,
) -> Result<ChainConfig, GenesisError> {
    let network_id = match document.network_id {
        Some(id) => id,
        None => {
            let answer = ask_normalized(
                prompt,
                "What is this network's network ID?",
                &AskOptions::with_default("1"),
            )?;
            answer
                .parse()
                .map_err(|_| GenesisError::NumericParse(answer.clone()))?
        }
    };

    let table = match &document.alloc {
        Some(value) => decode_alloc(value)?,
        None => request_alloc(ctx, prompt)?,
    };
    if table.is_empty() {
        return Err(GenesisError::MalformedAllocation(
            "allocation table is empty".to_string(),
        ));
    }

    let inflation_rate = match document.inflation {
        Some(rate) => rate,
        None => {
            let answer = ask_normalized(
                prompt,
                "What will this network's inflation rate be?",
                &AskOptions::with_default("0.0"),
            )?;
            answer
                .parse()
                .map_err(|_| GenesisError::NumericParse(answer.clone()))?
        }
    };

    let config = config_from_table(table, network_id, inflation_rate);
    info!(
        network_id,
        entries = config.alloc_addresses.len(),
        chain_id = %config.chain_id,
        "genesis configuration assembled"
    );
    Ok(config)
}

fn config_from_table(table: AllocationTable, network_id: u64, inflation_rate: f64) -> ChainConfig {
    let mut alloc = BTreeMap::new();
    let mut alloc_addresses = Vec::with_capacity(table.len());
    for entry in table.entries() {
        alloc.insert(entry.address.to_string(), entry.balance);
        alloc_addresses.push(entry.address);
    }
    ChainConfig {
        alloc,
        alloc_addresses,
        network_id,
        inflation_rate,
        chain_id: derive_chain_id(network_id),
        chain_version: CHAIN_VERSION.to_string(),
    }
}
