//! # Chain Configuration
//!
//! The persisted genesis configuration of a network: the allocation table,
//! the network/chain identifiers, and the chain version. Written once per
//! bootstrap to `<dataDir>/config/config.json`, immutable afterwards apart
//! from hardfork version bumps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use mesh_types::{Address, Balance, Hash};

use crate::context::NetworkContext;
use crate::errors::LedgerError;
use crate::store;

/// A network's genesis configuration.
///
/// `alloc_addresses` carries discovery order (entry 0 is the genesis/primary
/// account); `alloc` maps the rendered address to its initial balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Initial balance per address.
    pub alloc: BTreeMap<String, Balance>,
    /// Allocation addresses in discovery order.
    pub alloc_addresses: Vec<Address>,
    /// Numeric network identifier.
    pub network_id: u64,
    /// Yearly inflation rate as a fraction.
    pub inflation_rate: f64,
    /// Deterministic chain identifier derived from `network_id`.
    pub chain_id: Hash,
    /// Semantic version of the software that created the chain.
    pub chain_version: String,
}

impl ChainConfig {
    /// Persist the configuration.
    pub fn write_to_memory(&self, ctx: &NetworkContext) -> Result<(), LedgerError> {
        store::write_json(&ctx.config_path(), self)?;
        info!(network_id = self.network_id, path = %ctx.config_path().display(), "chain configuration written");
        Ok(())
    }

    /// Read the persisted configuration for this data directory.
    pub fn read_from_memory(ctx: &NetworkContext) -> Result<Self, LedgerError> {
        let path = ctx.config_path();
        if !path.exists() {
            return Err(LedgerError::ConfigNotFound(path));
        }
        store::read_json(&path)
    }

    /// Increment the patch component of `chain_version` (hardfork).
    pub fn bump_version(&mut self) -> Result<(), LedgerError> {
        let mut parts: Vec<u64> = Vec::with_capacity(3);
        for piece in self.chain_version.split('.') {
            parts.push(
                piece
                    .parse()
                    .map_err(|_| LedgerError::MalformedVersion(self.chain_version.clone()))?,
            );
        }
        if parts.len() != 3 {
            return Err(LedgerError::MalformedVersion(self.chain_version.clone()));
        }
        parts[2] += 1;
        self.chain_version = format!("{}.{}.{}", parts[0], parts[1], parts[2]);
        Ok(())
    }

    /// Balance allocated to `address`, if any.
    pub fn balance_of(&self, address: &Address) -> Option<Balance> {
        self.alloc.get(&address.to_string()).copied()
    }
}
