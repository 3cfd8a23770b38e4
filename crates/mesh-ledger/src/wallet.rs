//! # Wallet Credential Store
//!
//! Faucet support: a credential record keyed by the hash of the fixed
//! account name, plus a keystore file holding the faucet's secret material.
//! Duplicate registration is rejected so a faucet can only be created once
//! per data directory.

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};
use tracing::info;

use mesh_types::{keccak256, Address, Hash, Keypair};

use crate::account::Account;
use crate::context::NetworkContext;
use crate::errors::LedgerError;
use crate::store;

/// Fixed name the faucet credential is registered under.
pub const FAUCET_NAME: &str = "faucet";

/// A wallet credential record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Account name.
    pub name: String,
    /// Hash of the keystore secret material.
    pub password_hash: Hash,
    /// Ledger address the credential controls.
    pub address: Address,
}

fn record_key(name: &str) -> String {
    keccak256(name.as_bytes()).to_string()
}

fn read_store(ctx: &NetworkContext) -> Result<BTreeMap<String, WalletAccount>, LedgerError> {
    let path = ctx.wallet_store_path();
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    store::read_json(&path)
}

/// Register the faucet credential for `account`.
///
/// Writes a fresh secret to the faucet keystore file, then inserts the
/// credential record. Fails with [`LedgerError::AccountAlreadyExists`] when a
/// faucet record is already present.
pub fn register_faucet(
    ctx: &NetworkContext,
    account: &Account,
) -> Result<WalletAccount, LedgerError> {
    let mut records = read_store(ctx)?;
    let key = record_key(FAUCET_NAME);
    if records.contains_key(&key) {
        return Err(LedgerError::AccountAlreadyExists(FAUCET_NAME.to_string()));
    }

    // Keystore secret is independent of the account key: leaking the wallet
    // credential must not leak the ledger signing key.
    let keystore_key = Keypair::generate();
    let secret = hex::encode(keystore_key.to_bytes());
    let key_path = ctx.faucet_key_path();
    if let Some(parent) = key_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&key_path, &secret)?;

    let record = WalletAccount {
        name: FAUCET_NAME.to_string(),
        password_hash: keccak256(secret.as_bytes()),
        address: account.address(),
    };
    records.insert(key, record.clone());
    store::write_json(&ctx.wallet_store_path(), &records)?;
    info!(address = %record.address, "faucet credential registered");
    Ok(record)
}

/// Look up the faucet credential, if registered.
pub fn read_faucet(ctx: &NetworkContext) -> Result<Option<WalletAccount>, LedgerError> {
    let records = read_store(ctx)?;
    Ok(records.get(&record_key(FAUCET_NAME)).cloned())
}
