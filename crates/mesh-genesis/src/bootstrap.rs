//! # Chain Bootstrap
//!
//! Drives the ledger engine from a persisted configuration to a chain with
//! a materialized genesis block. Re-running against a data directory that
//! already holds the chain resumes instead of failing: the existing chain is
//! re-opened and its genesis block left untouched.

use tracing::info;

use mesh_ledger::{Account, Chain, ChainConfig, LedgerError, NetworkContext};

use crate::errors::GenesisError;

/// Bootstrap the network configured in `ctx`'s data directory.
///
/// The chain is written twice: once before and once after genesis
/// materialization, so a crash in between leaves a recoverable chain record
/// without a genesis block rather than a torn write.
pub fn bootstrap(ctx: &NetworkContext) -> Result<(), GenesisError> {
    let config = ChainConfig::read_from_memory(ctx)?;

    let genesis_address = *config.alloc_addresses.first().ok_or_else(|| {
        GenesisError::MalformedAllocation("configuration has no allocation addresses".to_string())
    })?;

    let mut chain = match Chain::new(ctx, genesis_address, config.network_id) {
        Ok(chain) => chain,
        // Resume path: a chain for this address already exists.
        Err(LedgerError::ChainAlreadyExists(_)) => {
            info!(chain = %genesis_address, "chain already exists, resuming");
            Chain::read_from_memory(ctx, &genesis_address)?
        }
        Err(other) => return Err(other.into()),
    };

    let genesis_account = Account::read_from_memory(ctx, &genesis_address)?;

    chain.write_to_memory(ctx)?;
    chain.make_genesis(&config, genesis_account.keypair())?;
    chain.write_to_memory(ctx)?;

    info!(chain = %genesis_address, network_id = config.network_id, "network bootstrapped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::CHAIN_VERSION;
    use crate::keygen::generate_account;
    use std::collections::BTreeMap;

    use mesh_types::{keccak256, Balance};

    fn test_ctx() -> (tempfile::TempDir, NetworkContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = NetworkContext::new(dir.path(), "test_net", true);
        (dir, ctx)
    }

    fn write_config(ctx: &NetworkContext) -> (ChainConfig, Account) {
        let account = generate_account(ctx).unwrap();
        let mut alloc = BTreeMap::new();
        alloc.insert(account.address().to_string(), Balance::from_coins(1000));
        let config = ChainConfig {
            alloc,
            alloc_addresses: vec![account.address()],
            network_id: 1,
            inflation_rate: 0.0,
            chain_id: keccak256(&[1]),
            chain_version: CHAIN_VERSION.to_string(),
        };
        config.write_to_memory(ctx).unwrap();
        (config, account)
    }

    #[test]
    fn test_bootstrap_materializes_genesis() {
        let (_dir, ctx) = test_ctx();
        let (_config, account) = write_config(&ctx);

        bootstrap(&ctx).unwrap();

        let chain = Chain::read_from_memory(&ctx, &account.address()).unwrap();
        let genesis = chain.genesis.expect("genesis must be materialized");
        assert_eq!(genesis.transactions.len(), 1);
        assert_eq!(genesis.transactions[0].recipient, account.address());
        assert_eq!(genesis.transactions[0].amount, Balance::from_coins(1000));
    }

    #[test]
    fn test_bootstrap_twice_resumes() {
        let (_dir, ctx) = test_ctx();
        let (_config, account) = write_config(&ctx);

        bootstrap(&ctx).unwrap();
        let first = Chain::read_from_memory(&ctx, &account.address())
            .unwrap()
            .genesis
            .unwrap();

        // Second run must not fail and must leave the genesis unchanged.
        bootstrap(&ctx).unwrap();
        let second = Chain::read_from_memory(&ctx, &account.address())
            .unwrap()
            .genesis
            .unwrap();

        assert_eq!(first.hash, second.hash);
        assert_eq!(first.timestamp, second.timestamp);
    }

    #[test]
    fn test_bootstrap_without_config_fails() {
        let (_dir, ctx) = test_ctx();
        assert!(matches!(
            bootstrap(&ctx),
            Err(GenesisError::Ledger(LedgerError::ConfigNotFound(_)))
        ));
    }

    #[test]
    fn test_bootstrap_missing_account_fails() {
        let (_dir, ctx) = test_ctx();
        let (_config, account) = write_config(&ctx);

        // Drop the keystore record so only the config survives.
        std::fs::remove_file(ctx.account_path(&account.address())).unwrap();

        assert!(matches!(
            bootstrap(&ctx),
            Err(GenesisError::Ledger(LedgerError::AccountNotFound(_)))
        ));
    }
}
