//! End-to-end pipeline tests: elicitation through assembly, persistence,
//! bootstrap, and idempotent re-bootstrap against one data directory.

use std::fs;

use mesh_genesis::{assemble_config, bootstrap, GenesisDocument, ScriptedPrompt};
use mesh_ledger::{read_faucet, Chain, ChainConfig, NetworkContext};
use mesh_types::{keccak256, Balance};

fn test_ctx() -> (tempfile::TempDir, NetworkContext) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = NetworkContext::new(dir.path(), "test_net", true);
    (dir, ctx)
}

#[test]
fn interactive_create_then_bootstrap() {
    let (_dir, ctx) = test_ctx();

    // network id 7, issuance 1000, faucet enabled with 50 coins, no
    // additional addresses, inflation 0.02
    let mut prompt = ScriptedPrompt::new(["7", "1000", "true", "50", "", "0.02"]);
    let config = assemble_config(&ctx, &mut prompt, &GenesisDocument::default()).unwrap();

    assert_eq!(config.network_id, 7);
    assert_eq!(config.chain_id, keccak256(&[7]));
    assert_eq!(config.alloc_addresses.len(), 2);
    assert_eq!(config.inflation_rate, 0.02);

    // Faucet credential was registered as a side effect of collection.
    let faucet = read_faucet(&ctx).unwrap().unwrap();
    assert_eq!(faucet.address, config.alloc_addresses[1]);
    assert!(ctx.faucet_key_path().exists());

    // Persistence is an explicit separate step.
    assert!(!ctx.config_path().exists());
    config.write_to_memory(&ctx).unwrap();
    assert!(ctx.config_path().exists());

    bootstrap(&ctx).unwrap();

    let primary = config.alloc_addresses[0];
    let chain = Chain::read_from_memory(&ctx, &primary).unwrap();
    let genesis = chain.genesis.expect("genesis materialized");
    assert_eq!(genesis.transactions.len(), 2);
    assert_eq!(genesis.transactions[0].amount, Balance::from_coins(1000));
    assert_eq!(genesis.transactions[1].amount, Balance::from_coins(50));
    assert!(genesis.transactions.iter().all(|t| t.signature.is_some()));
}

#[test]
fn declarative_document_skips_elicitation() {
    let (dir, ctx) = test_ctx();

    // A declarative document only funds externally supplied addresses, so
    // bootstrap needs a keystore record: generate the primary first.
    let primary = mesh_genesis::generate_account(&ctx).unwrap();
    let doc_path = dir.path().join("genesis.json");
    fs::write(
        &doc_path,
        format!(
            r#"{{"networkID": 7, "inflation": 0.02, "alloc": {{"{}": {{"balance": "100"}}}}}}"#,
            primary.address()
        ),
    )
    .unwrap();

    let document = GenesisDocument::from_path(Some(&doc_path)).unwrap();
    let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
    let config = assemble_config(&ctx, &mut prompt, &document).unwrap();

    assert_eq!(config.network_id, 7);
    assert_eq!(config.alloc_addresses, vec![primary.address()]);
    assert_eq!(
        config.balance_of(&primary.address()),
        Some(Balance::parse("100").unwrap())
    );
    assert_eq!(config.chain_id, keccak256(&[7]));

    config.write_to_memory(&ctx).unwrap();
    bootstrap(&ctx).unwrap();

    let chain = Chain::read_from_memory(&ctx, &primary.address()).unwrap();
    assert_eq!(chain.genesis.unwrap().transactions.len(), 1);
}

#[test]
fn rebootstrap_is_idempotent() {
    let (_dir, ctx) = test_ctx();

    let mut prompt = ScriptedPrompt::new(["1", "1000", "false", "", "0.0"]);
    let config = assemble_config(&ctx, &mut prompt, &GenesisDocument::default()).unwrap();
    config.write_to_memory(&ctx).unwrap();

    bootstrap(&ctx).unwrap();
    let primary = config.alloc_addresses[0];
    let first = Chain::read_from_memory(&ctx, &primary).unwrap().genesis.unwrap();

    bootstrap(&ctx).unwrap();
    let second = Chain::read_from_memory(&ctx, &primary).unwrap().genesis.unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(first.timestamp, second.timestamp);
}

#[test]
fn persisted_config_round_trips() {
    let (_dir, ctx) = test_ctx();

    let mut prompt = ScriptedPrompt::new(["1", "123.456", "false", "", "0.0"]);
    let config = assemble_config(&ctx, &mut prompt, &GenesisDocument::default()).unwrap();
    config.write_to_memory(&ctx).unwrap();

    let back = ChainConfig::read_from_memory(&ctx).unwrap();
    let primary = config.alloc_addresses[0];
    assert_eq!(
        back.balance_of(&primary).unwrap().to_string(),
        "123.456000000000000000"
    );
    assert_eq!(back.chain_id, config.chain_id);
    assert_eq!(back.chain_version, config.chain_version);
}
