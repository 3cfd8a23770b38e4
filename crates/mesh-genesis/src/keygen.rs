//! # Account Generation
//!
//! Fresh account identities via rejection sampling: keypairs are drawn until
//! the derived address contains no sentinel byte. The sentinel
//! ([`mesh_types::SENTINEL_BYTE`], `\r`) is the line-terminator marker of
//! the text input pipeline; a secure curve makes a collision vanishingly
//! unlikely, so in practice a single draw succeeds and the loop needs no
//! iteration bound.

use tracing::debug;

use mesh_ledger::{register_faucet, Account, NetworkContext};
use mesh_types::Keypair;

use crate::errors::GenesisError;

/// Generate a fresh account with a sentinel-free address and persist it to
/// the keystore.
pub fn generate_account(ctx: &NetworkContext) -> Result<Account, GenesisError> {
    let keypair = loop {
        let candidate = Keypair::generate();
        if !candidate.address().contains_sentinel() {
            break candidate;
        }
        debug!("rejected candidate address containing sentinel byte");
    };

    let account = Account::from_keypair(keypair);
    account.write_to_memory(ctx)?;
    debug!(address = %account.address(), "generated account");
    Ok(account)
}

/// Generate a faucet account and register its wallet credential (keystore
/// file plus credential record).
pub fn make_faucet_account(ctx: &NetworkContext) -> Result<Account, GenesisError> {
    let account = generate_account(ctx)?;
    register_faucet(ctx, &account)?;
    Ok(account)
}
