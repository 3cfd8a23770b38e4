//! # Ledger Accounts
//!
//! An account is a secp256k1 keypair plus its derived address, persisted one
//! JSON record per account under `<dataDir>/keystore/`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

use mesh_types::{Address, Keypair, TypeError};

use crate::context::NetworkContext;
use crate::errors::LedgerError;
use crate::store;

/// A keypair-backed account.
pub struct Account {
    address: Address,
    keypair: Keypair,
}

/// On-disk account record. The secret scalar is stored hex-encoded; the
/// keystore directory is the trust boundary.
#[derive(Serialize, Deserialize)]
struct StoredAccount {
    address: Address,
    private_key: String,
}

impl Account {
    /// Wrap a keypair as an account.
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            address: keypair.address(),
            keypair,
        }
    }

    /// The account's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The account's keypair.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Persist this account to the keystore.
    pub fn write_to_memory(&self, ctx: &NetworkContext) -> Result<(), LedgerError> {
        let record = StoredAccount {
            address: self.address,
            private_key: hex::encode(self.keypair.to_bytes()),
        };
        store::write_json(&ctx.account_path(&self.address), &record)?;
        debug!(address = %self.address, "account written to keystore");
        Ok(())
    }

    /// Read a persisted account back from the keystore.
    pub fn read_from_memory(ctx: &NetworkContext, address: &Address) -> Result<Self, LedgerError> {
        let path = ctx.account_path(address);
        if !path.exists() {
            return Err(LedgerError::AccountNotFound(*address));
        }
        let record: StoredAccount = store::read_json(&path)?;

        // Decode straight into a stack buffer and wipe it once the signing
        // key owns the scalar.
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&record.private_key, &mut bytes)
            .map_err(|_| TypeError::InvalidPrivateKey)?;
        let keypair = Keypair::from_bytes(&bytes);
        bytes.zeroize();
        let keypair = keypair?;

        Ok(Self {
            address: record.address,
            keypair,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> (tempfile::TempDir, NetworkContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = NetworkContext::new(dir.path(), "test_net", true);
        (dir, ctx)
    }

    #[test]
    fn test_keystore_roundtrip() {
        let (_dir, ctx) = test_ctx();
        let account = Account::from_keypair(Keypair::generate());
        account.write_to_memory(&ctx).unwrap();

        let restored = Account::read_from_memory(&ctx, &account.address()).unwrap();
        assert_eq!(restored.address(), account.address());
        assert_eq!(restored.keypair().to_bytes(), account.keypair().to_bytes());
    }

    #[test]
    fn test_corrupt_private_key_rejected() {
        let (_dir, ctx) = test_ctx();
        let account = Account::from_keypair(Keypair::generate());
        account.write_to_memory(&ctx).unwrap();

        // Truncate the stored secret; the record must no longer decode.
        let path = ctx.account_path(&account.address());
        let mut record: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        record["private_key"] = serde_json::Value::String("abc123".to_string());
        std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert!(matches!(
            Account::read_from_memory(&ctx, &account.address()),
            Err(LedgerError::Type(TypeError::InvalidPrivateKey))
        ));
    }

    #[test]
    fn test_missing_account() {
        let (_dir, ctx) = test_ctx();
        let absent = Keypair::generate().address();
        assert!(matches!(
            Account::read_from_memory(&ctx, &absent),
            Err(LedgerError::AccountNotFound(_))
        ));
    }
}
