//! # Transactions and the Genesis Block
//!
//! Only what bootstrap and search need: allocation transactions with
//! deterministic hashes, and the genesis block assembled from them.
//! Consensus and transaction validation live outside this repository.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use mesh_types::{keccak256_many, Address, Balance, Hash, Keypair};

/// A ledger transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Position within the chain.
    pub index: u64,
    /// Sending address; `None` for coinbase/genesis allocations.
    pub sender: Option<Address>,
    /// Receiving address.
    pub recipient: Address,
    /// Transferred amount.
    pub amount: Balance,
    /// Free-form payload.
    pub payload: String,
    /// r||s signature over the transaction hash, hex-encoded.
    pub signature: Option<String>,
    /// Deterministic content hash.
    pub hash: Hash,
}

impl Transaction {
    /// Build an unsigned genesis allocation transaction.
    pub fn genesis_allocation(index: u64, recipient: Address, amount: Balance) -> Self {
        let mut txn = Self {
            index,
            sender: None,
            recipient,
            amount,
            payload: "genesis".to_string(),
            signature: None,
            hash: Hash::ZERO,
        };
        txn.hash = txn.compute_hash();
        txn
    }

    /// Deterministic hash over the transaction contents (signature excluded).
    pub fn compute_hash(&self) -> Hash {
        let sender_bytes = self.sender.map(|a| *a.as_bytes()).unwrap_or_default();
        let mut amount_bytes = [0u8; 32];
        self.amount.base_units().to_big_endian(&mut amount_bytes);
        keccak256_many(&[
            &self.index.to_be_bytes(),
            &sender_bytes,
            self.recipient.as_bytes(),
            &amount_bytes,
            self.payload.as_bytes(),
        ])
    }

    /// Sign the transaction hash.
    pub fn sign(&mut self, keypair: &Keypair) {
        let signature = keypair.sign(self.hash.as_bytes());
        self.signature = Some(hex::encode(signature));
    }
}

/// The first block of a chain, materialized from its configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genesis {
    /// Hash over the allocation transaction hashes.
    pub hash: Hash,
    /// Creation time (Unix seconds).
    pub timestamp: u64,
    /// One allocation transaction per configured address, in discovery order.
    pub transactions: Vec<Transaction>,
}

impl Genesis {
    /// Assemble a genesis block from already-built transactions.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let tx_hashes: Vec<&[u8]> = transactions
            .iter()
            .map(|t| t.hash.as_bytes().as_slice())
            .collect();
        Self {
            hash: keccak256_many(&tx_hashes),
            timestamp,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::verify_signature;

    #[test]
    fn test_allocation_hash_deterministic() {
        let recipient = Keypair::generate().address();
        let t1 = Transaction::genesis_allocation(0, recipient, Balance::from_coins(100));
        let t2 = Transaction::genesis_allocation(0, recipient, Balance::from_coins(100));
        assert_eq!(t1.hash, t2.hash);

        let t3 = Transaction::genesis_allocation(1, recipient, Balance::from_coins(100));
        assert_ne!(t1.hash, t3.hash);
    }

    #[test]
    fn test_signature_covers_hash() {
        let keypair = Keypair::generate();
        let mut txn =
            Transaction::genesis_allocation(0, keypair.address(), Balance::from_coins(1));
        txn.sign(&keypair);

        let raw = hex::decode(txn.signature.as_ref().unwrap()).unwrap();
        let signature: [u8; 64] = raw.try_into().unwrap();
        assert!(
            verify_signature(&keypair.public_key(), txn.hash.as_bytes(), &signature).is_ok()
        );
    }

    #[test]
    fn test_genesis_hash_depends_on_transactions() {
        let recipient = Keypair::generate().address();
        let g1 = Genesis::new(vec![Transaction::genesis_allocation(
            0,
            recipient,
            Balance::from_coins(5),
        )]);
        let g2 = Genesis::new(vec![Transaction::genesis_allocation(
            0,
            recipient,
            Balance::from_coins(6),
        )]);
        assert_ne!(g1.hash, g2.hash);
    }
}
