//! # Chain Identity Derivation
//!
//! The chain identifier is a pure function of the network id: the Keccak-256
//! digest of its single-byte representation. Recomputing from the same id
//! always yields the same hash.

use tracing::warn;

use mesh_types::{keccak256, Hash};

/// Derive the deterministic chain identifier for `network_id`.
///
/// Only the low byte participates in the derivation, so ids above 255 alias
/// onto the same chain identifier. A warning is emitted for such ids; the
/// truncation itself is kept for compatibility with already-derived chains.
pub fn derive_chain_id(network_id: u64) -> Hash {
    if network_id > u8::MAX as u64 {
        warn!(
            network_id,
            "network id exceeds one byte; chain id derivation truncates and may alias networks"
        );
    }
    keccak256(&[network_id as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_and_deterministic() {
        assert_eq!(derive_chain_id(1), derive_chain_id(1));
        assert_eq!(derive_chain_id(200), derive_chain_id(200));
    }

    #[test]
    fn test_distinct_ids_distinct_hashes() {
        assert_ne!(derive_chain_id(1), derive_chain_id(2));
    }

    #[test]
    fn test_matches_single_byte_digest() {
        assert_eq!(derive_chain_id(7), keccak256(&[7u8]));
    }

    #[test]
    fn test_truncation_aliases_high_ids() {
        // Documented collision risk: 1 and 257 share a low byte.
        assert_eq!(derive_chain_id(1), derive_chain_id(257));
    }
}
