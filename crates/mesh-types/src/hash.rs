//! # Keccak-256 Hashing
//!
//! The 32-byte digest type used for chain identifiers, block hashes, and
//! transaction hashes, rendered as `0x`-prefixed hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::errors::TypeError;

/// Length of a hash in bytes.
pub const HASH_LEN: usize = 32;

/// A Keccak-256 digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// The all-zero hash.
    pub const ZERO: Hash = Hash([0u8; HASH_LEN]);

    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Get raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Parse from a `0x`-prefixed 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let stripped = s
            .strip_prefix("0x")
            .ok_or_else(|| TypeError::InvalidHash(s.to_string()))?;
        let raw = hex::decode(stripped).map_err(|_| TypeError::InvalidHash(s.to_string()))?;
        let bytes: [u8; HASH_LEN] = raw
            .try_into()
            .map_err(|_| TypeError::InvalidHash(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&digest);
    Hash(bytes)
}

/// Hash multiple inputs as one stream.
pub fn keccak256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&digest);
    Hash(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let h1 = keccak256(b"test");
        let h2 = keccak256(b"test");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_different_inputs() {
        let h1 = keccak256(b"input1");
        let h2 = keccak256(b"input2");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let oneshot = keccak256(b"hello world");
        let streamed = keccak256_many(&[b"hello ", b"world"]);
        assert_eq!(oneshot, streamed);
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = keccak256(b"roundtrip");
        let parsed = Hash::from_hex(&hash.to_string()).unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn test_rejects_unprefixed_hex() {
        let bare = hex::encode([0u8; HASH_LEN]);
        assert!(Hash::from_hex(&bare).is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let hash = keccak256(b"serde");
        let json = serde_json::to_string(&hash).unwrap();
        assert!(json.starts_with("\"0x"));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, back);
    }
}
