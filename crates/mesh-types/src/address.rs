//! # Account Addresses
//!
//! 20-byte account identifiers derived from secp256k1 public keys, rendered
//! as `0x`-prefixed hex.
//!
//! Addresses containing the [`SENTINEL_BYTE`] are never accepted by the
//! account generator: that byte doubles as the carriage-return terminator in
//! the interactive input pipeline, so it must never appear inside a real
//! address.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::errors::TypeError;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Reserved line-terminator marker (`\r`). Forbidden inside address bytes.
pub const SENTINEL_BYTE: u8 = b'\r';

/// A 20-byte account address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw address bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Get raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Derive an address from a compressed secp256k1 public key:
    /// the last 20 bytes of `Keccak256(pubkey)`.
    pub fn from_public_key(pubkey: &[u8; 33]) -> Self {
        let digest = Keccak256::digest(pubkey);
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[12..32]);
        Self(bytes)
    }

    /// Parse from a `0x`-prefixed 40-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let stripped = s
            .strip_prefix("0x")
            .ok_or_else(|| TypeError::InvalidAddress(s.to_string()))?;
        let raw = hex::decode(stripped).map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; ADDRESS_LEN] = raw
            .try_into()
            .map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Whether any address byte equals the reserved sentinel.
    pub fn contains_sentinel(&self) -> bool {
        self.0.contains(&SENTINEL_BYTE)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
