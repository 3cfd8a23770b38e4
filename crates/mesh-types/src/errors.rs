//! Primitive type errors.

use thiserror::Error;

/// Errors produced while parsing or deriving primitive types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Address string is not a valid address encoding.
    #[error("Invalid address encoding: {0}")]
    InvalidAddress(String),

    /// Hash string is not a valid hash encoding.
    #[error("Invalid hash encoding: {0}")]
    InvalidHash(String),

    /// Balance string is not a parseable decimal amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Secret key bytes do not form a valid scalar.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Public key bytes do not form a valid curve point.
    #[error("Invalid public key")]
    InvalidPublicKey,
}
