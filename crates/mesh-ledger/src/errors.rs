//! Ledger persistence errors.

use std::path::PathBuf;

use thiserror::Error;

use mesh_types::{Address, TypeError};

/// Errors produced by the ledger engine and its on-disk store.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A chain record already exists for this address.
    ///
    /// Callers bootstrapping a network treat this as a resume signal, not a
    /// failure (they re-open the existing chain instead).
    #[error("chain already exists for address {0}")]
    ChainAlreadyExists(Address),

    /// No chain record exists for this address.
    #[error("no chain found for address {0}")]
    ChainNotFound(Address),

    /// No account record exists for this address.
    #[error("no account found for address {0}")]
    AccountNotFound(Address),

    /// A wallet credential record with this name is already registered.
    #[error("wallet account {0:?} already exists")]
    AccountAlreadyExists(String),

    /// No chain configuration has been written to this data directory.
    #[error("no chain configuration found at {0}")]
    ConfigNotFound(PathBuf),

    /// The persisted chain version string is not a semantic version.
    #[error("malformed chain version {0:?}")]
    MalformedVersion(String),

    /// Underlying storage failure.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be encoded or decoded.
    #[error("codec failure: {0}")]
    Codec(#[from] serde_json::Error),

    /// A persisted primitive value was malformed.
    #[error(transparent)]
    Type(#[from] TypeError),
}
