//! Genesis pipeline errors.
//!
//! Every nested parse/generate/persist failure propagates to the caller
//! unchanged; the pipeline never logs-and-continues. The only retry
//! semantics anywhere are the address generator's rejection-sampling loop
//! and the bootstrapper's resume-on-exists path.

use thiserror::Error;

use mesh_ledger::LedgerError;
use mesh_types::Address;

/// Errors produced while assembling or bootstrapping a network.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// A supplied address string is not a valid address encoding.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A balance or issuance string is not a parseable decimal amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The alloc document is structurally invalid.
    #[error("malformed allocation document: {0}")]
    MalformedAllocation(String),

    /// A genesis document file failed to deserialize.
    #[error("malformed genesis document: {0}")]
    MalformedDocument(String),

    /// A network id, inflation rate, or yes/no answer failed to parse.
    #[error("invalid numeric input: {0}")]
    NumericParse(String),

    /// The same address was allocated twice.
    #[error("duplicate allocation address {0}")]
    DuplicateAddress(Address),

    /// The interactive allocation loop hit its entry cap.
    #[error("allocation table is full")]
    AllocationFull,

    /// The elicitation collaborator failed to produce an answer.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// A ledger engine or persistence failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
