//! # mesh-types - Primitive Types
//!
//! Types shared by every meshforge crate.
//!
//! | Module | Type | Use Case |
//! |--------|------|----------|
//! | `address` | `Address` | 20-byte account identifiers |
//! | `hash` | `Hash` | Keccak-256 digests (chain/block/tx ids) |
//! | `balance` | `Balance` | U256 fixed-point coin amounts |
//! | `keypair` | `Keypair` | secp256k1 account identities |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod balance;
pub mod errors;
pub mod hash;
pub mod keypair;

// Re-exports
pub use address::{Address, ADDRESS_LEN, SENTINEL_BYTE};
pub use balance::{Balance, DECIMALS};
pub use errors::TypeError;
pub use hash::{keccak256, keccak256_many, Hash, HASH_LEN};
pub use keypair::{verify_signature, Keypair};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
