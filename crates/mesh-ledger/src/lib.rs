//! # mesh-ledger - Ledger Engine & Persistence
//!
//! The minimal ledger engine the genesis pipeline drives: chains, accounts,
//! the persisted chain configuration, and the wallet credential store. Every
//! durable record is one JSON file under the run's data directory; the
//! [`NetworkContext`] names that directory explicitly so no component relies
//! on process-global state.
//!
//! | Module | Record | Location |
//! |--------|--------|----------|
//! | `account` | `Account` | `keystore/account_<addr>.json` |
//! | `chain` | `Chain` | `db/chain/chain_<addr>.json` |
//! | `config` | `ChainConfig` | `config/config.json` |
//! | `wallet` | `WalletAccount` | `wallet/accounts.json` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod block;
pub mod chain;
pub mod config;
pub mod context;
pub mod errors;
mod store;
pub mod wallet;

// Re-exports
pub use account::Account;
pub use block::{Genesis, Transaction};
pub use chain::Chain;
pub use config::ChainConfig;
pub use context::NetworkContext;
pub use errors::LedgerError;
pub use wallet::{read_faucet, register_faucet, WalletAccount, FAUCET_NAME};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
