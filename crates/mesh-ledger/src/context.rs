//! # Network Context
//!
//! Every component takes an explicit [`NetworkContext`] naming the data
//! directory for the current run instead of consulting shared global state,
//! so two invocations against different directories cannot interfere through
//! process-wide variables.

use std::path::{Path, PathBuf};

use mesh_types::Address;

/// Resolved per-invocation settings: where network files live, what the
/// network is called, and whether progress output is suppressed.
#[derive(Debug, Clone)]
pub struct NetworkContext {
    /// Root directory all network files are stored under.
    pub data_dir: PathBuf,
    /// Name the network is registered as.
    pub network_name: String,
    /// Suppress progress output (logging verbosity is the binary's concern).
    pub silent: bool,
}

impl NetworkContext {
    /// Create a context rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>, network_name: impl Into<String>, silent: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            network_name: network_name.into(),
            silent,
        }
    }

    /// Default data directory: `$HOME/.meshforge/data`, falling back to
    /// `./data` when no home directory is resolvable.
    pub fn default_data_dir() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".meshforge").join("data"),
            None => PathBuf::from("data"),
        }
    }

    /// Path of the persisted chain configuration.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config").join("config.json")
    }

    /// Directory holding persisted account keys.
    pub fn keystore_dir(&self) -> PathBuf {
        self.data_dir.join("keystore")
    }

    /// Path of a persisted account record.
    pub fn account_path(&self, address: &Address) -> PathBuf {
        self.keystore_dir().join(format!("account_{address}.json"))
    }

    /// Directory holding persisted chain records.
    pub fn chain_dir(&self) -> PathBuf {
        self.data_dir.join("db").join("chain")
    }

    /// Path of a persisted chain record.
    pub fn chain_path(&self, address: &Address) -> PathBuf {
        self.chain_dir().join(format!("chain_{address}.json"))
    }

    /// Path of the faucet keystore file.
    pub fn faucet_key_path(&self) -> PathBuf {
        self.data_dir
            .join("faucet")
            .join("keystore")
            .join("private_key.key")
    }

    /// Path of the wallet credential store.
    pub fn wallet_store_path(&self) -> PathBuf {
        self.data_dir.join("wallet").join("accounts.json")
    }
}

impl Default for NetworkContext {
    fn default() -> Self {
        Self::new(Self::default_data_dir(), "main_net", false)
    }
}
