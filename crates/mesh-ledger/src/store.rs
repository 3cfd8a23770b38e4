//! JSON file persistence helpers.
//!
//! Every durable record is one pretty-printed JSON file. Writes create the
//! parent directory on demand; they are append-or-create, never multi-file
//! transactions.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::LedgerError;

/// Serialize `value` to `path`, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data)?;
    Ok(())
}

/// Deserialize a record from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LedgerError> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("record.json");
        let mut record = BTreeMap::new();
        record.insert("k".to_string(), 1u64);

        write_json(&path, &record).unwrap();
        let back: BTreeMap<String, u64> = read_json(&path).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u8>, _> = read_json(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LedgerError::Io(_))));
    }
}
