use serde_json::Value;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{
    core::utils::{ensure_dir, tmp_path},
    domain::{ProgressState, Transaction},
    errors::{ProgressionError, Result},
};

use super::ProgressStore;

/// Stores a single user's [`ProgressState`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonStateStore {
    fn load(&self) -> Result<ProgressState> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored state; starting fresh");
            return Ok(ProgressState::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// Reads a JSON array of transactions. Records that do not deserialize are
/// skipped with a warning instead of failing the whole ledger.
pub fn load_ledger_from_path(path: &Path) -> Result<Vec<Transaction>> {
    let data = fs::read_to_string(path)?;
    let raw: Vec<Value> = match serde_json::from_str::<Value>(&data)? {
        Value::Array(items) => items,
        _ => {
            return Err(ProgressionError::InvalidInput(format!(
                "{}: expected a JSON array of transactions",
                path.display()
            )))
        }
    };

    let mut transactions = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Transaction>(value) {
            Ok(txn) => transactions.push(txn),
            Err(err) => warn!(index, error = %err, "skipping malformed transaction"),
        }
    }
    Ok(transactions)
}

pub fn save_ledger_to_path(transactions: &[Transaction], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(transactions)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_state_file_loads_default() {
        let dir = tempdir().unwrap();
        let store = JsonStateStore::new(dir.path().join("state.json"));
        assert_eq!(store.load().unwrap(), ProgressState::default());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"[
                {"amount": 10, "type": "income", "category": "Salário"},
                {"amount": "ten", "type": "income"},
                {"amount": 5, "type": "refund"},
                {"amount": 3, "type": "expense", "category": "Lazer", "dateIso": "2024-06-01"}
            ]"#,
        )
        .unwrap();
        let ledger = load_ledger_from_path(&path).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[1].category, "Lazer");
    }

    #[test]
    fn non_array_ledger_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"transactions": []}"#).unwrap();
        assert!(matches!(
            load_ledger_from_path(&path),
            Err(ProgressionError::InvalidInput(_))
        ));
    }
}
