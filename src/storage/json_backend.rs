use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::{Ledger, Transaction},
};

use super::{write_atomic, Result, StorageBackend};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Serialized shape of a ledger file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default = "LedgerDocument::schema_version_default")]
    pub schema_version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerDocument {
    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// JSON store that keeps multi-word descriptions intact.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Ledger {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no ledger file yet, starting empty");
            return Ledger::new();
        }
        match load_ledger_from_path(&self.path) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unable to read ledger file, starting empty");
                Ledger::new()
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Strict loader: reports decode failures and newer schema versions.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let document: LedgerDocument = serde_json::from_str(&data)?;
    if document.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::Storage(format!(
            "ledger schema v{} is newer than supported v{}",
            document.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(Ledger::from_transactions(document.transactions))
}

/// Writes the ledger as JSON. Non-finite amounts are refused since JSON
/// encodes them as `null`, which would not decode on the next load.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some((idx, txn)) = ledger
        .iter()
        .enumerate()
        .find(|(_, txn)| !txn.amount.is_finite())
    {
        return Err(LedgerError::Storage(format!(
            "record {} dated `{}` has non-finite amount {} and cannot be stored as JSON",
            idx + 1,
            txn.date,
            txn.amount
        )));
    }
    let document = LedgerDocument {
        schema_version: CURRENT_SCHEMA_VERSION,
        saved_at: Some(Utc::now()),
        transactions: ledger.transactions().to_vec(),
    };
    let json = serde_json::to_string_pretty(&document)?;
    write_atomic(path, &json)
}
