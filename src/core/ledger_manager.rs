use std::path::Path;

use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::storage::StorageBackend;

/// Binds one in-memory ledger to its storage for the length of a session.
///
/// The ledger is loaded by [`LedgerManager::open`] and written back in full by
/// [`LedgerManager::close`]. A manager dropped without `close` still saves,
/// logging any failure since `Drop` cannot return it.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    closed: bool,
}

impl LedgerManager {
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let ledger = storage.load();
        tracing::info!(
            path = %storage.path().display(),
            count = ledger.len(),
            "ledger opened"
        );
        Self {
            ledger,
            storage,
            closed: false,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Writes the current ledger without ending the session.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.ledger)
    }

    /// Saves and ends the session.
    pub fn close(mut self) -> Result<(), LedgerError> {
        self.closed = true;
        self.storage.save(&self.ledger)?;
        tracing::info!(
            path = %self.storage.path().display(),
            count = self.ledger.len(),
            "ledger closed"
        );
        Ok(())
    }
}

impl Drop for LedgerManager {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(err) = self.storage.save(&self.ledger) {
            tracing::error!(
                path = %self.storage.path().display(),
                error = %err,
                "failed to save ledger on drop"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{json_backend::JsonStorage, text_backend::TextStorage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn open_missing_file_starts_empty() {
        let temp = tempdir().unwrap();
        let manager = LedgerManager::open(Box::new(TextStorage::new(temp.path().join("t.txt"))));
        assert!(manager.ledger().is_empty());
        manager.close().unwrap();
    }

    #[test]
    fn close_persists_and_reopen_restores() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");

        let mut manager = LedgerManager::open(Box::new(TextStorage::new(path.clone())));
        manager
            .ledger_mut()
            .insert("2024-01-05", "Salary", 3000.0, "income")
            .unwrap();
        manager.close().unwrap();

        let reopened = LedgerManager::open(Box::new(TextStorage::new(path)));
        assert_eq!(reopened.ledger().len(), 1);
        assert_eq!(reopened.ledger().transactions()[0].description, "Salary");
    }

    #[test]
    fn close_writes_even_without_mutation() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.json");
        let manager = LedgerManager::open(Box::new(JsonStorage::new(path.clone())));
        manager.close().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn drop_saves_unclosed_session() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        {
            let mut manager = LedgerManager::open(Box::new(TextStorage::new(path.clone())));
            manager
                .ledger_mut()
                .insert("2024-01-10", "Rent", 1200.0, "expense")
                .unwrap();
        }
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-10 Rent 1200 expense\n"
        );
    }

    #[test]
    fn close_reports_save_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        let manager = LedgerManager::open(Box::new(TextStorage::new(path.clone())));
        // A directory in place of the staging file makes the write fail.
        fs::create_dir_all(temp.path().join("transactions.txt.tmp")).unwrap();
        assert!(manager.close().is_err());
        assert!(!path.exists());
    }
}
