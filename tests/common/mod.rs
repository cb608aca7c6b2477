#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use finance_core::Ledger;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Salary, rent, and bonus across January and February 2024.
pub fn scenario_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .insert("2024-01-05", "Salary", 3000.0, "income")
        .expect("insert salary");
    ledger
        .insert("2024-01-10", "Rent", 1200.0, "expense")
        .expect("insert rent");
    ledger
        .insert("2024-02-01", "Bonus", 500.0, "income")
        .expect("insert bonus");
    ledger
}
