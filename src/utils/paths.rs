use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::storage::StorageFormat;

pub const HOME_ENV: &str = "FINANCE_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".finance_core";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory: `$FINANCE_CORE_HOME` when set,
/// otherwise `~/.finance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default ledger file for `format` inside `base`.
pub fn ledger_file_in(base: &Path, format: StorageFormat) -> PathBuf {
    base.join(format.default_file_name())
}
