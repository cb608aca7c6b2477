use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::services::MonthSelection,
    errors::LedgerError,
    storage::{write_atomic, StorageFormat},
    utils::paths,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_format: StorageFormat,
    /// Overrides the ledger location; relative paths resolve against the
    /// data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    pub month_selection: MonthSelection,
    /// Ask before the destructive type filter runs in interactive mode.
    pub confirm_destructive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_format: StorageFormat::Text,
            data_file: None,
            month_selection: MonthSelection::AllMonths,
            confirm_destructive: true,
        }
    }
}

/// Loads and stores [`Config`] inside the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    /// Returns defaults when no configuration file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Where the ledger for `config` lives.
    pub fn ledger_path(&self, config: &Config) -> PathBuf {
        match &config.data_file {
            Some(custom) if custom.is_absolute() => custom.clone(),
            Some(custom) => self.base.join(custom),
            None => paths::ledger_file_in(&self.base, config.storage_format),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
