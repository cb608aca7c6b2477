pub mod json_backend;
pub mod text_backend;

use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

const TMP_SUFFIX: &str = "tmp";

/// Abstraction over persistence backends capable of storing a ledger.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted ledger. Missing or unreadable storage degrades to
    /// an empty ledger instead of failing.
    fn load(&self) -> Ledger;

    /// Overwrites the persisted ledger with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    fn path(&self) -> &Path;
}

/// On-disk encodings supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// One whitespace-separated record per line.
    #[default]
    Text,
    Json,
}

impl StorageFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Text => "transactions.txt",
            Self::Json => "transactions.json",
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for StorageFormat {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(LedgerError::Config(format!(
                "unknown storage format `{other}`"
            ))),
        }
    }
}

/// Builds the backend for `format` rooted at `path`.
pub fn open_backend(format: StorageFormat, path: PathBuf) -> Box<dyn StorageBackend> {
    match format {
        StorageFormat::Text => Box::new(text_backend::TextStorage::new(path)),
        StorageFormat::Json => Box::new(json_backend::JsonStorage::new(path)),
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages `data` next to `path` and renames it into place.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
