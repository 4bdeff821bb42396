//! Directory of per-symbol history files.
//!
//! Layout: `{dir}/{SYMBOL}.csv`, symbol upper-cased.

use std::path::{Path, PathBuf};

use super::history::{HistoryError, PriceHistory};

#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the history file for `symbol`.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.trim().to_uppercase()))
    }

    /// Load the history for `symbol`.
    pub fn load(&self, symbol: &str) -> Result<PriceHistory, HistoryError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(HistoryError::NotFound {
                symbol: symbol.to_string(),
                path,
            });
        }
        PriceHistory::from_csv_path(&symbol.trim().to_uppercase(), &path)
    }
}
