//! TOML configuration for prediction planning.
//!
//! Every section is optional:
//!
//! ```toml
//! [model]
//! seq_len = 60
//!
//! [data]
//! dir = "data"
//!
//! [calendar]
//! utc_offset_minutes = 330
//! reject_weekend_window = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stockcast_core::{HistoryStore, SystemClock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("calendar.utc_offset_minutes = {minutes} is outside -1439..=1439")]
    InvalidOffset { minutes: i32 },
}

/// Full configuration for planning prediction requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictConfig {
    pub model: ModelConfig,
    pub data: DataConfig,
    pub calendar: CalendarConfig,
}

/// Model parameters that constrain which dates can be predicted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Input sequence length in days. Used as the minimum history before a
    /// prediction date; `None` disables that check.
    pub seq_len: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding `{SYMBOL}.csv` history files.
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Market time zone as minutes east of UTC; decides what "today" is.
    pub utc_offset_minutes: i32,
    /// Fail instead of resolving when history ends on a Saturday or Sunday.
    pub reject_weekend_window: bool,
}

impl PredictConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock().map(|_| ())
    }

    /// System clock in the configured market time zone.
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        let minutes = self.calendar.utc_offset_minutes;
        SystemClock::with_offset_minutes(minutes).ok_or(ConfigError::InvalidOffset { minutes })
    }

    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(&self.data.dir)
    }

    /// Minimum calendar days of history required before a prediction date.
    pub fn min_lead_days(&self) -> Option<u32> {
        self.model.seq_len
    }
}
