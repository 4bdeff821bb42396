//! PriceHistory: one symbol's daily bars, sorted and deduplicated.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calendar::{parse_date, ResolveError};
use crate::domain::{DataWindow, WindowError};

/// Daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
}

/// CSV row as exported by common market-data tools.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Adj Close", default)]
    adj_close: Option<f64>,
    #[serde(rename = "Volume", default)]
    volume: Option<u64>,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no price history for '{symbol}' at {}", .path.display())]
    NotFound { symbol: String, path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed price history for '{symbol}': {source}")]
    Csv { symbol: String, source: csv::Error },

    #[error("row {row} of '{symbol}' price history: {source}")]
    InvalidDate {
        symbol: String,
        row: usize,
        source: ResolveError,
    },

    #[error("price history for '{symbol}' is empty")]
    Empty { symbol: String },

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Bars for one symbol, ascending by date with one bar per date.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceHistory {
    /// Sort ascending by date and drop repeated dates, keeping the first row
    /// seen for each date.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);
        bars.dedup_by_key(|bar| bar.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Read a CSV history file.
    pub fn from_csv_path(symbol: &str, path: &Path) -> Result<Self, HistoryError> {
        let file = File::open(path).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(symbol, file)
    }

    /// Read CSV history from any reader. Dates must be strict `YYYY-MM-DD`.
    pub fn from_reader<R: Read>(symbol: &str, reader: R) -> Result<Self, HistoryError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut bars = Vec::new();
        for (index, record) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = record.map_err(|source| HistoryError::Csv {
                symbol: symbol.to_string(),
                source,
            })?;
            let date = parse_date(&row.date).map_err(|source| HistoryError::InvalidDate {
                symbol: symbol.to_string(),
                row: index + 1,
                source,
            })?;
            bars.push(PriceBar {
                date,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                adj_close: row.adj_close,
                volume: row.volume,
            });
        }

        let history = Self::new(symbol, bars);
        debug!(symbol, bars = history.len(), "loaded price history");
        Ok(history)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Span from the earliest to the latest bar.
    pub fn window(&self) -> Result<DataWindow, HistoryError> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Ok(DataWindow::new(first.date, last.date)?),
            _ => Err(HistoryError::Empty {
                symbol: self.symbol.clone(),
            }),
        }
    }
}
