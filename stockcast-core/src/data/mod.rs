//! Local price-history tables.
//!
//! History files are plain CSV exports (`Date,Open,High,Low,Close,Adj Close,Volume`)
//! kept under a data directory. They are read only to find the data window;
//! fetching them from a market-data vendor happens elsewhere.

pub mod history;
pub mod store;

pub use history::{HistoryError, PriceBar, PriceHistory};
pub use store::HistoryStore;
