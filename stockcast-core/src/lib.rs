//! Stockcast Core: trading-date resolution for next-session price predictions.
//!
//! This crate contains the calendar logic that decides which trading day a
//! prediction request actually applies to:
//! - Strict `YYYY-MM-DD` parsing
//! - The resolver: minimum-history lower bound, next-trading-day upper bound,
//!   weekend snap to Monday
//! - Value types (`DataWindow`, `ResolutionRequest`, `ResolutionResult`)
//! - A `Clock` port so "today" is always supplied by the caller
//! - Local price-history tables used to derive the data window

pub mod calendar;
pub mod clock;
pub mod data;
pub mod domain;

pub use calendar::{
    format_date, is_weekend, next_trading_day, parse_date, resolve, snap_to_weekday,
    ResolveError, DATE_FORMAT,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use data::{HistoryError, HistoryStore, PriceBar, PriceHistory};
pub use domain::{DataWindow, ResolutionRequest, ResolutionResult, WindowError};
