//! Trading calendar: date parsing and prediction-date resolution.

pub mod error;
pub mod parse;
pub mod resolver;

pub use error::ResolveError;
pub use parse::{format_date, parse_date, DATE_FORMAT};
pub use resolver::{is_weekend, next_trading_day, resolve, snap_to_weekday};
