//! Strict ISO date parsing.
//!
//! `NaiveDate::parse_from_str` alone is too lenient for request dates: it
//! accepts unpadded months and days (`2024-1-5`) and signed or overlong years.
//! Requests must match `YYYY-MM-DD` exactly, so the text shape is checked
//! before chrono validates the calendar fields.

use chrono::NaiveDate;

use super::error::ResolveError;

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Every accepted input round-trips: `format_date(parse_date(s)?) == s`.
pub fn parse_date(text: &str) -> Result<NaiveDate, ResolveError> {
    let invalid = || ResolveError::InvalidDateFormat {
        input: text.to_string(),
    };

    if !has_iso_shape(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Ten ASCII bytes: four digits, `-`, two digits, `-`, two digits.
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
