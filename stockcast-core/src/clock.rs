//! Clock port for "today".
//!
//! The resolver never reads the system clock. Whoever builds a request asks a
//! [`Clock`] once and passes the resulting date in:
//! - [`SystemClock`] for production, pinned to the market's UTC offset
//! - [`FixedClock`] for tests and explicit `--today` overrides

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date according to this clock.
    fn today(&self) -> NaiveDate;

    /// Identifier for logs.
    fn name(&self) -> &str {
        "Clock"
    }
}

/// Wall-clock date at a fixed UTC offset.
///
/// The offset is the market's time zone, not the host's: a request made at
/// 02:00 UTC is already the next day in Mumbai (`+05:30`).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// `None` when the offset is a full day or more.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        let seconds = minutes.checked_mul(60)?;
        FixedOffset::east_opt(seconds).map(|offset| Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
