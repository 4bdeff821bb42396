//! DataWindow: the inclusive span of dates covered by historical data.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Inclusive range of dates for which historical data exists.
///
/// Invariant: `first_date <= last_date`, enforced by [`DataWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataWindow {
    first_date: NaiveDate,
    last_date: NaiveDate,
}

impl DataWindow {
    pub fn new(first_date: NaiveDate, last_date: NaiveDate) -> Result<Self, WindowError> {
        if first_date > last_date {
            return Err(WindowError::Inverted {
                first_date,
                last_date,
            });
        }
        Ok(Self {
            first_date,
            last_date,
        })
    }

    /// Window covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            first_date: date,
            last_date: date,
        }
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_date <= date && date <= self.last_date
    }

    /// Number of calendar days covered, counting both ends.
    pub fn calendar_days(&self) -> i64 {
        (self.last_date - self.first_date).num_days() + 1
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("data window is inverted: first date {first_date} is after last date {last_date}")]
    Inverted {
        first_date: NaiveDate,
        last_date: NaiveDate,
    },
}
