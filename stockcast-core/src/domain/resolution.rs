//! Resolution request and result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::window::DataWindow;

/// Input to [`crate::calendar::resolve`].
///
/// `requested_date` of `None` means "predict for today"; the caller supplies
/// today's date separately. `min_lead_days` is the number of calendar days of
/// history a model needs before any prediction date (its input sequence
/// length). `None` skips the minimum-history check entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub requested_date: Option<NaiveDate>,
    pub window: DataWindow,
    pub min_lead_days: Option<u32>,
}

impl ResolutionRequest {
    /// Request a prediction for today with no minimum-history requirement.
    pub fn new(window: DataWindow) -> Self {
        Self {
            requested_date: None,
            window,
            min_lead_days: None,
        }
    }

    pub fn with_requested_date(mut self, date: NaiveDate) -> Self {
        self.requested_date = Some(date);
        self
    }

    pub fn with_min_lead_days(mut self, days: u32) -> Self {
        self.min_lead_days = Some(days);
        self
    }
}

/// The trading day a prediction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The candidate date before the weekend snap (the request, or today).
    pub requested_date: NaiveDate,
    /// The date the prediction is actually for.
    pub resolved_date: NaiveDate,
    /// True when `resolved_date` differs from `requested_date`.
    pub adjusted: bool,
}

impl ResolutionResult {
    pub fn new(requested_date: NaiveDate, resolved_date: NaiveDate) -> Self {
        Self {
            requested_date,
            resolved_date,
            adjusted: requested_date != resolved_date,
        }
    }

    /// User-facing notice for an adjusted date, naming both weekdays.
    pub fn notice(&self) -> Option<String> {
        if !self.adjusted {
            return None;
        }
        Some(format!(
            "Date given ({}) is a {}. So, actual prediction is for: {} ({})",
            self.requested_date,
            self.requested_date.format("%A"),
            self.resolved_date,
            self.resolved_date.format("%A"),
        ))
    }
}
