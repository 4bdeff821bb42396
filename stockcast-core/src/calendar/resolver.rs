//! Prediction-date resolution.
//!
//! Given a requested date (or today) and the window of available history,
//! decide which trading day the prediction applies to:
//!
//! 1. Lower bound: with a model-driven `min_lead_days`, the candidate must be
//!    at least `first_date + min_lead_days`.
//! 2. Upper bound: data is only published up to `last_date`, so the furthest
//!    sound prediction is the next trading day. After a Friday that is the
//!    following Monday (`last_date + 3`), otherwise `last_date + 1`.
//! 3. Weekend snap: Saturday and Sunday candidates move to Monday.
//!
//! A `last_date` that itself falls on a weekend is not special-cased here; it
//! takes the `last_date + 1` branch. Callers that treat such a window as bad
//! data reject it before resolving.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use super::error::ResolveError;
use crate::domain::{ResolutionRequest, ResolutionResult};

/// Resolve a prediction request against its data window.
///
/// `today` is the candidate when the request carries no date. The function is
/// pure: identical inputs always give identical outputs.
pub fn resolve(
    request: &ResolutionRequest,
    today: NaiveDate,
) -> Result<ResolutionResult, ResolveError> {
    let candidate = request.requested_date.unwrap_or(today);
    let window = request.window;

    if let Some(lead) = request.min_lead_days {
        let earliest_allowed = add_days(window.first_date(), u64::from(lead));
        if earliest_allowed > candidate {
            return Err(ResolveError::PredictionDateTooEarly {
                candidate,
                earliest_allowed,
            });
        }
    }

    let latest_allowed = next_trading_day(window.last_date());
    if candidate > latest_allowed {
        return Err(ResolveError::PredictionDateTooLate {
            candidate,
            last_known_date: window.last_date(),
            latest_allowed,
        });
    }

    let resolved = snap_to_weekday(candidate);
    debug!(
        %candidate,
        %resolved,
        %latest_allowed,
        min_lead_days = ?request.min_lead_days,
        "resolved prediction date"
    );
    Ok(ResolutionResult::new(candidate, resolved))
}

/// The furthest date a prediction can target given data up to `last_date`.
pub fn next_trading_day(last_date: NaiveDate) -> NaiveDate {
    let ahead = if last_date.weekday() == Weekday::Fri {
        3
    } else {
        1
    };
    add_days(last_date, ahead)
}

/// Move Saturday and Sunday to the following Monday; weekdays are unchanged.
pub fn snap_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => add_days(date, 2),
        Weekday::Sun => add_days(date, 1),
        _ => date,
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Saturates at `NaiveDate::MAX` so resolution stays total.
fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(first: NaiveDate, last: NaiveDate) -> DataWindow {
        DataWindow::new(first, last).unwrap()
    }

    // 2024-01-01 is a Monday; 2024-01-05 is a Friday.

    #[test]
    fn next_trading_day_after_friday_is_monday() {
        assert_eq!(next_trading_day(date(2024, 1, 5)), date(2024, 1, 8));
    }

    #[test]
    fn next_trading_day_after_midweek_is_tomorrow() {
        assert_eq!(next_trading_day(date(2024, 1, 3)), date(2024, 1, 4));
        assert_eq!(next_trading_day(date(2024, 1, 4)), date(2024, 1, 5));
    }

    #[test]
    fn next_trading_day_after_weekend_uses_generic_branch() {
        assert_eq!(next_trading_day(date(2024, 1, 6)), date(2024, 1, 7));
        assert_eq!(next_trading_day(date(2024, 1, 7)), date(2024, 1, 8));
    }

    #[test]
    fn snap_moves_weekends_to_monday() {
        assert_eq!(snap_to_weekday(date(2024, 1, 6)), date(2024, 1, 8));
        assert_eq!(snap_to_weekday(date(2024, 1, 7)), date(2024, 1, 8));
        assert_eq!(snap_to_weekday(date(2024, 1, 8)), date(2024, 1, 8));
        assert_eq!(snap_to_weekday(date(2024, 1, 5)), date(2024, 1, 5));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(date(2024, 1, 6)));
        assert!(is_weekend(date(2024, 1, 7)));
        assert!(!is_weekend(date(2024, 1, 5)));
        assert!(!is_weekend(date(2024, 1, 8)));
    }

    #[test]
    fn absent_date_uses_today() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 3)));
        let result = resolve(&request, date(2024, 1, 4)).unwrap();
        assert_eq!(result.requested_date, date(2024, 1, 4));
        assert_eq!(result.resolved_date, date(2024, 1, 4));
        assert!(!result.adjusted);
    }

    #[test]
    fn explicit_date_ignores_today() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 3)))
            .with_requested_date(date(2024, 1, 2));
        let result = resolve(&request, date(2030, 6, 1)).unwrap();
        assert_eq!(result.resolved_date, date(2024, 1, 2));
    }

    #[test]
    fn today_past_the_window_is_too_late() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 3)));
        let err = resolve(&request, date(2024, 1, 10)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::PredictionDateTooLate {
                candidate: date(2024, 1, 10),
                last_known_date: date(2024, 1, 3),
                latest_allowed: date(2024, 1, 4),
            }
        );
    }

    #[test]
    fn lower_bound_is_inclusive() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 12)))
            .with_requested_date(date(2024, 1, 11))
            .with_min_lead_days(10);
        let result = resolve(&request, date(2024, 1, 11)).unwrap();
        assert_eq!(result.resolved_date, date(2024, 1, 11));
    }

    #[test]
    fn lower_bound_is_checked_before_upper_bound() {
        // Both bounds fail: first + 30 > candidate and candidate > last + 1.
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 2)))
            .with_requested_date(date(2024, 1, 20))
            .with_min_lead_days(30);
        let err = resolve(&request, date(2024, 1, 20)).unwrap_err();
        assert!(matches!(err, ResolveError::PredictionDateTooEarly { .. }));
    }

    #[test]
    fn zero_lead_days_allows_the_first_date() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 3)))
            .with_requested_date(date(2024, 1, 1))
            .with_min_lead_days(0);
        assert!(resolve(&request, date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn saturday_last_date_allows_sunday_and_snaps_to_monday() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 6)))
            .with_requested_date(date(2024, 1, 7));
        let result = resolve(&request, date(2024, 1, 7)).unwrap();
        assert_eq!(result.resolved_date, date(2024, 1, 8));
        assert!(result.adjusted);
    }

    #[test]
    fn saturday_last_date_rejects_monday() {
        let request = ResolutionRequest::new(window(date(2024, 1, 1), date(2024, 1, 6)))
            .with_requested_date(date(2024, 1, 8));
        let err = resolve(&request, date(2024, 1, 8)).unwrap_err();
        assert!(matches!(err, ResolveError::PredictionDateTooLate { .. }));
    }

    #[test]
    fn arithmetic_saturates_at_max_date() {
        assert_eq!(add_days(NaiveDate::MAX, 3), NaiveDate::MAX);
        let request = ResolutionRequest::new(DataWindow::single_day(NaiveDate::MIN))
            .with_requested_date(NaiveDate::MIN)
            .with_min_lead_days(u32::MAX);
        let err = resolve(&request, NaiveDate::MIN).unwrap_err();
        assert!(matches!(err, ResolveError::PredictionDateTooEarly { .. }));
    }
}
