use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures from date parsing and resolution.
///
/// These are routine, deterministic outcomes of a bad request. Callers report
/// them and abort the single request; retrying cannot change the answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("'{input}' is not in correct format. Please give date in YYYY-MM-DD format")]
    InvalidDateFormat { input: String },

    #[error(
        "model needs more history: predictions are possible only for dates starting from \
         {earliest_allowed}, but the requested prediction date is {candidate}"
    )]
    PredictionDateTooEarly {
        candidate: NaiveDate,
        earliest_allowed: NaiveDate,
    },

    #[error(
        "we have data till {last_known_date}, so the model can predict only till \
         {latest_allowed}, but the requested prediction date is {candidate}"
    )]
    PredictionDateTooLate {
        candidate: NaiveDate,
        last_known_date: NaiveDate,
        latest_allowed: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn messages_name_the_dates_involved() {
        let early = ResolveError::PredictionDateTooEarly {
            candidate: date(2024, 1, 8),
            earliest_allowed: date(2024, 1, 11),
        };
        let msg = early.to_string();
        assert!(msg.contains("2024-01-11"));
        assert!(msg.contains("2024-01-08"));

        let late = ResolveError::PredictionDateTooLate {
            candidate: date(2024, 1, 9),
            last_known_date: date(2024, 1, 5),
            latest_allowed: date(2024, 1, 8),
        };
        let msg = late.to_string();
        assert!(msg.contains("data till 2024-01-05"));
        assert!(msg.contains("only till 2024-01-08"));
        assert!(msg.contains("2024-01-09"));
    }

    #[test]
    fn invalid_format_echoes_input() {
        let err = ResolveError::InvalidDateFormat {
            input: "2024/01/05".into(),
        };
        assert!(err.to_string().starts_with("'2024/01/05'"));
    }
}
