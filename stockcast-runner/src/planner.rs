//! Prediction-request planning.
//!
//! Turns "predict SYMBOL for DATE (or today)" into the trading day the
//! prediction applies to:
//! 1. Parse the requested date (strict `YYYY-MM-DD`)
//! 2. Load the symbol's local history and derive its data window
//! 3. Optionally refuse windows ending on a weekend
//! 4. Resolve against the window with the model's minimum history
//!
//! The plan is what a prediction pipeline consumes: `resolution.resolved_date`
//! drives feature-window construction and `notice` is shown to the user.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use stockcast_core::{
    is_weekend, parse_date, resolve, Clock, DataWindow, FixedClock, HistoryError, HistoryStore,
    ResolutionRequest, ResolutionResult, ResolveError,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::PredictConfig;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(
        "price history for '{symbol}' ends on a weekend ({last_date}); markets are closed on \
         weekends, so the data is suspect"
    )]
    WindowEndsOnWeekend { symbol: String, last_date: NaiveDate },
}

/// A resolved prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPlan {
    pub symbol: String,
    pub window: DataWindow,
    pub min_lead_days: Option<u32>,
    pub resolution: ResolutionResult,
    /// Set when the resolved date differs from the requested one.
    pub notice: Option<String>,
}

impl PredictionPlan {
    pub fn resolved_date(&self) -> NaiveDate {
        self.resolution.resolved_date
    }
}

/// One symbol's outcome within a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub symbol: String,
    pub result: Result<PredictionPlan, PlanError>,
}

/// Plan a single prediction request.
///
/// `requested` of `None` predicts for `clock.today()`.
pub fn plan_prediction(
    symbol: &str,
    requested: Option<&str>,
    config: &PredictConfig,
    store: &HistoryStore,
    clock: &dyn Clock,
) -> Result<PredictionPlan, PlanError> {
    let requested_date = requested.map(parse_date).transpose()?;

    let history = store.load(symbol)?;
    let window = history.window()?;

    if config.calendar.reject_weekend_window && is_weekend(window.last_date()) {
        return Err(PlanError::WindowEndsOnWeekend {
            symbol: history.symbol().to_string(),
            last_date: window.last_date(),
        });
    }

    let request = ResolutionRequest {
        requested_date,
        window,
        min_lead_days: config.min_lead_days(),
    };
    let resolution = resolve(&request, clock.today())?;
    let notice = resolution.notice();

    info!(
        symbol = history.symbol(),
        first_date = %window.first_date(),
        last_date = %window.last_date(),
        resolved = %resolution.resolved_date,
        clock = clock.name(),
        "planned prediction"
    );
    if let Some(notice) = &notice {
        warn!(symbol = history.symbol(), "{notice}");
    }

    Ok(PredictionPlan {
        symbol: history.symbol().to_string(),
        window,
        min_lead_days: request.min_lead_days,
        resolution,
        notice,
    })
}

/// Plan many symbols in parallel.
///
/// The clock is read once so every symbol resolves against the same "today".
/// Outcomes are returned in input order; a failure affects only its symbol.
pub fn plan_batch(
    symbols: &[String],
    requested: Option<&str>,
    config: &PredictConfig,
    store: &HistoryStore,
    clock: &dyn Clock,
) -> Vec<BatchOutcome> {
    let today = FixedClock(clock.today());

    symbols
        .par_iter()
        .map(|symbol| {
            let result = plan_prediction(symbol, requested, config, store, &today);
            if let Err(err) = &result {
                warn!(symbol = symbol.as_str(), error = %err, "prediction request rejected");
            }
            BatchOutcome {
                symbol: symbol.clone(),
                result,
            }
        })
        .collect()
}
