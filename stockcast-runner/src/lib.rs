//! Stockcast Runner: prediction-request planning.
//!
//! This crate builds on `stockcast-core` to provide:
//! - TOML configuration (model sequence length, data directory, market time zone)
//! - Single and batch planning: history lookup → data window → date resolution
//! - Text and JSON reports of the resulting plans

pub mod config;
pub mod planner;
pub mod report;

pub use config::{CalendarConfig, ConfigError, DataConfig, ModelConfig, PredictConfig};
pub use planner::{plan_batch, plan_prediction, BatchOutcome, PlanError, PredictionPlan};
pub use report::{batch_to_json, render_text, to_json};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn predict_config_is_send_sync() {
        assert_send::<PredictConfig>();
        assert_sync::<PredictConfig>();
    }

    #[test]
    fn prediction_plan_is_send_sync() {
        assert_send::<PredictionPlan>();
        assert_sync::<PredictionPlan>();
    }

    #[test]
    fn batch_outcome_is_send_sync() {
        assert_send::<BatchOutcome>();
        assert_sync::<BatchOutcome>();
    }
}
