//! Text and JSON renderings of prediction plans.

use serde::Serialize;

use crate::planner::{BatchOutcome, PredictionPlan};

/// Human-readable summary of one plan.
pub fn render_text(plan: &PredictionPlan) -> String {
    let resolution = &plan.resolution;
    let mut lines = vec![format!(
        "{}: data {} .. {}",
        plan.symbol,
        plan.window.first_date(),
        plan.window.last_date()
    )];

    if let Some(days) = plan.min_lead_days {
        lines.push(format!("  minimum history: {days} days"));
    }
    lines.push(format!(
        "  prediction date: {} ({})",
        resolution.resolved_date,
        resolution.resolved_date.format("%A")
    ));
    if let Some(notice) = &plan.notice {
        lines.push(format!("  note: {notice}"));
    }

    lines.join("\n")
}

/// Pretty JSON for one plan.
pub fn to_json(plan: &PredictionPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    symbol: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<&'a PredictionPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Pretty JSON array with one entry per symbol, carrying either its plan or
/// its error message.
pub fn batch_to_json(outcomes: &[BatchOutcome]) -> Result<String, serde_json::Error> {
    let entries: Vec<BatchEntry<'_>> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(plan) => BatchEntry {
                symbol: &outcome.symbol,
                plan: Some(plan),
                error: None,
            },
            Err(err) => BatchEntry {
                symbol: &outcome.symbol,
                plan: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
