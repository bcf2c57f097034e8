use super::types::{ResultCard, ResultVariant};
use crate::predict::PredictionResponse;
use chrono::Local;

/// One-decimal percentage, e.g. 0.73 -> "73.0%".
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Builds the displayable card for a successful prediction, stamping it
/// with the local render time.
pub fn result_card(response: &PredictionResponse) -> ResultCard {
    let variant = if response.is_positive() {
        ResultVariant::Positive
    } else {
        ResultVariant::Negative
    };

    ResultCard {
        variant,
        label: response.result.clone(),
        level: response.level(),
        probability_pct: percent(response.probability),
        confidence_pct: percent(response.confidence_score()),
        rendered_at: Local::now(),
    }
}
