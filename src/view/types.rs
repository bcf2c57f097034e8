use crate::predict::ConfidenceLevel;
use chrono::{DateTime, Local};

/// Visual state of a single input after interactive validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    Valid,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVariant {
    Positive,
    Negative,
}

/// Everything the view needs to show a successful prediction. Percentages
/// are pre-formatted so every view renders them identically.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub variant: ResultVariant,
    pub label: String,
    pub level: ConfidenceLevel,
    pub probability_pct: String,
    pub confidence_pct: String,
    /// When the card was built on this client, not server time.
    pub rendered_at: DateTime<Local>,
}

pub const ERROR_SUGGESTIONS: [&str; 3] = [
    "Make sure all required fields are filled in",
    "Check that numeric values are positive",
    "Refresh the page and try again",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub message: String,
    pub suggestions: [&'static str; 3],
}

impl ErrorCard {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: ERROR_SUGGESTIONS,
        }
    }
}
