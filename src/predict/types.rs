use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON body for `POST /predict`.
///
/// The fields after `balance` are never collected by the form; the model
/// expects them present, so they are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub housing: String,
    pub loan: String,
    pub duration: u32,
    pub campaign: u32,
    pub balance: i64,
    #[serde(rename = "default")]
    pub credit_default: String,
    pub contact: String,
    pub month: String,
    pub day: u32,
    pub pdays: i32,
    pub previous: u32,
    pub poutcome: String,
}

impl PredictionRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        job: impl Into<String>,
        marital: impl Into<String>,
        education: impl Into<String>,
        housing: impl Into<String>,
        loan: impl Into<String>,
        duration: u32,
        campaign: u32,
        balance: i64,
    ) -> Self {
        Self {
            age,
            job: job.into(),
            marital: marital.into(),
            education: education.into(),
            housing: housing.into(),
            loan: loan.into(),
            duration,
            campaign,
            balance,
            credit_default: "no".to_string(),
            contact: "cellular".to_string(),
            month: "may".to_string(),
            day: 15,
            pdays: 999,
            previous: 0,
            poutcome: "nonexistent".to_string(),
        }
    }
}

/// Coarse display bucket for a continuous confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Self::High
        } else if score > 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful reply from the prediction endpoint.
///
/// `request_id`, `timestamp` and `duration` are extras the production
/// endpoint attaches; the client tolerates their absence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i64,
    pub probability: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub confidence_level: Option<ConfidenceLevel>,
    pub result: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

impl PredictionResponse {
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }

    /// Score shown as "confidence"; falls back to the class probability when
    /// the endpoint omits the dedicated field.
    pub fn confidence_score(&self) -> f64 {
        self.confidence.unwrap_or(self.probability)
    }

    pub fn level(&self) -> ConfidenceLevel {
        self.confidence_level
            .unwrap_or_else(|| ConfidenceLevel::from_score(self.confidence_score()))
    }
}

/// Wire envelope: the endpoint replies either with a prediction body or
/// with `{"error": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictReply {
    Failure { error: String },
    Success(PredictionResponse),
}
