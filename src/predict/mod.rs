mod client;
mod types;

pub use client::{HttpPredictClient, PredictClient, SubmitOutcome};
pub use types::*;
