use super::types::{PredictReply, PredictionRequest, PredictionResponse};
use crate::config::EndpointConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// The three terminal outcomes of one prediction call.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Success(PredictionResponse),
    /// The endpoint answered with an `{"error": ...}` body.
    EndpointError(String),
    /// The request never completed, or the reply was unreadable.
    TransportError(String),
}

#[async_trait]
pub trait PredictClient: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome;
}

pub struct HttpPredictClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPredictClient {
    pub fn new(config: EndpointConfig) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl PredictClient for HttpPredictClient {
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome {
        let url = self.predict_url();
        debug!("POST {} (age={}, job={})", url, request.age, request.job);

        let response = match self.http.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Prediction request failed to complete: {}", e);
                return SubmitOutcome::TransportError(e.to_string());
            }
        };

        // Error bodies can arrive with any status; the body shape decides.
        match response.json::<PredictReply>().await {
            Ok(PredictReply::Success(prediction)) => SubmitOutcome::Success(prediction),
            Ok(PredictReply::Failure { error }) => SubmitOutcome::EndpointError(error),
            Err(e) => {
                warn!("Unreadable prediction reply: {}", e);
                SubmitOutcome::TransportError(e.to_string())
            }
        }
    }
}
