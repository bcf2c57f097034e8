use async_trait::async_trait;
use predictor_client::{
    predict::{PredictClient, PredictionRequest, SubmitOutcome},
    view::{ErrorCard, FieldMark, FormView, ResultCard},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted prediction client for controller tests
pub struct ScriptedPredictClient {
    pub outcomes: Arc<Mutex<Vec<SubmitOutcome>>>,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
    pub delay: Option<Duration>,
}

impl ScriptedPredictClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn with_outcome(self, outcome: SubmitOutcome) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn sent_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for ScriptedPredictClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictClient for ScriptedPredictClient {
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return SubmitOutcome::TransportError("No more scripted outcomes".to_string());
        }
        outcomes.remove(0)
    }
}

/// Everything a view was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Submitting,
    Idle,
    Marked(String, FieldMark, Option<String>),
    MarkCleared(String),
    Result(ResultCard),
    Error(ErrorCard),
    Reset,
}

/// Recording view for asserting render sequences
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn result_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ViewEvent::Result(_)))
            .count()
    }

    pub fn last_result(&self) -> Option<ResultCard> {
        self.events().iter().rev().find_map(|e| match e {
            ViewEvent::Result(card) => Some(card.clone()),
            _ => None,
        })
    }

    pub fn last_error(&self) -> Option<ErrorCard> {
        self.events().iter().rev().find_map(|e| match e {
            ViewEvent::Error(card) => Some(card.clone()),
            _ => None,
        })
    }
}

impl FormView for RecordingView {
    fn set_submitting(&self) {
        self.events.lock().unwrap().push(ViewEvent::Submitting);
    }

    fn set_idle(&self) {
        self.events.lock().unwrap().push(ViewEvent::Idle);
    }

    fn mark_field(&self, name: &str, mark: FieldMark, message: Option<&str>) {
        self.events.lock().unwrap().push(ViewEvent::Marked(
            name.to_string(),
            mark,
            message.map(String::from),
        ));
    }

    fn clear_field_mark(&self, name: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::MarkCleared(name.to_string()));
    }

    fn show_result(&self, card: &ResultCard) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Result(card.clone()));
    }

    fn show_error(&self, card: &ErrorCard) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Error(card.clone()));
    }

    fn reset(&self) {
        self.events.lock().unwrap().push(ViewEvent::Reset);
    }
}
