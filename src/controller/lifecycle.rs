use super::fsm::{SubmissionEvent, SubmissionFsm};
use crate::{
    form::{RawForm, field_type_of, normalize, validate_field},
    predict::{PredictClient, SubmitOutcome},
    view::{ErrorCard, FieldMark, FormView, render},
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred. Please try again.";

/// What one `submit` call did, for callers that need more than the rendered
/// panel (the CLI exit code, tests). The duplicate-submit skip stays silent
/// on the view but is observable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Another submission was in flight; nothing happened.
    Skipped,
    /// Validation failed; the error was rendered, no request was made.
    Invalid,
    /// A prediction was rendered.
    Predicted,
    /// The endpoint reported an error, rendered verbatim.
    EndpointFailed,
    /// The request never completed; the generic network message was rendered.
    NetworkFailed,
}

/// Owns one prediction form end-to-end: interactive field validation,
/// submission with a single-flight guarantee, and rendering through the
/// bound view. All submission state lives here, not in free globals.
pub struct FormController<C: PredictClient, V: FormView> {
    client: C,
    view: V,
    fsm: Mutex<SubmissionFsm>,
}

impl<C: PredictClient, V: FormView> FormController<C, V> {
    pub fn new(client: C, view: V) -> Self {
        Self {
            client,
            view,
            fsm: Mutex::new(SubmissionFsm::new()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn fsm(&self) -> MutexGuard<'_, SubmissionFsm> {
        self.fsm.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn drive(&self, event: SubmissionEvent) {
        if let Err(e) = self.fsm().transition(event) {
            warn!("Submission lifecycle out of step: {}", e);
        }
    }

    /// Runs one submission to completion. At most one may be in flight; a
    /// submit arriving while another runs is dropped without rendering.
    pub async fn submit(&self, form: &RawForm) -> SubmitResult {
        {
            let mut fsm = self.fsm();
            if !fsm.is_idle() {
                debug!("Submission already in flight, ignoring submit");
                return SubmitResult::Skipped;
            }
            if fsm.transition(SubmissionEvent::SubmitRequested).is_err() {
                return SubmitResult::Skipped;
            }
        }

        let submission_id = Uuid::new_v4();
        info!(%submission_id, "Prediction submission started");

        // Restores the idle state and the submit control on every exit path.
        let _cleanup = IdleGuard {
            fsm: &self.fsm,
            view: &self.view,
        };

        self.view.set_submitting();

        let request = match normalize(form) {
            Ok(request) => request,
            Err(e) => {
                let message = e.to_string();
                warn!(%submission_id, "Validation failed: {}", message);
                self.drive(SubmissionEvent::PayloadRejected);
                self.view.show_error(&ErrorCard::new(message));
                return SubmitResult::Invalid;
            }
        };

        self.drive(SubmissionEvent::PayloadAccepted);

        let result = match self.client.predict(&request).await {
            SubmitOutcome::Success(response) => {
                info!(
                    %submission_id,
                    prediction = response.prediction,
                    probability = response.probability,
                    "Prediction completed"
                );
                self.view.show_result(&render::result_card(&response));
                SubmitResult::Predicted
            }
            SubmitOutcome::EndpointError(message) => {
                warn!(%submission_id, "Endpoint reported error: {}", message);
                self.view.show_error(&ErrorCard::new(message));
                SubmitResult::EndpointFailed
            }
            SubmitOutcome::TransportError(detail) => {
                warn!(%submission_id, "Transport failure: {}", detail);
                self.view.show_error(&ErrorCard::new(NETWORK_ERROR_MESSAGE));
                SubmitResult::NetworkFailed
            }
        };

        self.drive(SubmissionEvent::Resolved);
        result
    }

    /// A required field lost focus: validate it and mark it on the view.
    pub fn field_blurred(&self, form: &RawForm, name: &str) {
        let value = form.get(name).unwrap_or("");
        let verdict = validate_field(value, name, field_type_of(name));

        if verdict.valid {
            self.view.mark_field(name, FieldMark::Valid, None);
        } else {
            self.view
                .mark_field(name, FieldMark::Error, verdict.message.as_deref());
        }
    }

    /// A field changed: store the new value and clear any mark until the
    /// next blur, regardless of the new value's validity.
    pub fn field_edited(&self, form: &mut RawForm, name: &str, value: &str) {
        form.set(name, value);
        self.view.clear_field_mark(name);
    }

    /// Clears the form to its initial state, hides the result panel, and
    /// strips every field mark.
    pub fn reset(&self, form: &mut RawForm) {
        debug!("Resetting form");
        form.clear();
        self.view.reset();
    }
}

struct IdleGuard<'a, V: FormView> {
    fsm: &'a Mutex<SubmissionFsm>,
    view: &'a V,
}

impl<V: FormView> Drop for IdleGuard<'_, V> {
    fn drop(&mut self) {
        self.fsm
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
        self.view.set_idle();
    }
}
