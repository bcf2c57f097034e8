use crate::{Error, Result};
use tracing::{debug, info, warn};

// Submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
}

// Submission events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    SubmitRequested,
    PayloadRejected,
    PayloadAccepted,
    Resolved,
}

/// Per-submission state machine. Idle is both the initial and the terminal
/// state between submissions; only an idle machine may accept a new submit.
#[derive(Debug)]
pub struct SubmissionFsm {
    state: SubmissionState,
}

impl SubmissionFsm {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn current_state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<()> {
        let old_state = self.state;

        let new_state = match (self.state, event) {
            (SubmissionState::Idle, SubmissionEvent::SubmitRequested) => {
                SubmissionState::Validating
            }
            (SubmissionState::Validating, SubmissionEvent::PayloadRejected) => {
                SubmissionState::Idle
            }
            (SubmissionState::Validating, SubmissionEvent::PayloadAccepted) => {
                SubmissionState::Submitting
            }
            (SubmissionState::Submitting, SubmissionEvent::Resolved) => SubmissionState::Idle,
            _ => {
                warn!(
                    "Invalid submission transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        info!(
            "🎯 Submission state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    /// Forces the machine back to idle; the unconditional cleanup step at
    /// the end of every submission relies on this being infallible.
    pub fn reset(&mut self) {
        if self.state != SubmissionState::Idle {
            debug!("Resetting submission state from {:?} to Idle", self.state);
            self.state = SubmissionState::Idle;
        }
    }
}

impl Default for SubmissionFsm {
    fn default() -> Self {
        Self::new()
    }
}
