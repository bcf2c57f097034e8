mod fsm;
mod lifecycle;

pub use fsm::{SubmissionEvent, SubmissionFsm, SubmissionState};
pub use lifecycle::{FormController, NETWORK_ERROR_MESSAGE, SubmitResult};
