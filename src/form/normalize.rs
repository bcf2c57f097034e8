use super::types::{DEFAULT_BALANCE, REQUIRED_FIELDS, RawForm};
use crate::{Error, Result, predict::PredictionRequest};
use tracing::debug;

pub const GENERIC_INVALID_MESSAGE: &str = "Invalid form data. Please check your inputs.";

/// Converts raw form input into a typed, default-completed request payload.
///
/// The error variant carries the user-facing message verbatim. Anything that
/// is not an expected validation failure collapses to the generic message so
/// the user never sees an internal error.
pub fn normalize(form: &RawForm) -> Result<PredictionRequest> {
    build_request(form).map_err(|e| match e {
        Error::Validation(_) => e,
        other => {
            debug!("Normalization failed unexpectedly: {}", other);
            Error::validation(GENERIC_INVALID_MESSAGE)
        }
    })
}

fn build_request(form: &RawForm) -> Result<PredictionRequest> {
    // Required check in fixed order; the first empty field wins.
    for name in REQUIRED_FIELDS {
        if trimmed(form, name).is_empty() {
            return Err(Error::validation(format!(
                "Please fill in the {} field.",
                name.replace('_', " ")
            )));
        }
    }

    let age = parse_count(form, "age")?;
    let duration = parse_count(form, "duration")?;
    let campaign = parse_count(form, "campaign")?;

    // Present-but-unparsable balance falls back to the default, by contract.
    let balance = match trimmed(form, "balance") {
        "" => DEFAULT_BALANCE,
        raw => raw.parse::<i64>().unwrap_or(DEFAULT_BALANCE),
    };

    Ok(PredictionRequest::new(
        age,
        trimmed(form, "job"),
        trimmed(form, "marital"),
        trimmed(form, "education"),
        trimmed(form, "housing"),
        trimmed(form, "loan"),
        duration,
        campaign,
        balance,
    ))
}

fn trimmed<'a>(form: &'a RawForm, name: &str) -> &'a str {
    form.get(name).unwrap_or("").trim()
}

fn parse_count(form: &RawForm, name: &str) -> Result<u32> {
    trimmed(form, name).parse::<u32>().map_err(|_| {
        Error::validation(format!(
            "Please enter a valid positive number for {}.",
            name.replace('_', " ")
        ))
    })
}
