use predictor_client::{config::EndpointConfig, form::RawForm};

/// A form with every required field filled in with plausible values.
pub fn filled_form() -> RawForm {
    [
        ("age", "35"),
        ("job", "management"),
        ("marital", "single"),
        ("education", "secondary"),
        ("housing", "yes"),
        ("loan", "no"),
        ("duration", "200"),
        ("campaign", "3"),
    ]
    .into_iter()
    .collect()
}

pub fn endpoint_config(base_url: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}
