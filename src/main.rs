use anyhow::Result;
use predictor_client::{
    config,
    controller::{FormController, SubmitResult},
    form::RawForm,
    predict::HttpPredictClient,
    view::TerminalView,
};
use std::io::Read;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Reads the raw form as a JSON object from a file, or stdin for `-`/no
/// argument. Values may be JSON strings or numbers; everything is kept as
/// the raw string the normalizer expects. Nulls mean "not filled in".
fn read_form(path: Option<&str>) -> Result<RawForm> {
    let raw = match path {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let values: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)?;

    let mut form = RawForm::new();
    for (name, value) in values {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(text) => form.set(name, text),
            other => form.set(name, other.to_string()),
        }
    }

    Ok(form)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Initialize tracing with the determined log level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    info!(
        "Starting term-deposit prediction client against {} with log level: {}",
        config.endpoint.base_url, log_level
    );

    let input = std::env::args().nth(1);
    let form = read_form(input.as_deref())?;

    let client = HttpPredictClient::new(config.endpoint.clone())?;
    let controller = FormController::new(client, TerminalView);

    match controller.submit(&form).await {
        SubmitResult::Predicted => Ok(()),
        outcome => {
            info!("Submission finished without a prediction: {:?}", outcome);
            std::process::exit(1);
        }
    }
}
