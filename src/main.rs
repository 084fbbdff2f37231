//! Morale service entrypoint.

use std::process::ExitCode;
use std::sync::Arc;

use morale::server::{self, AppState};
use morale::{
    AnalysisError, MoraleConfig, OctocrabGateway, PersonalAccessToken, SentimentAnalyzer,
    telemetry,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "startup or serve failure");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalysisError> {
    let config = load_config()?;

    // The credential and client handles are resolved before any socket is
    // bound; a missing token means the process never starts listening.
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = config.api_base_url()?;

    let gateway = OctocrabGateway::for_token(&token, &api_base)?;
    let analyzer = SentimentAnalyzer::new();
    let state = Arc::new(AppState::new(
        Arc::new(gateway),
        analyzer,
        config.fetch_timeout(),
    ));

    server::serve(&config.bind_address, state).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MoraleConfig, AnalysisError> {
    MoraleConfig::load().map_err(|error| AnalysisError::Configuration {
        message: error.to_string(),
    })
}
