//! Application state and service initialization
//!
//! Centralizes service construction so missing configuration fails the
//! process at startup instead of surfacing per request.

use std::sync::Arc;
use std::time::Duration;

use crate::model::Config;
use crate::service::{ClaimAnalysisService, GeminiClient};

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Application state containing the services shared across workers
pub struct AppState {
    /// Claim and document analysis service
    pub analysis_service: ClaimAnalysisService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires `GEMINI_API_KEY`; the scoring client cannot function
    /// without it, so its absence aborts startup.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_GEMINI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_GEMINI_API_KEY))?;

        let client = GeminiClient::new(
            &api_key,
            Duration::from_secs(config.scoring.timeout_secs),
        )
        .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        let analysis_service = ClaimAnalysisService::new(Arc::new(client));

        Ok(Self { analysis_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
