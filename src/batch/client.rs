//! HTTP client for the claim analysis endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ScoreFetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Anything able to turn claim text into an analysis string
///
/// The batch runner is generic over this so tests can score without a
/// server.
#[async_trait]
pub trait ClaimScorer: Send + Sync {
    async fn score(&self, claim: &str) -> Result<String, ScoreFetchError>;
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    claim: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

/// Scorer backed by a running analysis server
pub struct AnalyzeApiClient {
    client: Client,
    endpoint: String,
}

impl AnalyzeApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ClaimScorer for AnalyzeApiClient {
    async fn score(&self, claim: &str) -> Result<String, ScoreFetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { claim })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScoreFetchError::Status { status, body });
        }

        let reply: AnalyzeResponse = response.json().await?;

        Ok(reply.analysis)
    }
}
