//! Gemini generateContent client
//!
//! Sends scoring prompts to the configured generative endpoint and returns
//! the raw reply text.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";
const ENV_GEMINI_API_URL: &str = "GEMINI_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Backend that turns a prompt into raw model text
///
/// `GeminiClient` is the production implementation; tests substitute their
/// own.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ScoringError>;
}

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

// Request/response models - only the fields we need
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// The base URL is resolved from:
    /// 1. `GEMINI_API_URL` environment variable
    /// 2. Default Gemini flash endpoint
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, ScoringError> {
        let base_url =
            env::var(ENV_GEMINI_API_URL).unwrap_or_else(|_| GEMINI_API_URL.to_string());
        let base_url = Url::parse(&base_url)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ScoringBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ScoringError> {
        // The key rides in the query string per the Gemini contract; log
        // lines must carry the base URL only.
        let url = format!("{}?key={}", self.base_url, self.api_key);

        tracing::debug!(
            endpoint = %self.base_url,
            prompt_len = prompt.len(),
            "Sending scoring prompt"
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScoringError::Status { status, body });
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| {
            ScoringError::MalformedReply(format!("Failed to deserialize reply: {e}"))
        })?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                ScoringError::MalformedReply("reply contained no candidate text".to_string())
            })?;

        tracing::debug!(reply_len = text.len(), "Received scoring reply");

        Ok(text)
    }
}
