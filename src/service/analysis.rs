//! Claim analysis orchestration
//!
//! One request walks validate -> prompt -> external call -> extract.
//! Exactly one outbound call per request; nothing is cached or
//! deduplicated.

use std::sync::Arc;

use crate::model::ScoreResult;
use crate::service::extract::{extract_score, passthrough_analysis};
use crate::service::gemini::{ScoringBackend, ScoringError};
use crate::service::prompts::{build_claim_prompt, build_document_prompt};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Client fault: no claim text to analyze
    #[error("Claim details are required")]
    MissingClaim,

    /// Client fault: no document text to analyze
    #[error("Document text is required")]
    MissingDocument,

    /// The external scoring call failed (transport or status)
    #[error("Scoring call failed: {0}")]
    Upstream(ScoringError),

    /// The external reply did not have the expected shape
    #[error("Scoring reply unusable: {0}")]
    Parse(String),
}

/// Service scoring claims and documents through the external model
pub struct ClaimAnalysisService {
    backend: Arc<dyn ScoringBackend>,
}

impl ClaimAnalysisService {
    pub fn new(backend: Arc<dyn ScoringBackend>) -> Self {
        Self { backend }
    }

    /// Score a claim, returning the model reply verbatim
    pub async fn analyze_claim(&self, claim: Option<&str>) -> Result<String, AnalysisError> {
        let claim = validate_text(claim).ok_or(AnalysisError::MissingClaim)?;

        let prompt = build_claim_prompt(claim);
        let reply = self.call_backend(&prompt).await?;

        tracing::debug!(reply_len = reply.len(), "Claim analyzed");
        Ok(passthrough_analysis(&reply))
    }

    /// Score extracted document text, returning score plus explanation
    pub async fn analyze_document(
        &self,
        text: Option<&str>,
    ) -> Result<ScoreResult, AnalysisError> {
        let text = validate_text(text).ok_or(AnalysisError::MissingDocument)?;

        let prompt = build_document_prompt(text);
        let reply = self.call_backend(&prompt).await?;

        let result = extract_score(&reply);
        if !result.score_found {
            tracing::warn!("No numeric score in model reply, defaulting to 0");
        }

        Ok(result)
    }

    async fn call_backend(&self, prompt: &str) -> Result<String, AnalysisError> {
        self.backend.generate(prompt).await.map_err(|e| match e {
            ScoringError::MalformedReply(msg) => AnalysisError::Parse(msg),
            other => AnalysisError::Upstream(other),
        })
    }
}

/// Accept the text only when it carries something beyond whitespace
fn validate_text(input: Option<&str>) -> Option<&str> {
    input.filter(|t| !t.trim().is_empty())
}
