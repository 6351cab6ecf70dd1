use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of lenient score extraction from a model reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// Estimated fraud likelihood in [0, 100]
    pub score: f64,
    /// Prose following the score line, when the model produced any
    pub explanation: Option<String>,
    /// False when the reply held no digits and the score fell back to 0
    pub score_found: bool,
}

/// One row of a batch run
///
/// Field renames carry the output table's column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// 1-based position of the claim in the input table
    #[serde(rename = "Case Number")]
    pub case_number: u32,
    #[serde(rename = "Claim")]
    pub claim: String,
    /// Passthrough analysis text, or the error sentinel
    #[serde(rename = "Fraud Score")]
    pub fraud_score: String,
}
