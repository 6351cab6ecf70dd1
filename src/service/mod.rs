pub mod analysis;
pub mod extract;
pub mod gemini;
pub mod prompts;

pub use analysis::{AnalysisError, ClaimAnalysisService};
pub use gemini::{GeminiClient, ScoringBackend, ScoringError};
