pub mod config;
mod score;

pub use config::{BatchConfig, Config, ScoringConfig};
pub use score::{BatchRecord, ScoreResult};
