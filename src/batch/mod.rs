//! Batch scoring over tabular claim data
//!
//! Reads claims from a CSV `doc` column, scores them one at a time through
//! the claim endpoint with a fixed-window throttle, and writes one output
//! table at the end of the run. A failed scoring call records a sentinel
//! row instead of aborting the batch.

mod client;
mod runner;

pub use client::{AnalyzeApiClient, ClaimScorer, ScoreFetchError};
pub use runner::{
    read_claims, write_records, BatchReport, BatchRunner, ThrottlePolicy, SCORE_ERROR_SENTINEL,
};
