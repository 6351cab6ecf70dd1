//! Sequential batch runner with a fixed-window throttle

use std::io;
use std::time::Duration;

use crate::batch::client::ClaimScorer;
use crate::model::BatchRecord;

/// Recorded in place of a score when a claim cannot be fetched
pub const SCORE_ERROR_SENTINEL: &str = "Error fetching score";

/// Column holding claim text in the input table
const INPUT_CLAIM_COLUMN: &str = "doc";

/// Fixed-window rate limit: pause after every `pause_after` attempted
/// claims, successes and sentinel rows both counting. Not adaptive to
/// upstream rate-limit responses.
#[derive(Debug, Clone, Copy)]
pub struct ThrottlePolicy {
    pub pause_after: usize,
    pub pause: Duration,
}

impl ThrottlePolicy {
    fn due(&self, attempted: usize) -> bool {
        self.pause_after > 0 && attempted % self.pause_after == 0
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            pause_after: 15,
            pause: Duration::from_secs(15),
        }
    }
}

/// Outcome of one batch run
#[derive(Debug)]
pub struct BatchReport {
    pub records: Vec<BatchRecord>,
    /// Throttle pauses taken during the run
    pub pauses: u32,
}

/// Scores an ordered claim sequence with stable 1-based case numbering
pub struct BatchRunner<S> {
    scorer: S,
    policy: ThrottlePolicy,
}

impl<S: ClaimScorer> BatchRunner<S> {
    pub fn new(scorer: S, policy: ThrottlePolicy) -> Self {
        Self { scorer, policy }
    }

    /// Score every claim in input order; one bad claim never aborts the run
    pub async fn run(&self, claims: &[String]) -> BatchReport {
        let mut records = Vec::with_capacity(claims.len());
        let mut pauses = 0;

        for (i, claim) in claims.iter().enumerate() {
            let case_number = (i + 1) as u32;

            let fraud_score = match self.scorer.score(claim).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    tracing::warn!(case_number, error = %e, "Error fetching score for claim");
                    SCORE_ERROR_SENTINEL.to_string()
                }
            };

            records.push(BatchRecord {
                case_number,
                claim: claim.clone(),
                fraud_score,
            });
            tracing::info!(case_number, "Fraud score recorded");

            let attempted = i + 1;
            if self.policy.due(attempted) && attempted < claims.len() {
                tracing::info!(
                    attempted,
                    pause_secs = self.policy.pause.as_secs(),
                    "Throttle window reached, pausing"
                );
                tokio::time::sleep(self.policy.pause).await;
                pauses += 1;
            }
        }

        BatchReport { records, pauses }
    }
}

/// Read claim text from the `doc` column; rows without it are skipped
pub fn read_claims<R: io::Read>(reader: R) -> Result<Vec<String>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let doc_idx = rdr.headers()?.iter().position(|h| h == INPUT_CLAIM_COLUMN);

    let Some(doc_idx) = doc_idx else {
        tracing::warn!(
            column = INPUT_CLAIM_COLUMN,
            "Input table has no claim column, nothing to score"
        );
        return Ok(Vec::new());
    };

    let mut claims = Vec::new();
    for record in rdr.records() {
        let record = record?;
        match record.get(doc_idx) {
            Some(doc) if !doc.is_empty() => claims.push(doc.to_string()),
            _ => tracing::debug!("Skipping row without claim text"),
        }
    }

    Ok(claims)
}

/// Write the full record set in one pass
pub fn write_records<W: io::Write>(writer: W, records: &[BatchRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
