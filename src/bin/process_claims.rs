//! Batch claim scorer
//!
//! Reads claims from a CSV `doc` column, scores each one through a running
//! analysis server, and writes the scored cases to an output table in a
//! single pass at the end of the run.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use fraudscore_api::batch::{
    read_claims, write_records, AnalyzeApiClient, BatchRunner, ThrottlePolicy,
};
use fraudscore_api::model::Config;

#[derive(Parser, Debug)]
#[command(
    name = "process-claims",
    about = "Score a table of insurance claims against a running analysis server"
)]
struct ProcessClaimsCli {
    /// Input CSV with a `doc` column holding claim text
    #[arg(long, default_value = "scrapedCasesFull.csv")]
    input: PathBuf,

    /// Output CSV for scored cases
    #[arg(long, default_value = "fraud_scores.csv")]
    output: PathBuf,

    /// Claim analysis endpoint
    #[arg(
        long,
        env = "CLAIM_ANALYZE_URL",
        default_value = "http://127.0.0.1:3001/analyze-claim"
    )]
    endpoint: String,

    /// Pause after this many claims (overrides the config file)
    #[arg(long)]
    pause_after: Option<usize>,

    /// Pause length in seconds (overrides the config file)
    #[arg(long)]
    pause_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = ProcessClaimsCli::parse();
    let config = Config::from_env();

    let policy = ThrottlePolicy {
        pause_after: cli.pause_after.unwrap_or(config.batch.pause_after),
        pause: Duration::from_secs(cli.pause_secs.unwrap_or(config.batch.pause_secs)),
    };

    let input = File::open(&cli.input)
        .with_context(|| format!("failed to open input table {}", cli.input.display()))?;
    let claims = read_claims(input).context("failed to read input table")?;
    tracing::info!(claims = claims.len(), "Input table read, analyzing claims");

    let runner = BatchRunner::new(AnalyzeApiClient::new(cli.endpoint), policy);
    let report = runner.run(&claims).await;

    let output = File::create(&cli.output)
        .with_context(|| format!("failed to create output table {}", cli.output.display()))?;
    write_records(output, &report.records).context("failed to write output table")?;

    tracing::info!(
        cases = report.records.len(),
        pauses = report.pauses,
        output = %cli.output.display(),
        "All claims have been processed and saved"
    );

    Ok(())
}
