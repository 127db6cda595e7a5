mod config;
mod error;
mod model;
mod pipeline;
mod sync;
mod trello;

use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::TrelloConfig;
use model::sprint0::SPRINT_0;
use pipeline::{Pipeline, RunSummary};
use trello::client::TrelloClient;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(summary) => {
            println!("Sprint 0 board complete: dependencies, dev notes and Definition of Done on every card.");
            println!("  {summary}");
            println!("  Safe to re-run (idempotent).");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Trello build failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<RunSummary> {
    // No client, and so no request, until both credentials are present.
    let config = TrelloConfig::from_env()?;
    let client = TrelloClient::new(&config)?;

    info!(base_url = %config.base_url, "Starting Sprint 0 Trello build (idempotent)");
    let summary = Pipeline::new(&client, &SPRINT_0).run().await?;
    info!(
        created = summary.total_created(),
        existing = summary.total_existing(),
        "Sprint 0 build finished"
    );
    Ok(summary)
}
