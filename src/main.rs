use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bank_flow::Orchestrator;
use session_adapter::BrowserSession;

use bankflow_cli::cli::Cli;
use bankflow_cli::prompts;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let code = match run().await {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            error!("run aborted before the workflow could start: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<bool> {
    let cli = Cli::parse();

    // The registration record is collected in full before any browser work.
    let stdin = io::stdin();
    let record = prompts::collect_registration(stdin.lock(), io::stdout())
        .context("could not read registration input")?;

    let session = BrowserSession::launch(cli.session_config())
        .await
        .context("could not start the browser session")?;

    let orchestrator = Orchestrator::new(Arc::new(session), cli.flow_config());
    let report = orchestrator.run(&record).await;

    if report.is_success() {
        info!("workflow completed successfully");
    } else if let Some(failure) = &report.failure {
        error!(failure = %failure, "workflow failed");
    }

    Ok(report.is_success())
}
