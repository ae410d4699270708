//! Antigravity UA Sync
//!
//! Checks the `antigravity/<version>` token in the upstream User-Agent
//! constant against the latest vendor release and rewrites it in place.
//!
//! Exit codes: 0 = up to date or updated, 1 = failure or (`--check`) update available.

#![allow(clippy::print_stdout, clippy::print_stderr, reason = "CLI tool reports to the console")]

use anyhow::{Context, Result};
use antigravity_ua_core::{default_page_fetcher, run, SyncReport, UpdateError, UpdateOutcome};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let request = cli.to_request();
    let fetcher = default_page_fetcher(cli.live_fetch_config());
    tracing::debug!(?request, "Starting sync");

    match run(&request, fetcher.as_ref()).await {
        Ok(report) => {
            print_report(&report);
            Ok(ExitCode::from(exit_status(&report.outcome)))
        },
        Err(e) => {
            print_error(&e);
            Ok(ExitCode::FAILURE)
        },
    }
}

fn exit_status(outcome: &UpdateOutcome) -> u8 {
    u8::try_from(outcome.exit_code()).unwrap_or(1)
}

/// Plain-text outcome line, before coloring.
fn status_line(outcome: &UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::NoChangeNeeded { .. } => "Already up to date".to_string(),
        UpdateOutcome::UpdateAvailable { current, latest } => {
            format!("Update available: {current} -> {latest}")
        },
        UpdateOutcome::WouldUpdate { from, to } => format!("[dry-run] Would update {from} -> {to}"),
        UpdateOutcome::Updated { from, to } => format!("Updated {from} -> {to}"),
    }
}

fn report_lines(report: &SyncReport) -> [String; 3] {
    [
        format!("File:    {}", report.file.display()),
        format!("Current: {}", report.current),
        format!("Latest:  {}", report.latest),
    ]
}

fn print_report(report: &SyncReport) {
    for line in report_lines(report) {
        println!("{line}");
    }
    let status = status_line(&report.outcome);
    let status = match &report.outcome {
        UpdateOutcome::NoChangeNeeded { .. } => status.green(),
        UpdateOutcome::UpdateAvailable { .. } => status.yellow(),
        UpdateOutcome::WouldUpdate { .. } => status.cyan(),
        UpdateOutcome::Updated { .. } => status.green().bold(),
    };
    println!("{status}");
}

fn print_error(err: &UpdateError) {
    eprintln!("{} {} failed: {}", "error:".red().bold(), err.stage(), err);
    if matches!(err, UpdateError::RenderingUnavailable { .. }) {
        eprintln!(
            "{} pass --version <V> or --url <URL> to resolve the latest version without a browser",
            "hint:".yellow().bold()
        );
    }
}
