// src/main.rs

mod analyzer;
mod cli;
mod combos;
mod config;
mod error;
mod filter;
mod loader;
mod model;
mod ranker;
mod renderer;
mod scorer;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::Config;
use error::PickerError;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookclub_picker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args).context("Invalid options")?;
    let start_time = Instant::now();

    let records = loader::load_preferences(&config)
        .inspect_err(log_failure)
        .with_context(|| format!("Failed to load responses from {}", config.input_path.display()))?;
    println!("Loaded {} responses in {:.2?}.", records.len(), start_time.elapsed());

    let analysis_start = Instant::now();
    let analysis = analyzer::analyze(&records, &config)
        .inspect_err(log_failure)
        .context("Failed to score book combinations")?;
    println!(
        "Analysis finished in {:.2?}. {} of {} combinations are viable, {} filtered.",
        analysis_start.elapsed(),
        analysis.ranked.len(),
        analysis.combos_considered,
        analysis.filtered
    );

    let report = renderer::render_report(&analysis, &config, chrono::Utc::now())
        .inspect_err(log_failure)
        .context("Failed to render the report")?;
    println!();
    print!("{report}");

    tracing::info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

fn log_failure(err: &PickerError) {
    if err.is_internal() {
        tracing::error!(%err, "scoring invariant violated, this is a bug");
    } else if err.is_input_error() {
        tracing::error!(%err, "survey input rejected");
    }
}
