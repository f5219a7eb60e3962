//! # employee-analytics
//!
//! Employee salary and performance analytics service.
//!
//! ## Modes
//!
//! - **Serve**: loads the startup dataset and serves the aggregate views over HTTP
//! - **Batch**: derives a raw CSV once, prints the report and writes the derived CSV
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP service
//! employee-analytics --config config/analytics.yaml serve --bind 127.0.0.1:5000
//!
//! # One-shot batch run
//! employee-analytics batch --input employees.csv --output employee_analysis_output.csv
//! ```

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use employee_analytics::analytics::build_report;
use employee_analytics::api::{AppState, create_router};
use employee_analytics::config::{AppConfig, ConfigLoader};
use employee_analytics::derivation::derive_records;
use employee_analytics::ingest::{read_rows_from_path, write_dataset_file};
use employee_analytics::observability::{LogFormat, init_logging};

/// Employee analytics service.
#[derive(Debug, Parser)]
#[command(name = "employee-analytics")]
#[command(about = "Derives performance tiers and promotion eligibility and serves aggregate views")]
#[command(version)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, env = "EMPLOYEE_ANALYTICS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log output format (`json` or `pretty`). Overrides the configuration file.
    #[arg(long, env = "EMPLOYEE_ANALYTICS_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP service.
    Serve {
        /// Socket address to bind. Overrides the configuration file.
        #[arg(long, env = "EMPLOYEE_ANALYTICS_BIND")]
        bind: Option<String>,
    },

    /// Derive a dataset once and print the analytics report.
    Batch {
        /// Raw employee CSV to read.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the derived CSV.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load_or_default(args.config.as_ref())?.into_config();
    init_logging(args.log_format.unwrap_or(config.logging.format));

    match args.command {
        Commands::Serve { bind } => serve(config, bind).await,
        Commands::Batch { input, output } => {
            let input = input.unwrap_or_else(|| config.data.raw_path.clone());
            let output = output.unwrap_or_else(|| config.data.persisted_path.clone());
            tokio::task::spawn_blocking(move || batch(&input, &output))
                .await
                .context("batch worker failed")?
        }
    }
}

async fn serve(config: AppConfig, bind: Option<String>) -> Result<()> {
    let bind_address = bind.unwrap_or_else(|| config.server.bind_address.clone());
    let state = AppState::from_config(&config);
    info!(
        records = state.store().snapshot().len(),
        max_upload_bytes = state.max_upload_bytes(),
        "Dataset ready"
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!(address = %bind_address, "Listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

fn batch(input: &Path, output: &Path) -> Result<()> {
    let rows = read_rows_from_path(input)?;
    let records = derive_records(rows);
    let report = build_report(&records);

    info!(
        records = report.record_count,
        departments = report.salary.avg_salary.len(),
        top_performers = report.performance.top_performers.len(),
        eligible = report.promotion.eligible_employees.len(),
        correlation = %report.summary.salary_performance_correlation,
        "Report computed"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    write_dataset_file(output, &records)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
