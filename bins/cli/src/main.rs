//! Salesrank CLI
//!
//! Reads a sales dataset from a JSON file and prints the per-seller report.

mod args;

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use salesrank_core::sales::{AnalysisOptions, ReportRow, ReportSummary, analyze_sales_json};
use salesrank_shared::{AppConfig, AppError, AppResult, LogFormat, LoggingConfig};

use crate::args::Args;

const DEFAULT_LOG_FILTER: &str = "salesrank=info";

/// Report wrapped together with its totals.
#[derive(Serialize)]
struct SummarizedReport<'a> {
    report: &'a [ReportRow],
    summary: ReportSummary,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("salesrank: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.logging);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            error!(exit_code = code, "{err:#}");
            eprintln!("salesrank: {err:#}");
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.dataset)
        .map_err(AppError::from)
        .with_context(|| format!("reading {}", args.dataset.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(AppError::from)
        .with_context(|| format!("parsing {}", args.dataset.display()))?;

    let report_config = args.apply_overrides(config.report.clone());
    let options = AnalysisOptions::from_config(&report_config);
    let rows = analyze_sales_json(&value, &options).map_err(AppError::from)?;

    let body = if args.summary {
        let wrapped = SummarizedReport {
            report: &rows,
            summary: ReportSummary::from_rows(&rows).map_err(AppError::from)?,
        };
        render(&wrapped, args.pretty)?
    } else {
        render(&rows, args.pretty)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{body}\n"))
                .map_err(AppError::from)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), sellers = rows.len(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}").map_err(AppError::from)?;
        }
    }

    Ok(())
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> AppResult<String> {
    let body = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    body.map_err(|err| AppError::Internal(format!("serializing report: {err}")))
}
