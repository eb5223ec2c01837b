// ABOUTME: weight-insight CLI - summarises a file of weight records
// ABOUTME: Prints the latest rolling average, trend label, goal status, and the newest-first log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rolling average and trend with the default 7-entry window
//! weight-insight analyze --file weights.json
//!
//! # Custom window and threshold, compared against a goal weight
//! weight-insight analyze --file weights.json --window 3 --threshold 1.0 --goal 160
//!
//! # Machine-readable output
//! weight-insight --json analyze --file weights.json
//!
//! # Newest-first log view
//! weight-insight log --file weights.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use weight_insight::{
    config::LogLevel,
    errors::{AppError, ErrorResponse},
    formatters::{format_json, OutputFormat},
    logging::LoggingConfig,
};

use commands::{analyze, analyze::AnalyzeArgs, log};

#[derive(Parser)]
#[command(
    name = "weight-insight",
    about = "Weight trend insights",
    long_about = "Smooths a series of body-weight records with a trailing rolling average, classifies the trend, and compares the latest weight with a goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the latest rolling average, trend, and goal status
    Analyze {
        /// JSON file holding an array of `{"date": "YYYY-MM-DD", "weight": N}` records
        #[arg(long)]
        file: PathBuf,

        /// Rolling window size (overrides `INSIGHT_WINDOW_SIZE`)
        #[arg(long)]
        window: Option<usize>,

        /// Trend threshold (overrides `INSIGHT_TREND_THRESHOLD`)
        #[arg(long)]
        threshold: Option<f64>,

        /// Goal weight to compare the latest record against
        #[arg(long)]
        goal: Option<u32>,
    },

    /// List records newest first
    Log {
        /// JSON file holding an array of `{"date": "YYYY-MM-DD", "weight": N}` records
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let result = match cli.command {
        Command::Analyze {
            file,
            window,
            threshold,
            goal,
        } => {
            let args = AnalyzeArgs {
                file,
                window,
                threshold,
                goal,
            };
            analyze::run(args, format).await
        }
        Command::Log { file } => log::run(&file, format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(error, format),
    }
}

fn report_error(error: AppError, format: OutputFormat) -> ExitCode {
    let exit_code = error.code.exit_code();
    match format {
        OutputFormat::Text => eprintln!("Error: {error}"),
        OutputFormat::Json => match format_json(&ErrorResponse::from(error)) {
            Ok(body) => println!("{body}"),
            Err(e) => eprintln!("Error: {e}"),
        },
    }
    ExitCode::from(exit_code)
}
