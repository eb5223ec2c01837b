// ABOUTME: analyze command: rolling average, trend, and goal status for a record file
// ABOUTME: Command-line window and threshold take precedence over environment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::path::PathBuf;
use weight_insight::{
    config::InsightConfig,
    errors::AppResult,
    formatters::{format_json, OutputFormat, SummaryView},
    intelligence::GoalProgress,
    services::InsightSummary,
};

use super::import;

pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub window: Option<usize>,
    pub threshold: Option<f64>,
    pub goal: Option<u32>,
}

#[derive(Serialize)]
struct AnalyzeReport {
    window_size: usize,
    trend_threshold: f64,
    summary: InsightSummary,
    display: SummaryView,
    #[serde(skip_serializing_if = "Option::is_none")]
    goal: Option<GoalProgress>,
}

pub async fn run(args: AnalyzeArgs, format: OutputFormat) -> AppResult<()> {
    let mut config = InsightConfig::load()?;
    if let Some(window) = args.window {
        config.window_size = window;
    }
    if let Some(threshold) = args.threshold {
        config.trend_threshold = threshold;
    }
    config.validate()?;

    let imported = import(&args.file, &config, args.goal).await?;
    let summary = imported.service.summarize(imported.user).await?;
    let display = SummaryView::from_summary(&summary, config.display_precision);
    let goal = imported.last.and_then(|outcome| outcome.goal);

    match format {
        OutputFormat::Text => {
            println!("{display}");
            if let Some(progress) = goal {
                print_goal(&progress);
            }
        }
        OutputFormat::Json => {
            let report = AnalyzeReport {
                window_size: config.window_size,
                trend_threshold: config.trend_threshold,
                summary,
                display,
                goal,
            };
            println!("{}", format_json(&report)?);
        }
    }
    Ok(())
}

fn print_goal(progress: &GoalProgress) {
    if progress.reached {
        println!("Goal: {} reached, congratulations!", progress.goal);
    } else {
        println!("Goal: {} ({} to go)", progress.goal, progress.remaining);
    }
}
