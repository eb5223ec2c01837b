// ABOUTME: log command: lists imported records newest first
// ABOUTME: Ordered by date descending with the newer id first among equal dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use weight_insight::{
    config::InsightConfig,
    errors::AppResult,
    formatters::{format_json, OutputFormat},
};

use super::import;

pub async fn run(file: &Path, format: OutputFormat) -> AppResult<()> {
    let config = InsightConfig::load()?;
    let imported = import(file, &config, None).await?;
    let entries = imported.service.display_log(imported.user).await?;

    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No entries");
            }
            for entry in &entries {
                println!("{:>4}  {}  {}", entry.id.value(), entry.date, entry.weight);
            }
        }
        OutputFormat::Json => println!("{}", format_json(&entries)?),
    }
    Ok(())
}
