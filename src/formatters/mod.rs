// ABOUTME: Output formatting for insight summaries: human-readable text or JSON
// ABOUTME: Renders the latest average at a fixed precision alongside the trend label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: the display strings shown to a user (`161`, `163.4`, `Downward ↓`)
//! - **JSON**: the full serialised structure for scripting

use crate::errors::AppResult;
use crate::services::{InsightStatus, InsightSummary};
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Format an average with a fixed number of decimal places
#[must_use]
pub fn format_average(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Placeholder for a value that cannot be shown yet
const NO_VALUE: &str = "--";

/// Display strings for an [`InsightSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Most recently entered weight, `--` when there is no data
    pub current_weight: String,
    /// Latest average, `--` when there is no data
    pub average: String,
    /// Trend label, or a data-sufficiency message
    pub trend: String,
}

impl SummaryView {
    /// Build display strings from a summary
    ///
    /// A single observation is shown as the raw weight, not a formatted average.
    #[must_use]
    pub fn from_summary(summary: &InsightSummary, precision: usize) -> Self {
        let current_weight = summary
            .current_weight
            .map_or_else(|| NO_VALUE.to_owned(), |weight| weight.to_string());

        match (summary.status, summary.latest_average) {
            (InsightStatus::Ready, Some(average)) => Self {
                current_weight,
                average: format_average(average, precision),
                trend: summary.trend.label().to_owned(),
            },
            (InsightStatus::InsufficientData, Some(weight)) => Self {
                current_weight,
                average: format_average(weight, 0),
                trend: "Not enough data".to_owned(),
            },
            _ => Self {
                current_weight,
                average: NO_VALUE.to_owned(),
                trend: "No data".to_owned(),
            },
        }
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current weight: {}", self.current_weight)?;
        writeln!(f, "Rolling average: {}", self.average)?;
        write!(f, "Trend: {}", self.trend)
    }
}

/// Serialize data as pretty-printed JSON
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` if the value cannot be serialized
pub fn format_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::Trend;

    fn summary(
        status: InsightStatus,
        current_weight: Option<u32>,
        latest_average: Option<f64>,
        trend: Trend,
    ) -> InsightSummary {
        InsightSummary {
            observation_count: 0,
            current_weight,
            latest_average,
            trend,
            status,
        }
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_average(163.428_571, 1), "163.4");
        assert_eq!(format_average(150.0, 1), "150.0");
    }

    #[test]
    fn test_view_states() {
        let ready = SummaryView::from_summary(
            &summary(InsightStatus::Ready, Some(150), Some(151.0), Trend::Upward),
            1,
        );
        assert_eq!(ready.current_weight, "150");
        assert_eq!(ready.average, "151.0");
        assert_eq!(ready.trend, "Upward ↑");

        let single = SummaryView::from_summary(
            &summary(InsightStatus::InsufficientData, Some(180), Some(180.0), Trend::Stable),
            1,
        );
        assert_eq!(single.average, "180");
        assert_eq!(single.trend, "Not enough data");

        let empty = SummaryView::from_summary(
            &summary(InsightStatus::NoData, None, None, Trend::Stable),
            1,
        );
        assert_eq!(empty.current_weight, "--");
        assert_eq!(empty.average, "--");
        assert_eq!(empty.trend, "No data");
    }

    #[test]
    fn test_view_text_lines() {
        let view = SummaryView::from_summary(
            &summary(InsightStatus::Ready, Some(168), Some(170.5), Trend::Downward),
            1,
        );
        assert_eq!(
            view.to_string(),
            "Current weight: 168\nRolling average: 170.5\nTrend: Downward ↓"
        );
    }
}
