// ABOUTME: Trend analyzer bundling window size and threshold with the two-stage pipeline
// ABOUTME: Runs rolling-average smoothing then trend classification over a sorted snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::rolling_average::rolling_average;
use crate::trend::{detect_trend, Trend};
use serde::{Deserialize, Serialize};
use tracing::debug;
use weight_insight_core::constants::analysis::{DEFAULT_TREND_THRESHOLD, DEFAULT_WINDOW_SIZE};
use weight_insight_core::models::Observation;

/// Result of analysing one observation series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// One rolling average per input observation, in input order
    pub averages: Vec<f64>,
    /// Trend of the last two averages
    pub trend: Trend,
}

impl TrendAnalysis {
    /// Most recent rolling average, if any
    #[must_use]
    pub fn latest_average(&self) -> Option<f64> {
        self.averages.last().copied()
    }
}

/// Rolling-average and trend pipeline with fixed parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalyzer {
    window_size: usize,
    threshold: f64,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Create an analyzer with the standard 7-point window and 0.5 threshold
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            threshold: DEFAULT_TREND_THRESHOLD,
        }
    }

    /// Create an analyzer with custom parameters
    #[must_use]
    pub const fn with_parameters(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }

    /// Trailing window size
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Trend threshold
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Analyse a series already sorted ascending by date
    #[must_use]
    pub fn analyze(&self, series: &[Observation]) -> TrendAnalysis {
        let averages = rolling_average(series, self.window_size);
        let trend = detect_trend(&averages, self.threshold);

        debug!(
            observations = series.len(),
            window_size = self.window_size,
            threshold = self.threshold,
            latest_average = ?averages.last(),
            trend = trend.as_str(),
            "Analysed weight series"
        );

        TrendAnalysis { averages, trend }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use chrono::{Days, NaiveDate};
    use weight_insight_core::models::ObservationId;

    #[test]
    fn test_downward_week() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let series: Vec<Observation> = [180, 179, 178, 176, 175, 174, 172, 171]
            .into_iter()
            .zip(0_u64..)
            .map(|(w, i)| Observation::new(ObservationId(i + 1), start + Days::new(i), w))
            .collect();

        let analysis = TrendAnalyzer::new().analyze(&series);
        assert_eq!(analysis.averages.len(), series.len());
        assert_eq!(analysis.trend, Trend::Downward);
        // (179 + 178 + 176 + 175 + 174 + 172 + 171) / 7
        assert_eq!(analysis.latest_average(), Some(175.0));
    }

    #[test]
    fn test_empty_series() {
        let analysis = TrendAnalyzer::with_parameters(3, 1.0).analyze(&[]);
        assert!(analysis.averages.is_empty());
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.latest_average(), None);
    }
}
