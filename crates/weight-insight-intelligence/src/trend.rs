// ABOUTME: Three-way trend label derived from the last two rolling averages
// ABOUTME: Strict threshold comparison leaves a dead zone that absorbs day-to-day noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the most recent movement of the smoothed weight curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    /// Weight increasing
    Upward,
    /// Weight decreasing
    Downward,
    /// No movement beyond the threshold, or not enough data
    Stable,
}

impl Trend {
    /// Machine-readable name (`UPWARD`, `DOWNWARD`, `STABLE`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upward => "UPWARD",
            Self::Downward => "DOWNWARD",
            Self::Stable => "STABLE",
        }
    }

    /// Display label, e.g. `Downward ↓`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upward => "Upward ↑",
            Self::Downward => "Downward ↓",
            Self::Stable => "Stable →",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the trend of a smoothed series
///
/// Only the last two values are consulted: `delta = last - second_to_last`.
/// `delta > threshold` is [`Trend::Upward`], `delta < -threshold` is
/// [`Trend::Downward`], and anything in between (including exactly
/// `±threshold`) is [`Trend::Stable`]. Fewer than two values is
/// [`Trend::Stable`].
///
/// # Panics
///
/// Debug builds panic on a negative `threshold`. Release builds accept it,
/// and it removes the dead zone: any delta above `threshold` (even a
/// negative one) reads as [`Trend::Upward`]. Configuration loading rejects
/// negative thresholds before they reach this function.
#[must_use]
pub fn detect_trend(smoothed: &[f64], threshold: f64) -> Trend {
    debug_assert!(threshold >= 0.0, "trend threshold must be non-negative");
    let [.., previous, recent] = smoothed else {
        return Trend::Stable;
    };

    let delta = recent - previous;
    if delta > threshold {
        Trend::Upward
    } else if delta < -threshold {
        Trend::Downward
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward() {
        assert_eq!(detect_trend(&[150.0, 151.0, 152.0], 0.5), Trend::Upward);
    }

    #[test]
    fn test_downward() {
        assert_eq!(detect_trend(&[152.0, 151.2], 0.5), Trend::Downward);
    }

    #[test]
    fn test_within_dead_zone() {
        assert_eq!(detect_trend(&[150.0, 150.3], 0.5), Trend::Stable);
    }

    #[test]
    fn test_boundary_is_stable() {
        assert_eq!(detect_trend(&[150.0, 150.5], 0.5), Trend::Stable);
        assert_eq!(detect_trend(&[150.5, 150.0], 0.5), Trend::Stable);
    }

    #[test]
    fn test_short_input_is_stable() {
        assert_eq!(detect_trend(&[], 0.5), Trend::Stable);
        assert_eq!(detect_trend(&[150.0], 0.0), Trend::Stable);
    }

    #[test]
    fn test_only_trailing_pair_matters() {
        assert_eq!(detect_trend(&[300.0, 100.0, 150.0, 151.0], 0.5), Trend::Upward);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "trend threshold must be non-negative")]
    fn test_negative_threshold_rejected_in_debug() {
        let _ = detect_trend(&[150.0, 150.2], -1.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Trend::Downward.label(), "Downward ↓");
        assert_eq!(Trend::Upward.to_string(), "Upward ↑");
        assert_eq!(Trend::Stable.as_str(), "STABLE");
    }
}
