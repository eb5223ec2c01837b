// ABOUTME: Weight insight engine: rolling-average smoothing and trend classification
// ABOUTME: Pure, synchronous transforms over an in-memory observation snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Insight Intelligence
//!
//! The analysis pipeline is:
//!
//! 1. the caller sorts the observation series ascending by date ([`series`]),
//! 2. [`rolling_average`] smooths it with a trailing window,
//! 3. [`detect_trend`] reduces the smoothed curve to a [`Trend`] label.
//!
//! Every function here is pure: no locking, no I/O, and a freshly allocated
//! result per call. Concurrent analyses over different snapshots are
//! independent of each other.

/// Rolling-average and trend pipeline bundled with its parameters
pub mod analyzer;
/// Goal comparison helpers
pub mod goal;
/// Trailing simple moving average
pub mod rolling_average;
/// Explicit analysis and display orderings for observation series
pub mod series;
/// Three-way trend classification
pub mod trend;

pub use analyzer::{TrendAnalysis, TrendAnalyzer};
pub use goal::{goal_reached, GoalProgress};
pub use rolling_average::rolling_average;
pub use series::{sort_observations, SortOrder};
pub use trend::{detect_trend, Trend};
