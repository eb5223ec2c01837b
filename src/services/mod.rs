// ABOUTME: Application services composed from the store seam and the analysis engine
// ABOUTME: Currently the insight service used by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weight insight summaries and weight recording
pub mod insights;

pub use insights::{InsightService, InsightStatus, InsightSummary, RecordOutcome};
