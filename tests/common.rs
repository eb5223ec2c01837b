// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, dated series builders, and a store with a pinned clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `weight_insight`

use chrono::{Duration, NaiveDate};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use weight_insight::database::InMemoryObservationStore;
use weight_insight::models::{Observation, ObservationId};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// "Today" for stores built by [`test_store`]
pub fn fixed_today() -> NaiveDate {
    date(2025, 6, 30)
}

/// Fresh in-memory store whose clock is pinned to [`fixed_today`]
pub fn test_store() -> Arc<InMemoryObservationStore> {
    init_test_logging();
    Arc::new(InMemoryObservationStore::with_clock(fixed_today))
}

/// Observations on consecutive days starting 2025-01-01, ids from 1
pub fn daily_series(weights: &[u32]) -> Vec<Observation> {
    let start = date(2025, 1, 1);
    weights
        .iter()
        .zip(0_i64..)
        .map(|(&weight, offset)| {
            Observation::new(
                ObservationId(offset as u64 + 1),
                start + Duration::days(offset),
                weight,
            )
        })
        .collect()
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Assert two float sequences agree element-wise
pub fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}
