// ABOUTME: Main library entry point for the weight insight application
// ABOUTME: Wires the observation store seam, insight service, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Insight
//!
//! Records body weight over time, tracks progress toward a goal weight, and
//! surfaces a simple trend signal.
//!
//! ## Architecture
//!
//! - **Intelligence**: rolling-average smoothing and trend classification
//!   (`weight-insight-intelligence` crate, re-exported as [`intelligence`])
//! - **Database**: repository traits for observations and goals, plus an
//!   in-memory implementation
//! - **Services**: [`services::InsightService`] loads, sorts and analyses a
//!   user's series
//! - **Config / Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weight_insight::config::InsightConfig;
//! use weight_insight::database::InMemoryObservationStore;
//! use weight_insight::errors::AppResult;
//! use weight_insight::models::UserId;
//! use weight_insight::services::InsightService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryObservationStore::new());
//!     let service = InsightService::new(store, InsightConfig::global());
//!     let user = UserId::new();
//!
//!     let today = chrono::Local::now().date_naive();
//!     service.record_weight(user, today, 172).await?;
//!
//!     let summary = service.summarize(user).await?;
//!     println!("{:?} {:?}", summary.latest_average, summary.trend);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Observation store traits and implementations
pub mod database;

/// Unified error handling system
pub mod errors;

/// Text and JSON rendering of insight summaries
pub mod formatters;

/// Rolling-average and trend analysis engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Insight service
pub mod services;
