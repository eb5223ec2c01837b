// ABOUTME: Configuration module for insight settings and runtime environment
// ABOUTME: Environment-only configuration; there is no config file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Deployment environment and log level types
pub mod environment;
/// Configuration error types
pub mod error;
/// Rolling window, trend threshold and display precision
pub mod insight;

pub use environment::{Environment, LogLevel};
pub use error::ConfigError;
pub use insight::InsightConfig;
