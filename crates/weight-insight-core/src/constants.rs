// ABOUTME: Domain constants for weight bounds, analysis defaults, and environment variables
// ABOUTME: Pure data constants grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than living in one flat list.

/// Plausible human weight range enforced at the store boundary
pub mod weight_bounds {
    /// Smallest accepted weight (inclusive)
    pub const MIN_WEIGHT: u32 = 50;
    /// Largest accepted weight (inclusive)
    pub const MAX_WEIGHT: u32 = 999;
}

/// Defaults for the rolling-average and trend analysis
pub mod analysis {
    /// Trailing window used for the rolling average (one week of daily entries)
    pub const DEFAULT_WINDOW_SIZE: usize = 7;
    /// Minimum delta between the last two averages that counts as movement
    pub const DEFAULT_TREND_THRESHOLD: f64 = 0.5;
    /// Decimal places used when rendering an average
    pub const DEFAULT_DISPLAY_PRECISION: usize = 1;
    /// Upper bound accepted for the display precision setting
    pub const MAX_DISPLAY_PRECISION: usize = 6;
}

/// Environment variable names
pub mod env_config {
    /// Overrides the rolling-average window size
    pub const INSIGHT_WINDOW_SIZE: &str = "INSIGHT_WINDOW_SIZE";
    /// Overrides the trend threshold
    pub const INSIGHT_TREND_THRESHOLD: &str = "INSIGHT_TREND_THRESHOLD";
    /// Overrides the display precision
    pub const INSIGHT_DISPLAY_PRECISION: &str = "INSIGHT_DISPLAY_PRECISION";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name attached to log events
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const WEIGHT_INSIGHT: &str = "weight-insight";
}
