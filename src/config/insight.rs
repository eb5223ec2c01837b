// ABOUTME: Insight engine configuration: rolling window, trend threshold, display precision
// ABOUTME: Loads defaults, applies environment overrides, and validates before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight Configuration
//!
//! Values resolve in three steps: compiled defaults, then `INSIGHT_*`
//! environment overrides, then validation. A validated instance is cached
//! process-wide by [`InsightConfig::global`].

use super::error::ConfigError;
use crate::constants::analysis::{
    DEFAULT_DISPLAY_PRECISION, DEFAULT_TREND_THRESHOLD, DEFAULT_WINDOW_SIZE, MAX_DISPLAY_PRECISION,
};
use crate::constants::env_config;
use crate::intelligence::TrendAnalyzer;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static INSIGHT_CONFIG: OnceLock<InsightConfig> = OnceLock::new();

/// Parameters of the rolling-average and trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Trailing window size for the rolling average
    pub window_size: usize,
    /// Minimum absolute delta between the last two averages that counts as movement
    pub trend_threshold: f64,
    /// Decimal places used when rendering an average
    pub display_precision: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            trend_threshold: DEFAULT_TREND_THRESHOLD,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl InsightConfig {
    /// Get the process-wide configuration, falling back to defaults on a bad override
    pub fn global() -> &'static Self {
        INSIGHT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load insight config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the window is zero, the threshold is negative or not
    /// finite, or the precision is unreasonably large
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "window_size must be at least 1",
            ));
        }
        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_threshold must be a finite, non-negative number",
            ));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::ValueOutOfRange(
                "display_precision must be at most 6",
            ));
        }
        Ok(())
    }

    /// Build the analyzer described by this configuration
    #[must_use]
    pub const fn analyzer(&self) -> TrendAnalyzer {
        TrendAnalyzer::with_parameters(self.window_size, self.trend_threshold)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::INSIGHT_WINDOW_SIZE, &mut self.window_size)?;
        Self::apply_env_var(
            env_config::INSIGHT_TREND_THRESHOLD,
            &mut self.trend_threshold,
        )?;
        Self::apply_env_var(
            env_config::INSIGHT_DISPLAY_PRECISION,
            &mut self.display_precision,
        )?;
        Ok(self)
    }
}
