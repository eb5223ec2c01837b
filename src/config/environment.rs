// ABOUTME: Deployment mode and log verbosity read from environment variables
// ABOUTME: Feeds the logging setup; unknown values fall back to development / info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbosity applied to this workspace's log targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Rejected writes and configuration fallbacks
    Warn,
    /// Writes and goal events
    #[default]
    Info,
    /// Per-analysis summaries
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Level named by a `RUST_LOG`-style value
    ///
    /// Only the first bare directive counts, so `warn,weight_insight=debug`
    /// yields [`LogLevel::Warn`]. Anything unrecognised is [`LogLevel::Info`].
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        let bare = value
            .split(',')
            .map(str::trim)
            .find(|directive| !directive.contains('='))
            .unwrap_or_default();

        match bare.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Where the binary is running; production logs include source locations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local use (default)
    #[default]
    Development,
    /// Deployed, e.g. a scheduled job
    Production,
}

impl Environment {
    /// Parse `ENVIRONMENT`; anything but `production`/`prod` is development
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_bare_directive_wins() {
        assert_eq!(
            LogLevel::from_env_value("warn,weight_insight=debug"),
            LogLevel::Warn
        );
        assert_eq!(LogLevel::from_env_value("weight_insight=trace"), LogLevel::Info);
        assert_eq!(LogLevel::from_env_value(" DEBUG "), LogLevel::Debug);
    }
}
