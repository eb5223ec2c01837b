// ABOUTME: Integration tests for insight configuration and logging settings
// ABOUTME: Exercises INSIGHT_* environment overrides, validation, and lenient enum parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::{env, ptr};
use weight_insight::config::{ConfigError, Environment, InsightConfig, LogLevel};
use weight_insight::constants::env_config;
use weight_insight::errors::{AppError, ErrorCode};
use weight_insight::logging::LogFormat;

const INSIGHT_VARS: [&str; 3] = [
    env_config::INSIGHT_WINDOW_SIZE,
    env_config::INSIGHT_TREND_THRESHOLD,
    env_config::INSIGHT_DISPLAY_PRECISION,
];

fn clear_insight_env() {
    for name in INSIGHT_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_insight_env();
    let config = InsightConfig::load().unwrap();

    assert_eq!(config, InsightConfig::default());
    assert_eq!(config.window_size, 7);
    assert!((config.trend_threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.display_precision, 1);
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_insight_env();
    env::set_var(env_config::INSIGHT_WINDOW_SIZE, "14");
    env::set_var(env_config::INSIGHT_TREND_THRESHOLD, " 0.25 ");
    env::set_var(env_config::INSIGHT_DISPLAY_PRECISION, "2");

    let config = InsightConfig::load().unwrap();
    clear_insight_env();

    assert_eq!(config.window_size, 14);
    assert!((config.trend_threshold - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.display_precision, 2);

    let analyzer = config.analyzer();
    assert_eq!(analyzer.window_size(), 14);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_insight_env();
    env::set_var(env_config::INSIGHT_WINDOW_SIZE, "seven");

    let result = InsightConfig::load();
    clear_insight_env();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains(env_config::INSIGHT_WINDOW_SIZE));
}

#[test]
#[serial]
fn test_zero_window_override_fails_validation() {
    clear_insight_env();
    env::set_var(env_config::INSIGHT_WINDOW_SIZE, "0");

    let result = InsightConfig::load();
    clear_insight_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_global_is_cached_and_valid() {
    clear_insight_env();
    let first = InsightConfig::global();
    let second = InsightConfig::global();

    assert!(ptr::eq(first, second));
    assert!(first.validate().is_ok());
}

#[test]
fn test_validation_rules() {
    let valid = InsightConfig::default();
    assert!(valid.validate().is_ok());

    let negative = InsightConfig {
        trend_threshold: -0.1,
        ..InsightConfig::default()
    };
    assert!(negative.validate().is_err());

    let not_finite = InsightConfig {
        trend_threshold: f64::NAN,
        ..InsightConfig::default()
    };
    assert!(not_finite.validate().is_err());

    let too_precise = InsightConfig {
        display_precision: 12,
        ..InsightConfig::default()
    };
    assert!(too_precise.validate().is_err());

    let zero_threshold = InsightConfig {
        trend_threshold: 0.0,
        ..InsightConfig::default()
    };
    assert!(zero_threshold.validate().is_ok());
}

#[test]
fn test_config_error_maps_to_app_error() {
    let error = AppError::from(ConfigError::ValueOutOfRange("window_size must be at least 1"));
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.code.exit_code(), 3);
    assert!(error.message.contains("window_size"));
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_env_value("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_env_value("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_env_value("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_env_value("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::from_env_value(""), LogLevel::Info);
    assert_eq!(
        LogLevel::from_env_value("trace,hyper=warn"),
        LogLevel::Trace
    );
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Debug.as_directive(), "debug");
}

#[test]
fn test_environment_and_format_parsing() {
    assert_eq!(
        Environment::from_env_value("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_env_value("testing"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());

    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Pretty);
}
