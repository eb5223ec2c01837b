// ABOUTME: Unified error handling re-exported from weight-insight-core
// ABOUTME: Keeps `crate::errors` paths stable for the application crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports `AppError`, `ErrorCode`, `AppResult` and `ErrorResponse` from
//! the `weight-insight-core` crate.

pub use weight_insight_core::errors::*;
