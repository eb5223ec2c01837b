// ABOUTME: Core types and constants for the weight insight workspace
// ABOUTME: Foundation crate with error handling, observation models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Insight Core
//!
//! Foundation crate providing shared types and constants for the weight
//! insight engine. This crate is designed to change infrequently, so the
//! analysis crate and the application crate can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ErrorResponse`
//! - **constants**: Domain constants (weight bounds, analysis defaults, env var names)
//! - **models**: `Observation`, `ObservationId` and `UserId`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (observations and user identity)
pub mod models;
