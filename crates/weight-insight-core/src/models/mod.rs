// ABOUTME: Core data models for the weight insight engine
// ABOUTME: Re-exports Observation, ObservationId and UserId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Observation`: one recorded (date, weight) measurement
//! - `ObservationId`: store-assigned identifier, unique per user and never reused
//! - `UserId`: identity key the store partitions observations by

mod observation;
mod user;

pub use observation::{Observation, ObservationId};
pub use user::UserId;
