// ABOUTME: Data models re-exported from weight-insight-core
// ABOUTME: Observation, ObservationId and UserId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use weight_insight_core::models::*;
