// ABOUTME: Application constants re-exported from weight-insight-core
// ABOUTME: Weight bounds, analysis defaults, environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use weight_insight_core::constants::*;
