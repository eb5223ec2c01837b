// ABOUTME: Intelligence module re-exports from weight-insight-intelligence crate
// ABOUTME: Keeps `crate::intelligence` paths stable while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Rolling-average smoothing and trend classification for weight series.

pub use weight_insight_intelligence::*;
