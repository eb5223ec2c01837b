// ABOUTME: Explicit orderings for observation series: ascending for analysis, descending for display
// ABOUTME: Stable sort by date with identifier tie-break so same-day entries stay deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use weight_insight_core::models::Observation;

/// Ordering applied to an observation series
///
/// Analysis and display need different orders, so each call site names the
/// one it wants instead of sharing a single comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first; required input order for the rolling average
    Ascending,
    /// Newest first; used by log views
    Descending,
}

impl SortOrder {
    /// Compare two observations under this ordering
    #[must_use]
    pub fn compare(self, a: &Observation, b: &Observation) -> Ordering {
        let ascending = a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id));
        match self {
            Self::Ascending => ascending,
            Self::Descending => ascending.reverse(),
        }
    }
}

/// Sort observations in place by date, breaking same-day ties by identifier
///
/// Sorting is idempotent: applying the same order twice leaves the series
/// unchanged.
pub fn sort_observations(observations: &mut [Observation], order: SortOrder) {
    observations.sort_by(|a, b| order.compare(a, b));
}
