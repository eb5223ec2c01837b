// ABOUTME: Weight observation value type and its store-assigned identifier
// ABOUTME: Observation pairs a calendar date with an integer weight measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the store when an observation is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationId(pub u64);

impl ObservationId {
    /// Get the raw identifier value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded weight measurement
///
/// Observations are immutable values. A correction replaces the value held
/// by the store under the same `id`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use weight_insight_core::models::{Observation, ObservationId};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let observation = Observation::new(ObservationId(1), date, 162);
/// assert!((observation.weight_value() - 162.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Store-assigned identifier
    pub id: ObservationId,
    /// Calendar date of the measurement (no time of day)
    pub date: NaiveDate,
    /// Measured weight in the user's unit
    pub weight: u32,
}

impl Observation {
    /// Create a new observation
    #[must_use]
    pub const fn new(id: ObservationId, date: NaiveDate, weight: u32) -> Self {
        Self { id, date, weight }
    }

    /// Weight as a floating-point value for averaging
    #[must_use]
    pub fn weight_value(&self) -> f64 {
        f64::from(self.weight)
    }
}
