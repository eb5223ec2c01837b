// ABOUTME: Causal trailing simple moving average over a chronological weight series
// ABOUTME: The window shrinks at the start of the series instead of padding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weight_insight_core::models::Observation;

/// Calculate the trailing rolling average of a chronological series
///
/// Element `i` of the result is the arithmetic mean of the weights at indices
/// `[max(0, i - window_size + 1), i]`. For the first `window_size - 1`
/// indices the window holds only `i + 1` points, so those early averages are
/// noisier than later ones.
///
/// The series must already be sorted ascending by date. The function does not
/// sort or deduplicate; an unsorted series yields well-defined but meaningless
/// numbers.
///
/// Returns an empty vector when the series is empty or `window_size` is 0.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use weight_insight_core::models::{Observation, ObservationId};
/// use weight_insight_intelligence::rolling_average;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
/// let series = [
///     Observation::new(ObservationId(1), day(1), 150),
///     Observation::new(ObservationId(2), day(2), 152),
///     Observation::new(ObservationId(3), day(3), 154),
/// ];
/// assert_eq!(rolling_average(&series, 7), vec![150.0, 151.0, 152.0]);
/// ```
#[must_use]
pub fn rolling_average(series: &[Observation], window_size: usize) -> Vec<f64> {
    if series.is_empty() || window_size == 0 {
        return Vec::new();
    }

    (0..series.len())
        .map(|index| {
            let start = (index + 1).saturating_sub(window_size);
            let window = &series[start..=index];
            let sum: f64 = window.iter().map(Observation::weight_value).sum();
            sum / window.len() as f64
        })
        .collect()
}
