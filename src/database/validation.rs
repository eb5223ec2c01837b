// ABOUTME: Domain validation for observation writes: weight bounds and no future dates
// ABOUTME: Shared by every store implementation before anything is persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::weight_bounds::{MAX_WEIGHT, MIN_WEIGHT};
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

/// Check a weight against the plausible human range (inclusive)
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` if the weight is below 50 or above 999
pub fn validate_weight(weight: u32) -> AppResult<()> {
    if (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(format!(
            "Weight must be between {MIN_WEIGHT} and {MAX_WEIGHT}, got {weight}"
        )))
    }
}

/// Reject dates after `today`
///
/// # Errors
///
/// Returns `INVALID_INPUT` if `date` is in the future
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date > today {
        return Err(AppError::invalid_input(format!(
            "Date {date} is in the future (today is {today})"
        )));
    }
    Ok(())
}

/// Today's date in the local time zone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(validate_weight(50).is_ok());
        assert!(validate_weight(999).is_ok());
        assert_eq!(
            validate_weight(49).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            validate_weight(1000).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_future_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        assert!(validate_date(today, today).is_ok());
        assert!(validate_date(today.pred_opt().unwrap(), today).is_ok());
        let error = validate_date(today.succ_opt().unwrap(), today).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
