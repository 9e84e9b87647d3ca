// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-of-day helpers for interval start strings.
//!
//! Interval starts arrive as `HH:MM` or `HH:MM:SS`. All comparisons happen on
//! minutes since midnight; seconds are parsed but ignored.

use crate::error::DomainError;
use time::Time;
use time::macros::format_description;

/// Length of one scheduling interval in minutes.
pub const INTERVAL_MINUTES: i32 = 15;

/// Converts an `HH:MM[:SS]` string into minutes since midnight.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the string is not a valid time of
/// day. Callers must handle absent values before calling this.
pub fn time_to_minutes(value: &str) -> Result<i32, DomainError> {
    let parsed: Time = Time::parse(value, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(value, format_description!("[hour]:[minute]")))
        .map_err(|err| DomainError::InvalidTime {
            value: value.to_string(),
            reason: err.to_string(),
        })?;

    Ok(i32::from(parsed.hour()) * 60 + i32::from(parsed.minute()))
}

/// Returns `minutes(later) - minutes(earlier)`.
///
/// No reordering is performed; a negative result means the two times are
/// out of order.
///
/// # Errors
///
/// Returns an error if either time cannot be parsed.
pub fn calculate_break_gap(earlier: &str, later: &str) -> Result<i32, DomainError> {
    Ok(time_to_minutes(later)? - time_to_minutes(earlier)?)
}

/// Truncates an interval start to its `HH:MM` prefix.
///
/// Strings shorter than five characters are returned unchanged so that
/// malformed values still surface as parse errors downstream.
#[must_use]
pub fn truncate_to_minutes(value: &str) -> &str {
    value.get(..5).unwrap_or(value)
}
