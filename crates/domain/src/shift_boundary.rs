// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::break_time::{time_to_minutes, truncate_to_minutes};
use crate::error::DomainError;
use crate::types::{BreakInterval, ShiftHours};
use crate::violation::{Severity, ValidationViolation, rule_names};

/// Validates that every break interval lies within the agent's shift.
///
/// A break starting before `hours.start` or at/after `hours.end` is a
/// violation, one per offending interval. `IN` intervals are never checked.
/// When the shift has no hours (e.g. `OFF`) this is a no-op.
///
/// # Arguments
///
/// * `intervals` - The candidate intervals
/// * `hours` - The shift window, already resolved by the caller
///
/// # Errors
///
/// Returns an error if the shift hours or a break interval start cannot be
/// parsed.
pub fn validate_shift_boundary(
    intervals: &[BreakInterval],
    hours: Option<&ShiftHours>,
) -> Result<Vec<ValidationViolation>, DomainError> {
    let Some(hours) = hours else {
        return Ok(Vec::new());
    };

    let shift_start: i32 = time_to_minutes(&hours.start)?;
    let shift_end: i32 = time_to_minutes(&hours.end)?;

    let mut violations: Vec<ValidationViolation> = Vec::new();
    for interval in intervals.iter().filter(|i| i.break_type.is_break()) {
        let start: i32 = time_to_minutes(&interval.interval_start)?;
        if start < shift_start || start >= shift_end {
            let at: &str = truncate_to_minutes(&interval.interval_start);
            violations.push(
                ValidationViolation::new(
                    rule_names::SHIFT_BOUNDARY,
                    format!(
                        "{} at {at} is outside shift hours {}-{}",
                        interval.break_type, hours.start, hours.end
                    ),
                    Severity::Error,
                )
                .with_affected_intervals(vec![at.to_string()]),
            );
        }
    }

    Ok(violations)
}
