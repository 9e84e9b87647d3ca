// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::break_time::{INTERVAL_MINUTES, time_to_minutes, truncate_to_minutes};
use crate::error::DomainError;
use crate::types::{BreakInterval, BreakType};
use crate::violation::{Severity, ValidationViolation, rule_names};

/// Number of intervals a full break must span.
pub const FULL_BREAK_INTERVALS: usize = 2;

/// Validates that the full break spans exactly two consecutive intervals.
///
/// Every `B` interval is considered, not just the first. Exactly one
/// violation is returned when the count is wrong or the two intervals are not
/// 15 minutes apart; a wrong count is reported in preference to spacing.
///
/// # Errors
///
/// Returns an error if a `B` interval start cannot be parsed.
pub fn validate_full_break_duration(
    intervals: &[BreakInterval],
) -> Result<Vec<ValidationViolation>, DomainError> {
    let full_break: Vec<&BreakInterval> = intervals
        .iter()
        .filter(|i| i.break_type == BreakType::B)
        .collect();

    let mut starts: Vec<i32> = full_break
        .iter()
        .map(|i| time_to_minutes(&i.interval_start))
        .collect::<Result<_, _>>()?;
    starts.sort_unstable();

    let consecutive: bool = matches!(
        starts.as_slice(),
        [first, second] if second - first == INTERVAL_MINUTES
    );
    if consecutive {
        return Ok(Vec::new());
    }

    let message: String = if full_break.len() == FULL_BREAK_INTERVALS {
        format!(
            "Full break (B) intervals must be consecutive {INTERVAL_MINUTES}-minute slots"
        )
    } else {
        format!(
            "Full break (B) must span exactly {FULL_BREAK_INTERVALS} intervals, found {}",
            full_break.len()
        )
    };

    let affected: Vec<String> = full_break
        .iter()
        .map(|i| truncate_to_minutes(&i.interval_start).to_string())
        .collect();

    Ok(vec![
        ValidationViolation::new(rule_names::FULL_BREAK_DURATION, message, Severity::Error)
            .with_affected_intervals(affected),
    ])
}
