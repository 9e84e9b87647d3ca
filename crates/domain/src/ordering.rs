// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::break_time::time_to_minutes;
use crate::error::DomainError;
use crate::types::{BreakType, ExtractedBreaks};
use crate::violation::{Severity, ValidationViolation, rule_names};

/// Pairs that must be strictly ordered, in the order they are checked.
const ORDERED_PAIRS: [(BreakType, BreakType); 3] = [
    (BreakType::Hb1, BreakType::B),
    (BreakType::B, BreakType::Hb2),
    (BreakType::Hb1, BreakType::Hb2),
];

/// Validates that breaks occur in the order HB1, B, HB2.
///
/// Only pairs where both breaks are present are checked. At most one
/// violation is returned: the first violated pair in the order HB1-B, B-HB2,
/// HB1-HB2. Equal start times count as out of order.
///
/// # Errors
///
/// Returns an error if a present break time cannot be parsed.
pub fn validate_break_ordering(
    breaks: &ExtractedBreaks,
) -> Result<Vec<ValidationViolation>, DomainError> {
    for (first, second) in ORDERED_PAIRS {
        let (Some(first_time), Some(second_time)) = (breaks.get(first), breaks.get(second)) else {
            continue;
        };

        if time_to_minutes(first_time)? >= time_to_minutes(second_time)? {
            let violation: ValidationViolation = ValidationViolation::new(
                rule_names::BREAK_ORDERING,
                format!(
                    "{first} ({first_time}) must be scheduled before {second} ({second_time})"
                ),
                Severity::Error,
            )
            .with_affected_intervals(vec![first_time.to_string(), second_time.to_string()]);
            return Ok(vec![violation]);
        }
    }

    Ok(Vec::new())
}
