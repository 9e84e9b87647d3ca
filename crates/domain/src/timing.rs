// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::break_time::calculate_break_gap;
use crate::error::DomainError;
use crate::types::{BreakType, ExtractedBreaks};
use crate::violation::{Severity, ValidationViolation, rule_names};

/// Default minimum gap between adjacent breaks, in minutes.
pub const DEFAULT_MIN_GAP_MINUTES: i32 = 90;

/// Default maximum gap between adjacent breaks, in minutes.
pub const DEFAULT_MAX_GAP_MINUTES: i32 = 270;

/// Adjacent break pairs whose gap is measured.
const ADJACENT_PAIRS: [(BreakType, BreakType); 2] = [
    (BreakType::Hb1, BreakType::B),
    (BreakType::B, BreakType::Hb2),
];

/// Allowed gap between adjacent breaks.
///
/// `min_minutes > max_minutes` is accepted as-is; both checks then run
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingWindow {
    /// Gaps shorter than this are a `minimum_gap` violation.
    pub min_minutes: i32,
    /// Gaps longer than this are a `maximum_gap` violation.
    pub max_minutes: i32,
}

impl TimingWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(min_minutes: i32, max_minutes: i32) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }

    /// Returns whether the window cannot be satisfied by any gap.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.min_minutes > self.max_minutes
    }
}

impl Default for TimingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_GAP_MINUTES, DEFAULT_MAX_GAP_MINUTES)
    }
}

/// Validates the gaps HB1→B and B→HB2 against a timing window.
///
/// Pairs with a missing break are skipped. A gap below the minimum yields an
/// `error` `minimum_gap` violation; a gap above the maximum yields a
/// `warning` `maximum_gap` violation. Both may fire for the same pair.
///
/// # Errors
///
/// Returns an error if a present break time cannot be parsed.
pub fn validate_break_timing(
    breaks: &ExtractedBreaks,
    window: &TimingWindow,
) -> Result<Vec<ValidationViolation>, DomainError> {
    let mut violations: Vec<ValidationViolation> = Vec::new();

    for (first, second) in ADJACENT_PAIRS {
        let (Some(first_time), Some(second_time)) = (breaks.get(first), breaks.get(second)) else {
            continue;
        };

        let gap: i32 = calculate_break_gap(first_time, second_time)?;
        let affected: Vec<String> = vec![first_time.to_string(), second_time.to_string()];

        if gap < window.min_minutes {
            violations.push(
                ValidationViolation::new(
                    rule_names::MINIMUM_GAP,
                    format!(
                        "Gap between {first} ({first_time}) and {second} ({second_time}) is {gap} minutes; minimum is {} minutes",
                        window.min_minutes
                    ),
                    Severity::Error,
                )
                .with_affected_intervals(affected.clone()),
            );
        }

        if gap > window.max_minutes {
            violations.push(
                ValidationViolation::new(
                    rule_names::MAXIMUM_GAP,
                    format!(
                        "Gap between {first} ({first_time}) and {second} ({second_time}) is {gap} minutes; maximum is {} minutes",
                        window.max_minutes
                    ),
                    Severity::Warning,
                )
                .with_affected_intervals(affected),
            );
        }
    }

    Ok(violations)
}
