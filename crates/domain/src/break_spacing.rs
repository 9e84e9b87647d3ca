// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-agent break spacing.
//!
//! Compares one agent's proposed breaks with the breaks other agents already
//! have on the same day. Breaks of the same kind that land close together
//! thin out floor coverage, so near misses are reported as warnings.
//!
//! ## Invariants
//!
//! - Spacing is measured in 15-minute intervals, rounded up, so any
//!   non-zero difference counts as at least one interval
//! - Identical start times (spacing 0) are allowed; co-scheduling is a
//!   deliberate choice, only near misses are flagged
//! - At most one violation per break kind
//! - The candidate agent's own schedule is never compared with itself

use crate::break_time::{INTERVAL_MINUTES, time_to_minutes, truncate_to_minutes};
use crate::error::DomainError;
use crate::types::{BreakType, ExtractedBreaks, SiblingSchedule};
use crate::violation::{Severity, ValidationViolation, rule_names};

/// Default minimum spacing between same-kind breaks, in intervals.
pub const DEFAULT_MIN_SPACING_INTERVALS: i32 = 10;

/// Parameters of the minimum break spacing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingPolicy {
    /// Spacing below this many intervals (and above zero) is reported.
    pub min_intervals: i32,
    /// Break kinds the check applies to.
    pub applies_to: Vec<BreakType>,
}

impl Default for SpacingPolicy {
    fn default() -> Self {
        Self {
            min_intervals: DEFAULT_MIN_SPACING_INTERVALS,
            applies_to: BreakType::BREAKS.to_vec(),
        }
    }
}

/// The closest same-kind break found in one sibling's schedule.
struct ClosestBreak<'a> {
    spacing: u32,
    at: &'a str,
}

/// Validates that the agent's breaks are not scheduled too close to other
/// agents' breaks of the same kind.
///
/// For each applicable break kind present in `breaks`, siblings are scanned in
/// order. For each sibling the closest same-kind break is found; if its
/// spacing is greater than zero and below `policy.min_intervals`, one
/// `warning` violation is emitted for that kind and the remaining siblings are
/// not checked for it.
///
/// # Arguments
///
/// * `agent_id` - The candidate agent; sibling entries with this id are skipped
/// * `breaks` - The candidate agent's extracted breaks
/// * `siblings` - Other agents' committed schedules for the same date
/// * `policy` - Spacing threshold and applicable break kinds
///
/// # Errors
///
/// Returns an error if a candidate or sibling time cannot be parsed.
pub fn validate_break_spacing(
    agent_id: &str,
    breaks: &ExtractedBreaks,
    siblings: &[SiblingSchedule],
    policy: &SpacingPolicy,
) -> Result<Vec<ValidationViolation>, DomainError> {
    let min_intervals: u32 = u32::try_from(policy.min_intervals).unwrap_or(0);
    let mut violations: Vec<ValidationViolation> = Vec::new();
    let mut checked: Vec<BreakType> = Vec::new();

    for &break_type in &policy.applies_to {
        if !break_type.is_break() || checked.contains(&break_type) {
            continue;
        }
        checked.push(break_type);

        let Some(candidate) = breaks.get(break_type) else {
            continue;
        };
        let candidate_minutes: i32 = time_to_minutes(candidate)?;

        for sibling in siblings.iter().filter(|s| s.user_id != agent_id) {
            let Some(closest) = closest_break(sibling, break_type, candidate_minutes)? else {
                continue;
            };

            if closest.spacing > 0 && closest.spacing < min_intervals {
                let sibling_at: &str = truncate_to_minutes(closest.at);
                violations.push(
                    ValidationViolation::new(
                        rule_names::MINIMUM_BREAK_SPACING,
                        format!(
                            "{break_type} at {candidate} is {} interval(s) from agent {}'s {break_type} at {sibling_at}; minimum spacing is {} intervals",
                            closest.spacing, sibling.user_id, policy.min_intervals
                        ),
                        Severity::Warning,
                    )
                    .with_affected_intervals(vec![
                        candidate.to_string(),
                        sibling_at.to_string(),
                    ]),
                );
                break;
            }
        }
    }

    Ok(violations)
}

/// Finds the sibling's same-kind break closest to the candidate time.
fn closest_break<'a>(
    sibling: &'a SiblingSchedule,
    break_type: BreakType,
    candidate_minutes: i32,
) -> Result<Option<ClosestBreak<'a>>, DomainError> {
    let mut closest: Option<ClosestBreak<'a>> = None;

    for (at, sibling_type) in &sibling.intervals {
        if *sibling_type != break_type {
            continue;
        }

        let spacing: u32 = (time_to_minutes(at)? - candidate_minutes)
            .unsigned_abs()
            .div_ceil(INTERVAL_MINUTES.unsigned_abs());
        if closest.as_ref().is_none_or(|c| spacing < c.spacing) {
            closest = Some(ClosestBreak { spacing, at });
        }
    }

    Ok(closest)
}
