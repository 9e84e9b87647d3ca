// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dispatch::ValidationContext;
use crate::error::CoreError;
use crate::rule::BreakScheduleRule;
use crate::validate::{RuleViolations, get_rule_violations};
use breakplan_domain::{BreakScheduleUpdateRequest, ValidationViolation, time_to_minutes};
use tracing::{info, warn};

/// A schedule update that passed validation and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedUpdate {
    /// The validated request, unchanged.
    pub request: BreakScheduleUpdateRequest,
    /// Advisory violations to surface alongside the save.
    pub warnings: Vec<ValidationViolation>,
}

/// Gates a break schedule update on the configured rules.
///
/// Every interval start must parse before any rule is consulted. The update
/// is refused when any `error`-severity violation remains after
/// deduplication; otherwise it is accepted together with its warnings. The
/// caller persists an accepted update.
///
/// # Arguments
///
/// * `request` - The candidate schedule
/// * `rules` - The configured rule set
/// * `context` - Shift and sibling data resolved by the caller
///
/// # Errors
///
/// Returns an error if:
/// - An interval start, shift hour or sibling time cannot be parsed
/// - Any blocking violation is found
pub fn apply_break_schedule_update(
    request: BreakScheduleUpdateRequest,
    rules: &[BreakScheduleRule],
    context: &ValidationContext<'_>,
) -> Result<AcceptedUpdate, CoreError> {
    for interval in &request.intervals {
        time_to_minutes(&interval.interval_start)?;
    }

    let result: RuleViolations = get_rule_violations(&request, rules, context)?;

    if result.has_blocking_violations {
        let blocking: Vec<ValidationViolation> = result.blocking();
        warn!(
            agent_id = %request.agent_id,
            date = %request.date,
            blocking = blocking.len(),
            "Refusing break schedule update"
        );
        return Err(CoreError::BlockingViolations {
            blocking,
            all: result.violations,
        });
    }

    info!(
        agent_id = %request.agent_id,
        date = %request.date,
        warnings = result.violations.len(),
        "Accepted break schedule update"
    );

    Ok(AcceptedUpdate {
        request,
        warnings: result.violations,
    })
}
