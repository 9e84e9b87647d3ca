// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::rule::{BreakScheduleRule, RuleKind};
use breakplan_domain::{
    BreakScheduleUpdateRequest, ExtractedBreaks, Severity, ShiftHoursMap, ShiftType,
    SiblingSchedule, ValidationViolation, extract_break_times, validate_break_ordering,
    validate_break_spacing, validate_break_timing, validate_full_break_duration,
    validate_shift_boundary,
};
use tracing::{debug, trace};

/// Already-resolved data a rule may consult besides the request itself.
///
/// Everything here is fetched by the caller; evaluation never performs I/O.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// The agent's shift on the request date.
    pub shift_type: &'a ShiftType,
    /// Working hours per shift type.
    pub shift_hours: &'a ShiftHoursMap,
    /// Other agents' schedules for the same date. `None` skips coverage rules.
    pub sibling_schedules: Option<&'a [SiblingSchedule]>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context without sibling schedules.
    #[must_use]
    pub const fn new(shift_type: &'a ShiftType, shift_hours: &'a ShiftHoursMap) -> Self {
        Self {
            shift_type,
            shift_hours,
            sibling_schedules: None,
        }
    }

    /// Supplies sibling schedules for coverage rules.
    #[must_use]
    pub const fn with_siblings(mut self, sibling_schedules: &'a [SiblingSchedule]) -> Self {
        self.sibling_schedules = Some(sibling_schedules);
        self
    }
}

/// Evaluates a single rule against a request.
///
/// The rule is resolved to its `RuleKind` and the matching evaluator runs.
/// Every violation it returns is re-stamped with the rule's severity
/// (`error` when `is_blocking`, otherwise `warning`), except minimum break
/// spacing findings, which are always `warning`. Distribution rules and
/// rules the engine does not recognize produce nothing. The `is_active` flag
/// is not consulted here; filtering is the aggregator's job.
///
/// # Arguments
///
/// * `request` - The candidate schedule
/// * `rule` - The rule to evaluate
/// * `context` - Shift and sibling data resolved by the caller
///
/// # Errors
///
/// Returns an error if a time string in the request, the shift hours or the
/// sibling schedules cannot be parsed.
pub fn dispatch_rule(
    request: &BreakScheduleUpdateRequest,
    rule: &BreakScheduleRule,
    context: &ValidationContext<'_>,
) -> Result<Vec<ValidationViolation>, CoreError> {
    let breaks: ExtractedBreaks = extract_break_times(&request.intervals);

    let kind: RuleKind = rule.kind();
    let violations: Vec<ValidationViolation> = match &kind {
        RuleKind::Ordering => validate_break_ordering(&breaks)?,
        RuleKind::Timing(window) => validate_break_timing(&breaks, window)?,
        RuleKind::ShiftBoundary => validate_shift_boundary(
            &request.intervals,
            context.shift_hours.hours_for(context.shift_type),
        )?,
        RuleKind::FullBreakDuration => validate_full_break_duration(&request.intervals)?,
        RuleKind::CoverageSpacing(policy) => {
            if let Some(siblings) = context.sibling_schedules {
                validate_break_spacing(&request.agent_id, &breaks, siblings, policy)?
            } else {
                debug!(
                    rule = %rule.rule_name,
                    "No sibling schedules supplied; skipping coverage rule"
                );
                Vec::new()
            }
        }
        RuleKind::Distribution => Vec::new(),
        RuleKind::Inert => {
            trace!(
                rule = %rule.rule_name,
                rule_type = %rule.rule_type,
                "Rule not recognized; treating as inert"
            );
            Vec::new()
        }
    };

    // Spacing findings are advisory whatever the rule's blocking flag
    let severity: Severity = if matches!(kind, RuleKind::CoverageSpacing(_)) {
        Severity::Warning
    } else {
        rule.severity()
    };
    Ok(violations
        .into_iter()
        .map(|v| v.with_severity(severity))
        .collect())
}
