// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule set evaluation.
//!
//! Runs every active rule in priority order and resolves the combined
//! result into a blocking or non-blocking verdict.
//!
//! ## Invariants
//!
//! - Inactive rules are never dispatched
//! - Rules run in ascending `priority`; equal priorities keep input order
//! - Violation order follows rule order
//! - Two violations are duplicates iff `rule_name` and `message` both match;
//!   the first occurrence is kept
//! - The verdict is blocking iff any remaining violation has `error` severity

use crate::dispatch::{ValidationContext, dispatch_rule};
use crate::error::CoreError;
use crate::rule::BreakScheduleRule;
use breakplan_domain::{BreakScheduleUpdateRequest, ValidationViolation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Deduplicated violations plus the save verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolations {
    /// Violations in rule priority order, without duplicates.
    pub violations: Vec<ValidationViolation>,
    /// Whether any violation has `error` severity.
    pub has_blocking_violations: bool,
}

impl RuleViolations {
    /// Builds the verdict from a violation list, removing duplicates.
    #[must_use]
    pub fn from_violations(violations: Vec<ValidationViolation>) -> Self {
        let violations: Vec<ValidationViolation> = deduplicate_violations(violations);
        let has_blocking_violations: bool = violations.iter().any(ValidationViolation::is_blocking);
        Self {
            violations,
            has_blocking_violations,
        }
    }

    /// The violations that block a save.
    #[must_use]
    pub fn blocking(&self) -> Vec<ValidationViolation> {
        self.violations
            .iter()
            .filter(|v| v.is_blocking())
            .cloned()
            .collect()
    }

    /// The advisory violations.
    #[must_use]
    pub fn warnings(&self) -> Vec<ValidationViolation> {
        self.violations
            .iter()
            .filter(|v| !v.is_blocking())
            .cloned()
            .collect()
    }
}

/// Evaluates every active rule against a request.
///
/// # Arguments
///
/// * `request` - The candidate schedule
/// * `rules` - The configured rule set, active and inactive
/// * `context` - Shift and sibling data resolved by the caller
///
/// # Returns
///
/// All violations, in ascending rule priority order. Not deduplicated.
///
/// # Errors
///
/// Returns an error if any time string involved cannot be parsed.
pub fn validate_against_rules(
    request: &BreakScheduleUpdateRequest,
    rules: &[BreakScheduleRule],
    context: &ValidationContext<'_>,
) -> Result<Vec<ValidationViolation>, CoreError> {
    let mut active: Vec<&BreakScheduleRule> = rules.iter().filter(|r| r.is_active).collect();
    active.sort_by_key(|r| r.priority);

    let mut violations: Vec<ValidationViolation> = Vec::new();
    for rule in active {
        let found: Vec<ValidationViolation> = dispatch_rule(request, rule, context)?;
        debug!(
            rule = %rule.rule_name,
            priority = rule.priority,
            violations = found.len(),
            "Evaluated break schedule rule"
        );
        violations.extend(found);
    }

    Ok(violations)
}

/// Evaluates every active rule and resolves the verdict.
///
/// This is `validate_against_rules` followed by deduplication.
///
/// # Errors
///
/// Returns an error if any time string involved cannot be parsed.
pub fn get_rule_violations(
    request: &BreakScheduleUpdateRequest,
    rules: &[BreakScheduleRule],
    context: &ValidationContext<'_>,
) -> Result<RuleViolations, CoreError> {
    let violations: Vec<ValidationViolation> = validate_against_rules(request, rules, context)?;
    Ok(RuleViolations::from_violations(violations))
}

/// Removes violations whose `rule_name` and `message` repeat an earlier one.
#[must_use]
pub fn deduplicate_violations(violations: Vec<ValidationViolation>) -> Vec<ValidationViolation> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert((v.rule_name.clone(), v.message.clone())))
        .collect()
}
