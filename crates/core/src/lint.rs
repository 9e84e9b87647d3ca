// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule configuration checks for administrators.
//!
//! None of these change how rules evaluate. The engine still runs an inverted
//! timing window as configured and still treats unknown rules as inert; the
//! lint only makes such configurations visible.

use crate::rule::{BreakScheduleRule, RuleKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A problem found in a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RuleConfigIssue {
    /// A gap rule whose minimum exceeds its maximum; every gap violates.
    InvertedTimingWindow {
        /// The rule identifier.
        rule_id: String,
        /// The rule name.
        rule_name: String,
        /// Configured minimum.
        min_minutes: i32,
        /// Configured maximum.
        max_minutes: i32,
    },
    /// A rule that resolves to no evaluator and never produces violations.
    InertRule {
        /// The rule identifier.
        rule_id: String,
        /// The rule name.
        rule_name: String,
        /// The configured rule type.
        rule_type: String,
    },
    /// Active rules sharing a priority; they run in configuration order.
    SharedPriority {
        /// The shared priority value.
        priority: i32,
        /// The rules involved, in configuration order.
        rule_ids: Vec<String>,
    },
    /// A parameter that is present but unusable; its default applies.
    InvalidParameter {
        /// The rule identifier.
        rule_id: String,
        /// The rule name.
        rule_name: String,
        /// What is wrong with the parameter.
        reason: String,
    },
}

impl std::fmt::Display for RuleConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedTimingWindow {
                rule_id,
                rule_name,
                min_minutes,
                max_minutes,
            } => write!(
                f,
                "Rule '{rule_name}' ({rule_id}) has min_minutes {min_minutes} greater than max_minutes {max_minutes}"
            ),
            Self::InertRule {
                rule_id,
                rule_name,
                rule_type,
            } => write!(
                f,
                "Rule '{rule_name}' ({rule_id}) of type '{rule_type}' is not recognized and will never produce violations"
            ),
            Self::SharedPriority { priority, rule_ids } => write!(
                f,
                "Rules {} share priority {priority} and run in configuration order",
                rule_ids.join(", ")
            ),
            Self::InvalidParameter {
                rule_id,
                rule_name,
                reason,
            } => write!(f, "Rule '{rule_name}' ({rule_id}): {reason}"),
        }
    }
}

/// Checks a rule set for configuration problems.
///
/// Per-rule issues are reported in configuration order, followed by shared
/// priorities among active rules in ascending priority order.
#[must_use]
pub fn lint_rules(rules: &[BreakScheduleRule]) -> Vec<RuleConfigIssue> {
    let mut issues: Vec<RuleConfigIssue> = Vec::new();

    for rule in rules {
        for err in rule.parameter_errors() {
            issues.push(RuleConfigIssue::InvalidParameter {
                rule_id: rule.id.clone(),
                rule_name: rule.rule_name.clone(),
                reason: err.to_string(),
            });
        }

        match rule.kind_quiet() {
            RuleKind::Timing(window) if window.is_inverted() => {
                issues.push(RuleConfigIssue::InvertedTimingWindow {
                    rule_id: rule.id.clone(),
                    rule_name: rule.rule_name.clone(),
                    min_minutes: window.min_minutes,
                    max_minutes: window.max_minutes,
                });
            }
            RuleKind::Inert => issues.push(RuleConfigIssue::InertRule {
                rule_id: rule.id.clone(),
                rule_name: rule.rule_name.clone(),
                rule_type: rule.rule_type.to_string(),
            }),
            _ => {}
        }
    }

    let mut by_priority: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for rule in rules.iter().filter(|r| r.is_active) {
        by_priority
            .entry(rule.priority)
            .or_default()
            .push(rule.id.clone());
    }
    for (priority, rule_ids) in by_priority {
        if rule_ids.len() > 1 {
            issues.push(RuleConfigIssue::SharedPriority { priority, rule_ids });
        }
    }

    issues
}
