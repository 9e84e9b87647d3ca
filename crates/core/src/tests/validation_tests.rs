// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_ordering_rule, create_request, create_reversed_request, create_rule,
    create_shift_hours, create_standard_request,
};
use crate::{
    BreakScheduleRule, CoreError, RuleType, RuleViolations, ValidationContext,
    deduplicate_violations, get_rule_violations, validate_against_rules,
};
use breakplan_domain::{
    BreakScheduleUpdateRequest, BreakType, Severity, ShiftHoursMap, ShiftType, SiblingSchedule,
    ValidationViolation, rule_names,
};

fn create_violation(rule_name: &str, message: &str, severity: Severity) -> ValidationViolation {
    ValidationViolation::new(rule_name, message.to_string(), severity)
}

#[test]
fn test_valid_schedule_has_no_violations() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1)];

    let result: RuleViolations =
        get_rule_violations(&create_standard_request(), &rules, &context).unwrap();

    assert_eq!(
        result,
        RuleViolations {
            violations: Vec::new(),
            has_blocking_violations: false,
        }
    );
}

#[test]
fn test_reversed_schedule_is_blocked_by_ordering() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1)];

    let result: RuleViolations =
        get_rule_violations(&create_reversed_request(), &rules, &context).unwrap();

    assert!(result.has_blocking_violations);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule_name, rule_names::BREAK_ORDERING);
    assert_eq!(
        result.violations[0].message,
        "HB1 (14:00) must be scheduled before B (12:00)"
    );
    assert_eq!(result.violations[0].severity, Severity::Error);
}

#[test]
fn test_rules_run_in_priority_order() {
    let shift_type: ShiftType = ShiftType::new("PM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![
        create_rule("r3", "full_break_duration", RuleType::Timing, 3),
        create_ordering_rule(1),
        create_rule("r2", "shift_boundary", RuleType::Timing, 2),
    ];

    let violations: Vec<ValidationViolation> =
        validate_against_rules(&create_reversed_request(), &rules, &context).unwrap();
    let names: Vec<&str> = violations.iter().map(|v| v.rule_name.as_str()).collect();

    // PM starts at 13:00: B 12:00 and HB2 10:00 fall outside
    assert_eq!(
        names,
        vec![
            rule_names::BREAK_ORDERING,
            rule_names::SHIFT_BOUNDARY,
            rule_names::SHIFT_BOUNDARY,
            rule_names::FULL_BREAK_DURATION,
        ]
    );
}

#[test]
fn test_equal_priorities_keep_configuration_order() {
    let shift_type: ShiftType = ShiftType::new("PM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![
        create_rule("r1", "full_break_duration", RuleType::Timing, 5),
        create_ordering_rule(5),
    ];

    let violations: Vec<ValidationViolation> =
        validate_against_rules(&create_reversed_request(), &rules, &context).unwrap();

    assert_eq!(violations[0].rule_name, rule_names::FULL_BREAK_DURATION);
    assert_eq!(violations[1].rule_name, rule_names::BREAK_ORDERING);
}

#[test]
fn test_inactive_rules_are_skipped() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1).active(false)];

    let result: RuleViolations =
        get_rule_violations(&create_reversed_request(), &rules, &context).unwrap();

    assert!(result.violations.is_empty());
    assert!(!result.has_blocking_violations);
}

#[test]
fn test_empty_rule_set_accepts_anything() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);

    let result: RuleViolations =
        get_rule_violations(&create_reversed_request(), &[], &context).unwrap();

    assert!(result.violations.is_empty());
    assert!(!result.has_blocking_violations);
}

#[test]
fn test_warnings_alone_do_not_block() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1).blocking(false)];

    let result: RuleViolations =
        get_rule_violations(&create_reversed_request(), &rules, &context).unwrap();

    assert_eq!(result.violations.len(), 1);
    assert!(!result.has_blocking_violations);
    assert_eq!(result.warnings().len(), 1);
    assert!(result.blocking().is_empty());
}

#[test]
fn test_duplicated_rule_does_not_duplicate_violations() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1), create_ordering_rule(2)];

    let raw: Vec<ValidationViolation> =
        validate_against_rules(&create_reversed_request(), &rules, &context).unwrap();
    assert_eq!(raw.len(), 2);

    let result: RuleViolations =
        get_rule_violations(&create_reversed_request(), &rules, &context).unwrap();
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    let violations: Vec<ValidationViolation> = vec![
        create_violation("break_ordering", "same", Severity::Warning),
        create_violation("minimum_gap", "same", Severity::Error),
        create_violation("break_ordering", "same", Severity::Error),
        create_violation("break_ordering", "other", Severity::Error),
    ];

    let deduped: Vec<ValidationViolation> = deduplicate_violations(violations);

    assert_eq!(deduped.len(), 3);
    assert_eq!(deduped[0].severity, Severity::Warning);
    assert_eq!(deduped[1].rule_name, "minimum_gap");
    assert_eq!(deduped[2].message, "other");
}

#[test]
fn test_deduplicate_is_idempotent() {
    let violations: Vec<ValidationViolation> = vec![
        create_violation("a", "x", Severity::Error),
        create_violation("a", "x", Severity::Error),
        create_violation("b", "x", Severity::Warning),
    ];

    let once: Vec<ValidationViolation> = deduplicate_violations(violations);
    let twice: Vec<ValidationViolation> = deduplicate_violations(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_result_serializes_for_clients() {
    let result: RuleViolations = RuleViolations::from_violations(vec![create_violation(
        "break_ordering",
        "HB1 (14:00) must be scheduled before B (12:00)",
        Severity::Error,
    )]);

    let value: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["has_blocking_violations"], true);
    assert_eq!(value["violations"][0]["severity"], "error");
    assert_eq!(value["violations"][0]["rule_name"], "break_ordering");
}

#[test]
fn test_malformed_time_aborts_validation() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let context: ValidationContext<'_> = ValidationContext::new(&shift_type, &shift_hours);
    let request: BreakScheduleUpdateRequest =
        create_request(&[("25:99", BreakType::Hb1), ("12:00", BreakType::B)]);
    let rules: Vec<BreakScheduleRule> = vec![create_ordering_rule(1)];

    let result: Result<RuleViolations, CoreError> =
        get_rule_violations(&request, &rules, &context);

    assert!(matches!(result, Err(CoreError::DomainViolation(_))));
}

#[test]
fn test_blocking_coverage_rule_does_not_block_save() {
    let shift_type: ShiftType = ShiftType::new("AM");
    let shift_hours: ShiftHoursMap = create_shift_hours();
    let siblings: Vec<SiblingSchedule> =
        vec![SiblingSchedule::new("agent-2", &[("10:10:00", BreakType::Hb1)])];
    let context: ValidationContext<'_> =
        ValidationContext::new(&shift_type, &shift_hours).with_siblings(&siblings);
    let rules: Vec<BreakScheduleRule> = vec![
        create_ordering_rule(1),
        create_rule("r2", "minimum_break_spacing", RuleType::Coverage, 2),
    ];

    let result: RuleViolations =
        get_rule_violations(&create_standard_request(), &rules, &context).unwrap();

    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        result.violations[0].rule_name,
        rule_names::MINIMUM_BREAK_SPACING
    );
    assert!(!result.has_blocking_violations);
}
