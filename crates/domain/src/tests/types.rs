// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BreakInterval, BreakScheduleUpdateRequest, BreakType, ExtractedBreaks, Severity, ShiftHours,
    ShiftHoursMap, ShiftType, SiblingSchedule, ValidationViolation,
};

#[test]
fn test_break_type_parse_and_as_str_agree() {
    for code in ["HB1", "B", "HB2", "IN"] {
        let parsed: BreakType = code.parse().unwrap();
        assert_eq!(parsed.as_str(), code);
        assert_eq!(parsed.to_string(), code);
    }
}

#[test]
fn test_break_type_is_break() {
    assert!(BreakType::Hb1.is_break());
    assert!(BreakType::B.is_break());
    assert!(BreakType::Hb2.is_break());
    assert!(!BreakType::In.is_break());
}

#[test]
fn test_break_interval_deserializes_wire_format() {
    let json: &str = r#"{"interval_start":"10:00:00","break_type":"HB1"}"#;
    let interval: BreakInterval = serde_json::from_str(json).unwrap();

    assert_eq!(interval, BreakInterval::new("10:00:00", BreakType::Hb1));
}

#[test]
fn test_break_interval_rejects_unknown_break_type() {
    let json: &str = r#"{"interval_start":"10:00:00","break_type":"LUNCH"}"#;
    let result: Result<BreakInterval, serde_json::Error> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn test_extracted_breaks_serializes_with_break_codes() {
    let breaks: ExtractedBreaks = ExtractedBreaks {
        hb1: Some(String::from("10:00")),
        b: None,
        hb2: Some(String::from("14:00")),
    };

    let value: serde_json::Value = serde_json::to_value(&breaks).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"HB1": "10:00", "B": null, "HB2": "14:00"})
    );
}

#[test]
fn test_extracted_breaks_get_never_returns_in() {
    let breaks: ExtractedBreaks = ExtractedBreaks {
        hb1: Some(String::from("10:00")),
        b: Some(String::from("12:00")),
        hb2: Some(String::from("14:00")),
    };

    assert_eq!(breaks.get(BreakType::B), Some("12:00"));
    assert_eq!(breaks.get(BreakType::In), None);
    assert!(!breaks.is_empty());
    assert!(ExtractedBreaks::default().is_empty());
}

#[test]
fn test_shift_hours_map_deserializes_null_hours() {
    let json: &str = r#"{"AM":{"start":"09:00","end":"17:00"},"OFF":null}"#;
    let map: ShiftHoursMap = serde_json::from_str(json).unwrap();

    assert_eq!(
        map.hours_for(&ShiftType::new("AM")),
        Some(&ShiftHours::new("09:00", "17:00"))
    );
    assert_eq!(map.hours_for(&ShiftType::new(ShiftType::OFF)), None);
    assert_eq!(map.hours_for(&ShiftType::new("PM")), None);
}

#[test]
fn test_shift_hours_map_builders() {
    let map: ShiftHoursMap = ShiftHoursMap::new()
        .with_hours("AM", "09:00", "17:00")
        .without_hours("OFF");

    assert!(map.hours_for(&ShiftType::new("AM")).is_some());
    assert!(map.hours_for(&ShiftType::new("OFF")).is_none());
}

#[test]
fn test_sibling_schedule_deserializes_interval_record() {
    let json: &str = r#"{"user_id":"agent-7","intervals":{"10:00:00":"HB1","12:00:00":"B"}}"#;
    let sibling: SiblingSchedule = serde_json::from_str(json).unwrap();

    assert_eq!(
        sibling,
        SiblingSchedule::new(
            "agent-7",
            &[("10:00:00", BreakType::Hb1), ("12:00:00", BreakType::B)]
        )
    );
}

#[test]
fn test_update_request_round_trips_through_json() {
    let request: BreakScheduleUpdateRequest = BreakScheduleUpdateRequest::new(
        "agent-1",
        "2026-03-02",
        vec![BreakInterval::new("10:00", BreakType::Hb1)],
    );

    let json: String = serde_json::to_string(&request).unwrap();
    let parsed: BreakScheduleUpdateRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, request);
}

#[test]
fn test_severity_from_blocking_flag() {
    assert_eq!(Severity::from_blocking(true), Severity::Error);
    assert_eq!(Severity::from_blocking(false), Severity::Warning);
    assert!(Severity::Error.is_blocking());
    assert!(!Severity::Warning.is_blocking());
}

#[test]
fn test_violation_serialization_omits_missing_intervals() {
    let violation: ValidationViolation = ValidationViolation::new(
        "break_ordering",
        String::from("out of order"),
        Severity::Error,
    );

    let value: serde_json::Value = serde_json::to_value(&violation).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "rule_name": "break_ordering",
            "message": "out of order",
            "severity": "error"
        })
    );
}

#[test]
fn test_violation_with_severity_overrides_provisional_value() {
    let violation: ValidationViolation = ValidationViolation::new(
        "maximum_gap",
        String::from("too long"),
        Severity::Warning,
    )
    .with_severity(Severity::Error);

    assert!(violation.is_blocking());
}
