// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BreakScheduleRule, RuleType};
use breakplan_domain::{BreakInterval, BreakScheduleUpdateRequest, BreakType, ShiftHoursMap};
use std::io;
use std::sync::{Arc, Mutex};

pub fn create_request(intervals: &[(&str, BreakType)]) -> BreakScheduleUpdateRequest {
    BreakScheduleUpdateRequest::new(
        "agent-1",
        "2026-03-02",
        intervals
            .iter()
            .map(|(at, break_type)| BreakInterval::new(at, *break_type))
            .collect(),
    )
}

/// HB1 10:00, B 12:00-12:30, HB2 14:00.
pub fn create_standard_request() -> BreakScheduleUpdateRequest {
    create_request(&[
        ("10:00:00", BreakType::Hb1),
        ("12:00:00", BreakType::B),
        ("12:15:00", BreakType::B),
        ("14:00:00", BreakType::Hb2),
    ])
}

/// HB1 14:00, B 12:00, HB2 10:00.
pub fn create_reversed_request() -> BreakScheduleUpdateRequest {
    create_request(&[
        ("14:00:00", BreakType::Hb1),
        ("12:00:00", BreakType::B),
        ("10:00:00", BreakType::Hb2),
    ])
}

pub fn create_shift_hours() -> ShiftHoursMap {
    ShiftHoursMap::new()
        .with_hours("AM", "09:00", "17:00")
        .with_hours("PM", "13:00", "21:00")
        .without_hours("OFF")
}

pub fn create_rule(id: &str, rule_name: &str, rule_type: RuleType, priority: i32) -> BreakScheduleRule {
    BreakScheduleRule::new(id, rule_name, rule_type, priority)
}

pub fn create_ordering_rule(priority: i32) -> BreakScheduleRule {
    create_rule("rule-ordering", "break_ordering", RuleType::Ordering, priority)
}

/// Log sink shared between a test and its subscriber.
#[derive(Debug, Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber that records every event, returning its
/// result and the formatted log output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs: CapturedLogs = CapturedLogs::default();
    let writer: CapturedLogs = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result: T = tracing::subscriber::with_default(subscriber, f);
    let output: String = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    (result, output)
}
