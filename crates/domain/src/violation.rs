// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Violation records produced by the break rule evaluators.

use serde::{Deserialize, Serialize};

/// Rule names stamped on violations by the built-in evaluators.
pub mod rule_names {
    /// Break ordering (HB1 before B before HB2).
    pub const BREAK_ORDERING: &str = "break_ordering";
    /// Gap between adjacent breaks is too short.
    pub const MINIMUM_GAP: &str = "minimum_gap";
    /// Gap between adjacent breaks is too long.
    pub const MAXIMUM_GAP: &str = "maximum_gap";
    /// Break falls outside the agent's shift.
    pub const SHIFT_BOUNDARY: &str = "shift_boundary";
    /// Full break does not span two consecutive intervals.
    pub const FULL_BREAK_DURATION: &str = "full_break_duration";
    /// Break is too close to another agent's break of the same kind.
    pub const MINIMUM_BREAK_SPACING: &str = "minimum_break_spacing";
}

/// How a violation affects a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the save.
    Error,
    /// Advisory only.
    Warning,
}

impl Severity {
    /// Maps a rule's blocking flag onto a severity.
    #[must_use]
    pub const fn from_blocking(is_blocking: bool) -> Self {
        if is_blocking {
            Self::Error
        } else {
            Self::Warning
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Returns whether this severity blocks a save.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule breach.
///
/// Two violations are considered the same finding when `rule_name` and
/// `message` match; `affected_intervals` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// Name of the rule that produced this violation.
    pub rule_name: String,
    /// Human-readable description.
    pub message: String,
    /// Whether the breach blocks saving.
    pub severity: Severity,
    /// Interval start times involved, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_intervals: Option<Vec<String>>,
}

impl ValidationViolation {
    /// Creates a violation with no affected intervals.
    #[must_use]
    pub fn new(rule_name: &str, message: String, severity: Severity) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            message,
            severity,
            affected_intervals: None,
        }
    }

    /// Attaches the interval start times involved in the breach.
    #[must_use]
    pub fn with_affected_intervals(mut self, intervals: Vec<String>) -> Self {
        self.affected_intervals = Some(intervals);
        self
    }

    /// Replaces the provisional severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns whether this violation blocks a save.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }
}
