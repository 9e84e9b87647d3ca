// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Classification of a single 15-minute scheduling slot.
///
/// `In` marks normal work time and is ignored by every break-specific check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BreakType {
    /// First half break, a single interval before the full break.
    #[serde(rename = "HB1")]
    Hb1,
    /// Full break, two consecutive intervals.
    #[serde(rename = "B")]
    B,
    /// Second half break, a single interval after the full break.
    #[serde(rename = "HB2")]
    Hb2,
    /// In normal work, not a break.
    #[serde(rename = "IN")]
    In,
}

impl BreakType {
    /// The three break kinds, in the order they must occur within a shift.
    pub const BREAKS: [Self; 3] = [Self::Hb1, Self::B, Self::Hb2];

    /// Parses a break type from its wire code.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `HB1`, `B`, `HB2`, `IN`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "HB1" => Ok(Self::Hb1),
            "B" => Ok(Self::B),
            "HB2" => Ok(Self::Hb2),
            "IN" => Ok(Self::In),
            _ => Err(DomainError::InvalidBreakType(s.to_string())),
        }
    }

    /// Returns the wire code of this break type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hb1 => "HB1",
            Self::B => "B",
            Self::Hb2 => "HB2",
            Self::In => "IN",
        }
    }

    /// Returns whether this slot is a break rather than normal work.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        !matches!(self, Self::In)
    }
}

impl FromStr for BreakType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BreakType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled 15-minute slot for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// Slot start as a time-of-day string (`HH:MM` or `HH:MM:SS`).
    pub interval_start: String,
    /// What the agent is doing during this slot.
    pub break_type: BreakType,
}

impl BreakInterval {
    /// Creates a new interval.
    #[must_use]
    pub fn new(interval_start: &str, break_type: BreakType) -> Self {
        Self {
            interval_start: interval_start.to_string(),
            break_type,
        }
    }
}

/// The first start time of each break kind found in an interval list.
///
/// Computed fresh on every validation call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedBreaks {
    /// First half break start (`HH:MM`).
    #[serde(rename = "HB1")]
    pub hb1: Option<String>,
    /// Full break start (`HH:MM`).
    #[serde(rename = "B")]
    pub b: Option<String>,
    /// Second half break start (`HH:MM`).
    #[serde(rename = "HB2")]
    pub hb2: Option<String>,
}

impl ExtractedBreaks {
    /// Returns the recorded start time for a break kind.
    ///
    /// Always `None` for `BreakType::In`.
    #[must_use]
    pub fn get(&self, break_type: BreakType) -> Option<&str> {
        match break_type {
            BreakType::Hb1 => self.hb1.as_deref(),
            BreakType::B => self.b.as_deref(),
            BreakType::Hb2 => self.hb2.as_deref(),
            BreakType::In => None,
        }
    }

    /// Returns whether no break kind was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hb1.is_none() && self.b.is_none() && self.hb2.is_none()
    }
}

/// Identifies the shift an agent works on a given day (e.g. `AM`, `PM`, `OFF`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftType(String);

impl ShiftType {
    /// The shift code used for days off.
    pub const OFF: &'static str = "OFF";

    /// Creates a new `ShiftType`.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Returns the shift code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Working hours of a shift. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHours {
    /// Shift start (`HH:MM`).
    pub start: String,
    /// Shift end (`HH:MM`), exclusive.
    pub end: String,
}

impl ShiftHours {
    /// Creates a new shift window.
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Read-only lookup from shift type to working hours.
///
/// A shift type mapped to `None` (such as `OFF`) or missing entirely has no
/// hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftHoursMap {
    entries: BTreeMap<String, Option<ShiftHours>>,
}

impl ShiftHoursMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the hours for a shift type.
    pub fn insert(&mut self, shift_type: &ShiftType, hours: Option<ShiftHours>) {
        self.entries.insert(shift_type.value().to_string(), hours);
    }

    /// Builder-style variant of `insert` for a shift with hours.
    #[must_use]
    pub fn with_hours(mut self, shift_type: &str, start: &str, end: &str) -> Self {
        self.insert(&ShiftType::new(shift_type), Some(ShiftHours::new(start, end)));
        self
    }

    /// Builder-style variant of `insert` for a shift without hours.
    #[must_use]
    pub fn without_hours(mut self, shift_type: &str) -> Self {
        self.insert(&ShiftType::new(shift_type), None);
        self
    }

    /// Looks up the hours for a shift type.
    #[must_use]
    pub fn hours_for(&self, shift_type: &ShiftType) -> Option<&ShiftHours> {
        self.entries
            .get(shift_type.value())
            .and_then(Option::as_ref)
    }
}

/// Another agent's already-committed break schedule for the same date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingSchedule {
    /// The sibling agent's identifier.
    pub user_id: String,
    /// Interval start time to slot classification.
    pub intervals: BTreeMap<String, BreakType>,
}

impl SiblingSchedule {
    /// Creates a sibling schedule from `(time, type)` pairs.
    #[must_use]
    pub fn new(user_id: &str, intervals: &[(&str, BreakType)]) -> Self {
        Self {
            user_id: user_id.to_string(),
            intervals: intervals
                .iter()
                .map(|(time, break_type)| ((*time).to_string(), *break_type))
                .collect(),
        }
    }
}

/// A proposed break arrangement for one agent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakScheduleUpdateRequest {
    /// The agent whose schedule is being changed.
    pub agent_id: String,
    /// The schedule date (ISO 8601 date string).
    pub date: String,
    /// The candidate intervals, in any order.
    pub intervals: Vec<BreakInterval>,
}

impl BreakScheduleUpdateRequest {
    /// Creates a new update request.
    #[must_use]
    pub fn new(agent_id: &str, date: &str, intervals: Vec<BreakInterval>) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            date: date.to_string(),
            intervals,
        }
    }
}
