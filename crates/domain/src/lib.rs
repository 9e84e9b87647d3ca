// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod break_spacing;
mod break_time;
mod error;
mod extraction;
mod full_break;
mod ordering;
mod shift_boundary;
mod timing;
mod types;
mod violation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use types::{
    BreakInterval, BreakScheduleUpdateRequest, BreakType, ExtractedBreaks, ShiftHours,
    ShiftHoursMap, ShiftType, SiblingSchedule,
};
pub use violation::{Severity, ValidationViolation, rule_names};

pub use break_spacing::{DEFAULT_MIN_SPACING_INTERVALS, SpacingPolicy, validate_break_spacing};
pub use break_time::{INTERVAL_MINUTES, calculate_break_gap, time_to_minutes, truncate_to_minutes};
pub use extraction::extract_break_times;
pub use full_break::{FULL_BREAK_INTERVALS, validate_full_break_duration};
pub use ordering::validate_break_ordering;
pub use shift_boundary::validate_shift_boundary;
pub use timing::{
    DEFAULT_MAX_GAP_MINUTES, DEFAULT_MIN_GAP_MINUTES, TimingWindow, validate_break_timing,
};
