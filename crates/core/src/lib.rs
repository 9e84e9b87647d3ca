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

mod dispatch;
mod error;
mod lint;
pub mod parameters;
mod rule;
mod update;
mod validate;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use dispatch::{ValidationContext, dispatch_rule};
pub use error::CoreError;
pub use lint::{RuleConfigIssue, lint_rules};
pub use parameters::ParameterError;
pub use rule::{BreakScheduleRule, RuleKind, RuleType};
pub use update::{AcceptedUpdate, apply_break_schedule_update};
pub use validate::{
    RuleViolations, deduplicate_violations, get_rule_violations, validate_against_rules,
};
