// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Break schedule rule descriptors.
//!
//! Rules are configured by administrators and stored outside this crate. A
//! descriptor is stringly typed on the wire (`rule_type` plus `rule_name`);
//! `BreakScheduleRule::kind` resolves it into a `RuleKind` so that dispatch is
//! an exhaustive match.

use crate::parameters::{
    self, APPLIES_TO, MAX_MINUTES, MIN_INTERVALS, MIN_MINUTES, ParameterError,
};
use breakplan_domain::{
    BreakType, DEFAULT_MAX_GAP_MINUTES, DEFAULT_MIN_GAP_MINUTES, DEFAULT_MIN_SPACING_INTERVALS,
    Severity, SpacingPolicy, TimingWindow, rule_names,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Category of a configured rule.
///
/// Unknown categories are preserved verbatim so that new rule kinds added by
/// administrators stay inert instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    /// Break ordering rules.
    Ordering,
    /// Gap, shift boundary and duration rules.
    Timing,
    /// Cross-agent rules.
    Coverage,
    /// Auto-distribution rules; never produce validation violations.
    Distribution,
    /// A category this engine does not know.
    Unrecognized(String),
}

impl RuleType {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ordering => "ordering",
            Self::Timing => "timing",
            Self::Coverage => "coverage",
            Self::Distribution => "distribution",
            Self::Unrecognized(other) => other,
        }
    }
}

impl From<String> for RuleType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ordering" => Self::Ordering,
            "timing" => Self::Timing,
            "coverage" => Self::Coverage,
            "distribution" => Self::Distribution,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        match value {
            RuleType::Unrecognized(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule descriptor resolved to the evaluator it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// HB1 before B before HB2.
    Ordering,
    /// Gap between adjacent breaks, both sides of the window.
    Timing(TimingWindow),
    /// Breaks must fall inside the agent's shift hours.
    ShiftBoundary,
    /// The full break spans two consecutive intervals.
    FullBreakDuration,
    /// Minimum spacing from other agents' breaks.
    CoverageSpacing(SpacingPolicy),
    /// Governs auto-distribution only.
    Distribution,
    /// Not recognized by this engine.
    Inert,
}

/// A configured break schedule rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakScheduleRule {
    /// Identifier assigned by the configuration store.
    pub id: String,
    /// Rule name, e.g. `minimum_gap`.
    pub rule_name: String,
    /// Rule category.
    pub rule_type: RuleType,
    /// Free-form parameters.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Inactive rules are never evaluated.
    pub is_active: bool,
    /// Whether violations of this rule block a save.
    pub is_blocking: bool,
    /// Evaluation order; lower runs first.
    pub priority: i32,
}

impl BreakScheduleRule {
    /// Creates an active, blocking rule with no parameters.
    #[must_use]
    pub fn new(id: &str, rule_name: &str, rule_type: RuleType, priority: i32) -> Self {
        Self {
            id: id.to_string(),
            rule_name: rule_name.to_string(),
            rule_type,
            parameters: Map::new(),
            is_active: true,
            is_blocking: true,
            priority,
        }
    }

    /// Sets the blocking flag.
    #[must_use]
    pub fn blocking(mut self, is_blocking: bool) -> Self {
        self.is_blocking = is_blocking;
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: &str, value: Value) -> Self {
        self.parameters.insert(key.to_string(), value);
        self
    }

    /// The severity stamped on every violation this rule produces.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::from_blocking(self.is_blocking)
    }

    /// Resolves this descriptor into the evaluator it drives.
    ///
    /// Unusable parameters fall back to their defaults and are logged; use
    /// `lint_rules` to surface them to administrators.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.resolve(true)
    }

    /// Like `kind`, without logging parameter fallbacks.
    pub(crate) fn kind_quiet(&self) -> RuleKind {
        self.resolve(false)
    }

    fn resolve(&self, log_fallbacks: bool) -> RuleKind {
        match (&self.rule_type, self.rule_name.as_str()) {
            (RuleType::Ordering, _) => RuleKind::Ordering,
            (RuleType::Timing, rule_names::MINIMUM_GAP | rule_names::MAXIMUM_GAP) => {
                RuleKind::Timing(self.timing_window(log_fallbacks))
            }
            (RuleType::Timing, rule_names::SHIFT_BOUNDARY) => RuleKind::ShiftBoundary,
            (RuleType::Timing, rule_names::FULL_BREAK_DURATION) => RuleKind::FullBreakDuration,
            (RuleType::Coverage, rule_names::MINIMUM_BREAK_SPACING) => {
                RuleKind::CoverageSpacing(self.spacing_policy(log_fallbacks))
            }
            (RuleType::Distribution, _) => RuleKind::Distribution,
            (RuleType::Timing | RuleType::Coverage | RuleType::Unrecognized(_), _) => {
                RuleKind::Inert
            }
        }
    }

    /// Every parameter problem on this rule, in key order.
    #[must_use]
    pub fn parameter_errors(&self) -> Vec<ParameterError> {
        let mut errors: Vec<ParameterError> = Vec::new();
        for key in [MIN_MINUTES, MAX_MINUTES, MIN_INTERVALS] {
            if let Err(err) = parameters::non_negative_integer(&self.parameters, key) {
                errors.push(err);
            }
        }
        if let Err(err) = parameters::break_types(&self.parameters, APPLIES_TO) {
            errors.push(err);
        }
        errors
    }

    fn timing_window(&self, log_fallbacks: bool) -> TimingWindow {
        TimingWindow::new(
            self.integer_or(MIN_MINUTES, DEFAULT_MIN_GAP_MINUTES, log_fallbacks),
            self.integer_or(MAX_MINUTES, DEFAULT_MAX_GAP_MINUTES, log_fallbacks),
        )
    }

    fn spacing_policy(&self, log_fallbacks: bool) -> SpacingPolicy {
        let applies_to: Vec<BreakType> =
            match parameters::break_types(&self.parameters, APPLIES_TO) {
                Ok(Some(types)) => types,
                Ok(None) => BreakType::BREAKS.to_vec(),
                Err(err) => {
                    if log_fallbacks {
                        warn!(rule = %self.rule_name, "{err}; using all break types");
                    }
                    BreakType::BREAKS.to_vec()
                }
            };

        SpacingPolicy {
            min_intervals: self.integer_or(
                MIN_INTERVALS,
                DEFAULT_MIN_SPACING_INTERVALS,
                log_fallbacks,
            ),
            applies_to,
        }
    }

    fn integer_or(&self, key: &str, default: i32, log_fallbacks: bool) -> i32 {
        match parameters::non_negative_integer(&self.parameters, key) {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                if log_fallbacks {
                    warn!(rule = %self.rule_name, "{err}; using default {default}");
                }
                default
            }
        }
    }
}
