// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed access to a rule's free-form parameter map.
//!
//! Rule parameters are stored as JSON by the configuration store. Numbers may
//! arrive either as JSON numbers or as numeric strings. Each reader returns
//! `Ok(None)` when the key is absent and an error when the key is present but
//! unusable, so that callers can fall back to a default and the configuration
//! lint can still report the problem.

use breakplan_domain::BreakType;
use serde_json::{Map, Value};
use thiserror::Error;

/// Parameter key for the minimum gap between adjacent breaks.
pub const MIN_MINUTES: &str = "min_minutes";
/// Parameter key for the maximum gap between adjacent breaks.
pub const MAX_MINUTES: &str = "max_minutes";
/// Parameter key for the minimum cross-agent spacing.
pub const MIN_INTERVALS: &str = "min_intervals";
/// Parameter key for the break kinds a coverage rule applies to.
pub const APPLIES_TO: &str = "applies_to";

/// A parameter that is present but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The value is not a non-negative whole number.
    #[error("Parameter '{key}' must be a non-negative integer, got {value}")]
    NotAnInteger {
        /// The parameter key.
        key: String,
        /// The raw JSON value.
        value: String,
    },
    /// The value is not a list of break type codes.
    #[error("Parameter '{key}' must be a list of break types, got {value}")]
    NotABreakTypeList {
        /// The parameter key.
        key: String,
        /// The raw JSON value.
        value: String,
    },
    /// The list names a break kind that is not `HB1`, `B` or `HB2`.
    #[error("Parameter '{key}' names unknown break type '{value}'")]
    UnknownBreakType {
        /// The parameter key.
        key: String,
        /// The unrecognized entry.
        value: String,
    },
}

/// Reads a non-negative integer parameter.
///
/// # Errors
///
/// Returns an error if the key is present but not a non-negative integer that
/// fits in an `i32`.
pub fn non_negative_integer(
    parameters: &Map<String, Value>,
    key: &str,
) -> Result<Option<i32>, ParameterError> {
    let Some(value) = parameters.get(key) else {
        return Ok(None);
    };

    let parsed: Option<i64> = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .filter(|n| *n >= 0)
        .map(Some)
        .ok_or_else(|| ParameterError::NotAnInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Reads a list of break kinds.
///
/// Accepts a JSON array of codes or a single code string. `IN` is not a break
/// kind and is rejected.
///
/// # Errors
///
/// Returns an error if the value is not a string or array of strings, or if
/// any entry is not `HB1`, `B` or `HB2`.
pub fn break_types(
    parameters: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<BreakType>>, ParameterError> {
    let Some(value) = parameters.get(key) else {
        return Ok(None);
    };

    let not_a_list = || ParameterError::NotABreakTypeList {
        key: key.to_string(),
        value: value.to_string(),
    };

    let codes: Vec<&str> = match value {
        Value::String(code) => vec![code.as_str()],
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(not_a_list))
            .collect::<Result<_, _>>()?,
        _ => return Err(not_a_list()),
    };

    codes
        .into_iter()
        .map(|code| {
            BreakType::parse(code)
                .ok()
                .filter(BreakType::is_break)
                .ok_or_else(|| ParameterError::UnknownBreakType {
                    key: key.to_string(),
                    value: code.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
