// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by the domain layer.
///
/// These describe malformed input only. Business-rule breaches are never
/// errors; they are returned as `ValidationViolation` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A time-of-day string could not be parsed as `HH:MM[:SS]`.
    #[error("Invalid time '{value}': {reason}")]
    InvalidTime {
        /// The offending input.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
    /// A break type code was not one of `HB1`, `B`, `HB2`, `IN`.
    #[error("Invalid break type: {0}")]
    InvalidBreakType(String),
}
