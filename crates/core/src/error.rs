// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use breakplan_domain::{DomainError, ValidationViolation};
use thiserror::Error;

/// Errors that can occur while validating or applying a break schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input could not be interpreted (e.g. an unparsable time).
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The schedule breaches at least one blocking rule and must not be saved.
    #[error("Break schedule rejected: {} blocking violation(s)", .blocking.len())]
    BlockingViolations {
        /// The `error`-severity violations that caused the rejection.
        blocking: Vec<ValidationViolation>,
        /// Every violation found, blocking and advisory, in priority order.
        all: Vec<ValidationViolation>,
    },
}
