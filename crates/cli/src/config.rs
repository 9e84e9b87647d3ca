// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of the engine configuration and request documents.
//!
//! The engine configuration bundles what a deployment would otherwise read
//! from its configuration store: shift working hours and the rule set.

use breakplan::BreakScheduleRule;
use breakplan_domain::{BreakScheduleUpdateRequest, ShiftHoursMap, SiblingSchedule};
use color_eyre::{Result, eyre::Context};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Shift hours and rules, as stored by the configuration service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Working hours per shift type.
    #[serde(default)]
    pub shift_hours: ShiftHoursMap,
    /// The configured rule set, active and inactive.
    #[serde(default)]
    pub rules: Vec<BreakScheduleRule>,
}

impl EngineConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("Invalid engine configuration")
    }

    /// Reads a configuration document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = read_json(path)?;
        debug!(
            path = %path.display(),
            rules = config.rules.len(),
            "Loaded engine configuration"
        );
        Ok(config)
    }
}

/// Reads a break schedule update request from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_request(path: &Path) -> Result<BreakScheduleUpdateRequest> {
    read_json(path)
}

/// Reads sibling schedules from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_siblings(path: &Path) -> Result<Vec<SiblingSchedule>> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}
