// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # breakplan
//!
//! Validates a proposed break schedule against a configured rule set, or
//! checks a rule set for configuration problems.
//!
//! - `breakplan validate` prints the violations as JSON and exits with status
//!   1 when any of them blocks the save
//! - `breakplan lint-rules` prints one line per issue and exits with status 1
//!   when any issue is found

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;

use breakplan::{
    RuleConfigIssue, RuleViolations, ValidationContext, get_rule_violations, lint_rules,
};
use breakplan_domain::{BreakScheduleUpdateRequest, ShiftType, SiblingSchedule};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use config::{EngineConfig, load_request, load_siblings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(err) => {
            tracing::error!("{err:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Breakplan - break schedule rule validation
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<bool> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Validate a break schedule update request
    #[command(visible_alias = "v")]
    Validate {
        /// Engine configuration (shift hours and rules)
        #[arg(short, long)]
        config: PathBuf,

        /// The break schedule update request
        #[arg(short, long)]
        request: PathBuf,

        /// The agent's shift type on the request date, e.g. `AM`
        #[arg(short, long)]
        shift_type: String,

        /// Other agents' schedules for the same date; enables coverage rules
        #[arg(long)]
        siblings: Option<PathBuf>,
    },

    /// Check a rule set for configuration problems
    #[command(visible_alias = "l")]
    LintRules {
        /// Engine configuration (shift hours and rules)
        #[arg(short, long)]
        config: PathBuf,
    },
}

impl Command {
    /// Runs the command, returning whether it passed.
    fn run(self) -> Result<bool> {
        match self {
            Self::Validate {
                config,
                request,
                shift_type,
                siblings,
            } => {
                let config: EngineConfig = EngineConfig::load(&config)?;
                let request: BreakScheduleUpdateRequest = load_request(&request)?;
                let siblings: Option<Vec<SiblingSchedule>> =
                    siblings.as_deref().map(load_siblings).transpose()?;

                let result: RuleViolations = run_validate(
                    &config,
                    &request,
                    &ShiftType::new(&shift_type),
                    siblings.as_deref(),
                )?;
                println!("{}", serde_json::to_string_pretty(&result)?);

                if result.has_blocking_violations {
                    warn!(agent_id = %request.agent_id, "Break schedule has blocking violations");
                }
                Ok(!result.has_blocking_violations)
            }
            Self::LintRules { config } => {
                let config: EngineConfig = EngineConfig::load(&config)?;
                let issues: Vec<RuleConfigIssue> = lint_rules(&config.rules);
                for issue in &issues {
                    println!("{issue}");
                }
                info!(
                    rules = config.rules.len(),
                    issues = issues.len(),
                    "Checked rule configuration"
                );
                Ok(issues.is_empty())
            }
        }
    }
}

/// Validates a request against a loaded configuration.
fn run_validate(
    config: &EngineConfig,
    request: &BreakScheduleUpdateRequest,
    shift_type: &ShiftType,
    siblings: Option<&[SiblingSchedule]>,
) -> Result<RuleViolations> {
    let mut context: ValidationContext<'_> =
        ValidationContext::new(shift_type, &config.shift_hours);
    if let Some(siblings) = siblings {
        context = context.with_siblings(siblings);
    }

    Ok(get_rule_violations(request, &config.rules, &context)?)
}
