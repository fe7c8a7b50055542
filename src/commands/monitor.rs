//! Link monitor command handler.
//!
//! Validates the arguments, resolves the target and runs the dashboard.
//! Everything that can fail before the dashboard starts is fatal.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::MonitorConfig;
use crate::core::resolver::resolve_target;
use crate::ui::status_tui::run_status_app;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = MonitorConfig::from_matches(matches).context("Invalid arguments")?;

    // Resolve before touching the terminal so errors stay readable
    let target = resolve_target(&config).context("Address resolution failed")?;

    run_status_app(target, config.interval()).context("Failed to run link monitor")
}
