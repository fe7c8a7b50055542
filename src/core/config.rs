use clap::ArgMatches;
use std::time::Duration;

use crate::error::{LinkstatError, Result};

/// Target probed when none is given on the command line
pub const DEFAULT_TARGET: &str = "127.0.0.1";

/// Seconds between the end of one probe and the start of the next
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// The interval label shares the footer with the probe time, so it is capped.
pub const MAX_INTERVAL_LABEL_LEN: usize = 20;

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Hostname or literal address as typed by the user
    pub target: String,
    /// Restrict resolution to IPv6 (`-6`)
    pub prefer_ipv6: bool,
    pub interval_secs: u64,
    /// Human readable interval, e.g. `5s`
    pub interval_label: String,
}

impl MonitorConfig {
    pub fn new(target: impl Into<String>, prefer_ipv6: bool, interval_secs: u64) -> Result<Self> {
        if interval_secs < 1 {
            return Err(LinkstatError::config(format!(
                "interval must be at least 1 second, got {}",
                interval_secs
            )));
        }

        let interval_label = format_interval_label(interval_secs);
        if interval_label.len() > MAX_INTERVAL_LABEL_LEN {
            return Err(LinkstatError::config(format!(
                "interval label '{}' is longer than {} characters",
                interval_label, MAX_INTERVAL_LABEL_LEN
            )));
        }

        let target = target.into();
        if target.trim().is_empty() {
            return Err(LinkstatError::config("target must not be empty"));
        }

        Ok(Self {
            target,
            prefer_ipv6,
            interval_secs,
            interval_label,
        })
    }

    /// Build the configuration from the matches produced by `commands::build_cli`.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let target = matches
            .get_one::<String>("target")
            .map(String::as_str)
            .unwrap_or(DEFAULT_TARGET);
        let prefer_ipv6 = matches.get_flag("ipv6");
        let interval_secs = matches
            .get_one::<u64>("interval")
            .copied()
            .unwrap_or(DEFAULT_INTERVAL_SECS);

        Self::new(target, prefer_ipv6, interval_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            prefer_ipv6: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
            interval_label: format_interval_label(DEFAULT_INTERVAL_SECS),
        }
    }
}

/// Format an interval in seconds the way the footer shows it
pub fn format_interval_label(secs: u64) -> String {
    format!("{}s", secs)
}
