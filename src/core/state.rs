//! Mutable monitor state, updated once per probe cycle.

use chrono::{DateTime, Local};

use crate::core::probe::ProbeOutcome;

/// What the dashboard currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    /// No probe has completed yet
    #[default]
    Init,
    Up,
    Down,
    Error,
}

impl From<ProbeOutcome> for LinkStatus {
    fn from(outcome: ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Up => LinkStatus::Up,
            ProbeOutcome::Down => LinkStatus::Down,
            ProbeOutcome::Error => LinkStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    pub status: LinkStatus,
    /// Completion time of the most recent probe
    pub last_probe: Option<DateTime<Local>>,
    /// Completion time of the most recent probe that came back up
    pub last_success: Option<DateTime<Local>>,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a probe that completed at `at`.
    ///
    /// A wall clock stepping backwards never moves either timestamp back.
    pub fn record(&mut self, outcome: ProbeOutcome, at: DateTime<Local>) {
        let at = match self.last_probe {
            Some(prev) if prev > at => prev,
            _ => at,
        };

        self.last_probe = Some(at);
        self.status = outcome.into();

        if outcome == ProbeOutcome::Up {
            self.last_success = Some(at);
        }
    }
}
