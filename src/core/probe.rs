//! Reachability probing.
//!
//! A probe runs exactly one check against the target and reports a tri-state
//! outcome. `Error` is reserved for infrastructure failures (the check could
//! not be run or did not finish normally); `Down` is only returned when the
//! probing mechanism itself gave a clean "unreachable" verdict.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use crate::core::resolver::AddressFamily;

/// Timeout handed to the probe mechanism for a single check
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Exit code meaning "the probe program could not be launched".
///
/// Kept outside the range `ping` itself uses (0, 1 and 2).
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 50;

/// Result of one reachability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Up,
    Down,
    Error,
}

/// A single-shot reachability check.
pub trait Probe {
    fn probe(&mut self, address: &str, timeout: Duration) -> ProbeOutcome;
}

/// Classify the exit code of a finished probe process.
///
/// `None` means the process did not exit normally (killed by a signal).
pub fn classify_exit_code(code: Option<i32>) -> ProbeOutcome {
    match code {
        Some(0) => ProbeOutcome::Up,
        Some(LAUNCH_FAILURE_EXIT_CODE) => ProbeOutcome::Error,
        Some(_) => ProbeOutcome::Down,
        None => ProbeOutcome::Error,
    }
}

/// Classify the result of waiting on a probe process.
pub fn classify(wait_result: io::Result<ExitStatus>) -> ProbeOutcome {
    match wait_result {
        Ok(status) => classify_exit_code(status.code()),
        Err(e) => {
            log::debug!("Waiting on probe process failed: {}", e);
            ProbeOutcome::Error
        }
    }
}

/// Probe backed by one `ping -c 1` child process per check.
#[derive(Debug, Clone)]
pub struct PingProbe {
    program: String,
    family: AddressFamily,
}

impl PingProbe {
    pub fn new(family: AddressFamily) -> Self {
        Self::with_program("ping", family)
    }

    /// Use a different executable; it receives the same arguments as `ping`.
    pub fn with_program(program: impl Into<String>, family: AddressFamily) -> Self {
        Self {
            program: program.into(),
            family,
        }
    }

    /// Arguments for one echo request with a deadline of `timeout`
    pub fn args(&self, address: &str, timeout: Duration) -> Vec<String> {
        let deadline = timeout.as_secs().max(1);
        let mut args = Vec::with_capacity(6);
        if self.family == AddressFamily::V6 {
            args.push("-6".to_string());
        }
        args.extend([
            "-c".to_string(),
            "1".to_string(),
            "-w".to_string(),
            deadline.to_string(),
            address.to_string(),
        ]);
        args
    }
}

impl Probe for PingProbe {
    fn probe(&mut self, address: &str, timeout: Duration) -> ProbeOutcome {
        // The child's output would draw over the dashboard
        let spawned = Command::new(&self.program)
            .args(self.args(address, timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                log::debug!("Failed to launch '{}': {}", self.program, e);
                return ProbeOutcome::Error;
            }
        };

        let outcome = classify(child.wait());
        log::debug!("Probe of {} finished: {:?}", address, outcome);
        outcome
    }
}
