//! The probe-render loop.
//!
//! One cycle probes the target, records the outcome, redraws the screen and
//! then waits for the configured interval. The wait may be cut short by a
//! terminal resize, in which case the screen is fully redrawn and the whole
//! interval starts over.

use std::time::Duration;

use chrono::Local;

use crate::core::probe::{Probe, PROBE_TIMEOUT};
use crate::core::resize::ResizeSignal;
use crate::core::resolver::Target;
use crate::core::state::MonitorState;
use crate::error::Result;

/// How much of the display a redraw may reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    /// Only the banner and footer rows change
    Incremental,
    /// Geometry changed: rebuild the whole display surface
    Full,
}

/// Something that can show the monitor state.
pub trait Screen {
    fn draw(&mut self, state: &MonitorState, target: &Target, mode: RedrawMode) -> Result<()>;
}

/// Why a wait returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitEvent {
    /// The full timeout passed
    Elapsed,
    /// Woken early, e.g. by a resize notification
    Interrupted,
    /// The user asked to leave
    Quit,
}

/// Blocking, interruptible wait between probe cycles.
pub trait Waiter {
    fn wait(&mut self, timeout: Duration) -> Result<WaitEvent>;
}

/// Whether the loop keeps going after an idle period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Monitor<P, S, W> {
    target: Target,
    interval: Duration,
    probe: P,
    screen: S,
    waiter: W,
    resize: ResizeSignal,
    state: MonitorState,
    cycles: u64,
}

impl<P: Probe, S: Screen, W: Waiter> Monitor<P, S, W> {
    pub fn new(
        target: Target,
        interval: Duration,
        probe: P,
        screen: S,
        waiter: W,
        resize: ResizeSignal,
    ) -> Self {
        Self {
            target,
            interval,
            probe,
            screen,
            waiter,
            resize,
            state: MonitorState::new(),
            cycles: 0,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Number of completed probe cycles
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run until the waiter reports a quit request.
    ///
    /// Only display failures end the loop with an error; probe failures show
    /// up as the `Error` status.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Monitor loop started for {}", self.target.address);
        self.redraw()?;

        loop {
            self.run_cycle()?;
            if self.idle()? == Flow::Quit {
                log::info!("Monitor loop stopped after {} cycles", self.cycles);
                return Ok(());
            }
        }
    }

    /// Probe once, record the outcome and redraw.
    pub fn run_cycle(&mut self) -> Result<()> {
        let outcome = self.probe.probe(&self.target.address, PROBE_TIMEOUT);
        self.state.record(outcome, Local::now());
        self.cycles += 1;
        log::debug!("Cycle {}: {:?}", self.cycles, self.state.status);
        self.redraw()
    }

    /// Wait out one interval, redrawing whenever a resize interrupts it.
    ///
    /// An interruption restarts the full interval rather than the remainder.
    pub fn idle(&mut self) -> Result<Flow> {
        loop {
            match self.waiter.wait(self.interval)? {
                WaitEvent::Elapsed => return Ok(Flow::Continue),
                WaitEvent::Quit => return Ok(Flow::Quit),
                WaitEvent::Interrupted => {
                    if self.resize.is_pending() {
                        self.redraw()?;
                    }
                }
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let mode = if self.resize.take() {
            RedrawMode::Full
        } else {
            RedrawMode::Incremental
        };
        log::trace!("Redraw ({:?})", mode);
        self.screen.draw(&self.state, &self.target, mode)
    }
}
