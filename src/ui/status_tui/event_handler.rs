use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::monitor::{WaitEvent, Waiter};
use crate::core::resize::ResizeSignal;
use crate::error::Result;

/// Terminal events the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Quit the application
    Quit,
    /// Terminal geometry changed
    Resize,
    /// No action
    None,
}

/// Map a raw terminal event to a dashboard event
pub fn map_event(event: &Event) -> StatusEvent {
    match event {
        Event::Resize(_, _) => StatusEvent::Resize,
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => StatusEvent::Quit,
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                StatusEvent::Quit
            }
            _ => StatusEvent::None,
        },
        _ => StatusEvent::None,
    }
}

/// Longest single poll; longer waits are split into slices
pub const MAX_POLL_SLICE: Duration = Duration::from_secs(3600);

/// End of a wait of `timeout` starting at `now`, or `None` when the clock
/// cannot represent it
pub fn wait_deadline(now: Instant, timeout: Duration) -> Option<Instant> {
    now.checked_add(timeout)
}

/// How long the next poll may block
pub fn poll_slice(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map_or(MAX_POLL_SLICE, |deadline| deadline.saturating_duration_since(now))
        .min(MAX_POLL_SLICE)
}

/// Idle wait driven by terminal input.
///
/// Blocks until the timeout passes, a resize arrives or the user quits.
/// Resizes are published on the shared [`ResizeSignal`] before returning.
pub struct TerminalEvents {
    resize: ResizeSignal,
}

impl TerminalEvents {
    pub fn new(resize: ResizeSignal) -> Self {
        Self { resize }
    }
}

impl Waiter for TerminalEvents {
    fn wait(&mut self, timeout: Duration) -> Result<WaitEvent> {
        let deadline = wait_deadline(Instant::now(), timeout);

        loop {
            if !event::poll(poll_slice(deadline, Instant::now()))? {
                // An unrepresentable deadline never elapses
                if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                    return Ok(WaitEvent::Elapsed);
                }
                continue;
            }

            // Other keys neither wake nor restart the wait
            match map_event(&event::read()?) {
                StatusEvent::Resize => {
                    self.resize.notify();
                    return Ok(WaitEvent::Interrupted);
                }
                StatusEvent::Quit => return Ok(WaitEvent::Quit),
                StatusEvent::None => {}
            }
        }
    }
}
