//! Full-screen link status dashboard.
//!
//! Draws the monitor state with ratatui and turns terminal input into the
//! interruptible idle wait used by the monitor loop.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_status_app, TerminalScreen, SIGNAL_EXIT_CODE};
pub use event_handler::{map_event, StatusEvent, TerminalEvents};
pub use render::render_status;
pub use widgets::{banner_for, Banner};
