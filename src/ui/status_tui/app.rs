use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

use crate::core::monitor::{Monitor, RedrawMode, Screen};
use crate::core::probe::PingProbe;
use crate::core::resize::ResizeSignal;
use crate::core::resolver::Target;
use crate::core::state::MonitorState;
use crate::error::LinkstatError;

use super::event_handler::TerminalEvents;
use super::render::render_status;

/// Exit code used when a termination signal ends the dashboard
pub const SIGNAL_EXIT_CODE: i32 = 130;

fn tui_error<E: std::fmt::Display>(e: E) -> LinkstatError {
    LinkstatError::tui(e.to_string())
}

/// The dashboard drawn on a ratatui terminal.
///
/// Incremental redraws rely on ratatui's buffer diff, so only cells that
/// changed (banner and footer) are written. A full redraw re-reads the
/// terminal size and clears the screen first, since a resized terminal
/// cannot be trusted for partial updates.
pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
    full_redraws: u64,
}

impl<B: Backend> TerminalScreen<B> {
    pub fn new(backend: B) -> crate::Result<Self> {
        let terminal = Terminal::new(backend).map_err(tui_error)?;
        Ok(Self {
            terminal,
            full_redraws: 0,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Number of full redraws performed so far
    pub fn full_redraws(&self) -> u64 {
        self.full_redraws
    }
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn draw(
        &mut self,
        state: &MonitorState,
        target: &Target,
        mode: RedrawMode,
    ) -> crate::Result<()> {
        if mode == RedrawMode::Full {
            self.terminal.autoresize().map_err(tui_error)?;
            self.terminal.clear().map_err(tui_error)?;
            self.full_redraws += 1;
        }

        self.terminal
            .draw(|frame| render_status(frame, state, target))
            .map_err(tui_error)?;
        Ok(())
    }
}

/// Switch to raw mode and the alternate screen, undoing raw mode if the
/// screen switch fails
fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        let _ = execute!(out, LeaveAlternateScreen, Show);
        return Err(e);
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Restore the terminal when the process is signalled from outside.
fn install_exit_handler() {
    let installed = ctrlc::set_handler(|| {
        let _ = restore_terminal();
        std::process::exit(SIGNAL_EXIT_CODE);
    });

    if let Err(e) = installed {
        log::warn!("Could not install termination handler: {}", e);
    }
}

fn run_dashboard(target: Target, interval: Duration) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let screen = TerminalScreen::new(backend).context("Failed to create terminal")?;

    let resize = ResizeSignal::new();
    let probe = PingProbe::new(target.family);
    let events = TerminalEvents::new(resize.clone());

    let mut monitor = Monitor::new(target, interval, probe, screen, events, resize);
    monitor.run().context("Dashboard stopped")?;
    Ok(())
}

/// Run the link status dashboard until the user quits
pub fn run_status_app(target: Target, interval: Duration) -> Result<()> {
    // Setup terminal
    enter_screen(&mut io::stdout()).context("Failed to set up terminal")?;
    install_exit_handler();

    let result = run_dashboard(target, interval);

    // Restore terminal
    let restored = restore_terminal().context("Failed to restore terminal");
    result?;
    restored
}
