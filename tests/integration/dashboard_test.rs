// End-to-end runs of the monitor loop against an in-memory terminal.

use chrono::Local;
use linkstat::core::{
    Monitor, MonitorState, Probe, ProbeOutcome, RedrawMode, ResizeSignal, Screen, Target,
    WaitEvent, Waiter,
};
use linkstat::ui::formatters::{
    format_time, DOWN_SINCE_FORMAT, PROBE_TIME_FORMAT, SUCCESS_TIME_FORMAT,
};
use linkstat::ui::status_tui::TerminalScreen;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::time::Duration;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 11;
const ADDRESS: &str = "192.0.2.44";

struct ScriptedProbe(VecDeque<ProbeOutcome>);

impl Probe for ScriptedProbe {
    fn probe(&mut self, _address: &str, _timeout: Duration) -> ProbeOutcome {
        self.0.pop_front().unwrap_or(ProbeOutcome::Error)
    }
}

/// Replays wait events; an interrupt stands for a terminal resize.
struct ScriptedWaiter {
    events: VecDeque<WaitEvent>,
    resize: ResizeSignal,
}

impl Waiter for ScriptedWaiter {
    fn wait(&mut self, _timeout: Duration) -> linkstat::Result<WaitEvent> {
        let event = self.events.pop_front().unwrap_or(WaitEvent::Quit);
        if event == WaitEvent::Interrupted {
            self.resize.notify();
        }
        Ok(event)
    }
}

type Dashboard = Monitor<ScriptedProbe, TerminalScreen<TestBackend>, ScriptedWaiter>;

fn target() -> Target {
    Target::new(ADDRESS.parse().unwrap(), "5s")
}

fn dashboard(outcomes: &[ProbeOutcome], events: &[WaitEvent]) -> Dashboard {
    let resize = ResizeSignal::new();
    let screen = TerminalScreen::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let waiter = ScriptedWaiter {
        events: events.iter().copied().collect(),
        resize: resize.clone(),
    };

    Monitor::new(
        target(),
        Duration::from_secs(5),
        ScriptedProbe(outcomes.iter().copied().collect()),
        screen,
        waiter,
        resize,
    )
}

fn buffer(dashboard: &Dashboard) -> &Buffer {
    dashboard.screen().terminal().backend().buffer()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn banner_row(buffer: &Buffer) -> String {
    row_text(buffer, buffer.area.height / 2)
}

fn footer_row(buffer: &Buffer) -> String {
    row_text(buffer, buffer.area.height - 1)
}

#[test]
fn test_init_frame() {
    let mut screen = TerminalScreen::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    screen
        .draw(&MonitorState::new(), &target(), RedrawMode::Incremental)
        .unwrap();

    let buffer = screen.terminal().backend().buffer();
    let banner = banner_row(buffer);
    assert_eq!(banner.trim(), "INIT...");
    assert_eq!(banner.find("INIT..."), Some(((WIDTH - 7) / 2) as usize));

    let footer = footer_row(buffer);
    assert_eq!(footer, format!("{:<58}5s", "192.0.2.44  "));
    assert_eq!(buffer[(0, 0)].bg, Color::Blue);
}

#[test]
fn test_first_up_shows_link_up_with_success_time() {
    let mut dashboard = dashboard(&[ProbeOutcome::Up], &[]);
    dashboard.run().unwrap();

    let success = dashboard.state().last_success.expect("success recorded");
    let buffer = buffer(&dashboard);

    let banner = banner_row(buffer);
    assert_eq!(banner.trim(), "LINK UP");
    assert_eq!(banner.find("LINK UP"), Some(((WIDTH - 7) / 2) as usize));

    let footer = footer_row(buffer);
    let expected_left = format!("{}  {}", ADDRESS, format_time(&success, SUCCESS_TIME_FORMAT));
    let expected_right = format!("{} 5s", format_time(&success, PROBE_TIME_FORMAT));
    assert!(footer.starts_with(&expected_left), "footer: {:?}", footer);
    assert!(footer.ends_with(&expected_right), "footer: {:?}", footer);
    assert_eq!(buffer[(0, 0)].bg, Color::Green);
}

#[test]
fn test_down_after_up_keeps_down_since_time() {
    let mut dashboard = dashboard(
        &[ProbeOutcome::Up, ProbeOutcome::Down],
        &[WaitEvent::Elapsed],
    );
    dashboard.run().unwrap();

    let success = dashboard.state().last_success.expect("success recorded");
    let buffer = buffer(&dashboard);

    assert_eq!(banner_row(buffer).trim(), "LINK DOWN");
    let footer = footer_row(buffer);
    let down_since = format_time(&success, DOWN_SINCE_FORMAT);
    assert!(down_since.starts_with("DS: "));
    assert!(footer.contains(&down_since), "footer: {:?}", footer);
    assert_eq!(buffer[(0, 0)].bg, Color::Red);
}

#[test]
fn test_error_banner_is_neutral() {
    let mut dashboard = dashboard(
        &[ProbeOutcome::Up, ProbeOutcome::Error],
        &[WaitEvent::Elapsed],
    );
    dashboard.run().unwrap();

    let buffer = buffer(&dashboard);
    assert_eq!(banner_row(buffer).trim(), "ERROR");
    assert!(!footer_row(buffer).contains("DS:"));
    assert_eq!(buffer[(0, 0)].bg, Color::Blue);
}

#[test]
fn test_resize_mid_wait_goes_through_full_redraw() {
    let mut dashboard = dashboard(&[ProbeOutcome::Up], &[WaitEvent::Interrupted]);
    dashboard.run().unwrap();

    assert_eq!(dashboard.cycles(), 1);
    assert_eq!(dashboard.screen().full_redraws(), 1);
    assert_eq!(banner_row(buffer(&dashboard)).trim(), "LINK UP");
}

#[test]
fn test_plain_cycles_never_full_redraw() {
    let mut dashboard = dashboard(
        &[ProbeOutcome::Up, ProbeOutcome::Down, ProbeOutcome::Up],
        &[WaitEvent::Elapsed, WaitEvent::Elapsed],
    );
    dashboard.run().unwrap();

    assert_eq!(dashboard.cycles(), 3);
    assert_eq!(dashboard.screen().full_redraws(), 0);
}

#[test]
fn test_success_time_is_probe_completion_time() {
    let mut dashboard = dashboard(&[ProbeOutcome::Up], &[]);
    let before = Local::now();
    dashboard.run_cycle().unwrap();
    let after = Local::now();

    let success = dashboard.state().last_success.unwrap();
    assert!(before <= success && success <= after);
}
