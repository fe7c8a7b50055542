use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::{LinkStatus, MonitorState};

/// Absolute time of the last successful probe
pub const SUCCESS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Last success while the link is down ("down since")
pub const DOWN_SINCE_FORMAT: &str = "DS: %Y-%m-%d %H:%M:%S";

/// Time of the most recent probe
pub const PROBE_TIME_FORMAT: &str = "%H:%M:%S";

/// Format a timestamp with one of the footer formats
pub fn format_time(time: &DateTime<Local>, fmt: &str) -> String {
    time.format(fmt).to_string()
}

/// Success timestamp text for the footer, which depends on the status.
///
/// Only `Up` and `Down` show it; `Down` marks it as a past reference point.
pub fn format_success_text(state: &MonitorState) -> String {
    match (state.status, state.last_success) {
        (LinkStatus::Up, Some(time)) => format_time(&time, SUCCESS_TIME_FORMAT),
        (LinkStatus::Down, Some(time)) => format_time(&time, DOWN_SINCE_FORMAT),
        _ => String::new(),
    }
}

/// Right-hand footer text: probe time and interval, or only the interval
/// before the first probe.
pub fn format_probe_label(state: &MonitorState, interval_label: &str) -> String {
    match (state.status, state.last_probe) {
        (LinkStatus::Init, _) | (_, None) => interval_label.to_string(),
        (_, Some(time)) => format!(
            "{} {}",
            format_time(&time, PROBE_TIME_FORMAT),
            interval_label
        ),
    }
}

/// Left-hand footer text: target address followed by the success text
pub fn format_footer_left(address: &str, success_text: &str) -> String {
    format!("{}  {}", address, success_text)
}

/// Keep the leading characters of `text` that fit in `width` columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Keep the trailing characters of `text` that fit in `width` columns
pub fn keep_tail_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(ch);
    }
    kept.into_iter().rev().collect()
}

/// Lay out the footer row for a terminal `width` columns wide.
///
/// The right-hand label wins: the left text gets whatever is left of it and
/// is cut at the end. A label wider than the terminal keeps its rightmost
/// columns. The result is exactly `width` columns when both parts fit.
pub fn layout_footer(width: usize, left: &str, right: &str) -> String {
    let right = if right.width() > width {
        keep_tail_width(right, width)
    } else {
        right.to_string()
    };
    let right_width = right.width();

    let left = truncate_to_width(left, width - right_width);
    let gap = width - right_width - left.width();

    format!("{}{}{}", left, " ".repeat(gap), right)
}
