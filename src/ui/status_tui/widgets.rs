use ratatui::prelude::*;

use crate::core::state::LinkStatus;

/// Banner text and colour scheme for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub text: &'static str,
    pub background: Color,
}

/// Pick the banner for a status
pub fn banner_for(status: LinkStatus) -> Banner {
    match status {
        LinkStatus::Init => Banner {
            text: "INIT...",
            background: Color::Blue,
        },
        LinkStatus::Up => Banner {
            text: "LINK UP",
            background: Color::Green,
        },
        LinkStatus::Down => Banner {
            text: "LINK DOWN",
            background: Color::Red,
        },
        // Neutral, same as INIT: an error says nothing about the link itself
        LinkStatus::Error => Banner {
            text: "ERROR",
            background: Color::Blue,
        },
    }
}

/// Style shared by every cell of the dashboard
pub fn screen_style(banner: &Banner) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(banner.background)
        .add_modifier(Modifier::BOLD)
}
