//! Landing screen
//!
//! Title, the create/join actions and navigation hints. When the join entry is
//! open a code prompt replaces the hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use voicebridge_app::{
    AppState,
    screen::{HomeScreen, ROOM_CODE_LEN},
};

use super::{Palette, centered};

const MENU: [(&str, &str); 6] = [
    ("c", "Create Room"),
    ("j", "Join Room"),
    ("s", "Settings"),
    ("d", "Devices"),
    ("p", "Profile"),
    ("q", "Quit"),
];

/// Render the landing screen.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    screen: &HomeScreen,
    palette: &Palette,
    area: Rect,
) {
    const PANEL_WIDTH: u16 = 44;
    const PANEL_HEIGHT: u16 = 14;

    let mut lines = vec![
        Line::from(Span::styled("VoiceBridge", palette.title())),
        Line::from(Span::styled("Real-time voice translation", palette.dim())),
        Line::from(Span::styled(
            format!("Hello, {}", state.user.name),
            Style::default().fg(palette.fg),
        )),
        Line::default(),
    ];

    match screen.join_code() {
        Some(code) => {
            let blanks = "_".repeat(ROOM_CODE_LEN.saturating_sub(code.chars().count()));
            lines.push(Line::from("Enter room code:"));
            lines.push(Line::from(Span::styled(format!("{code}{blanks}"), palette.title())));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Enter join · Esc cancel", palette.dim())));
        },
        None => {
            for (key, label) in MENU {
                lines.push(Line::from(vec![
                    Span::styled(format!("[{key}] "), palette.title()),
                    Span::raw(label),
                ]));
            }
        },
    }

    let block = Block::default().borders(Borders::ALL).border_style(palette.dim());
    let panel = centered(area, PANEL_WIDTH, PANEL_HEIGHT);
    frame.render_widget(Paragraph::new(lines).block(block).centered(), panel);
}
