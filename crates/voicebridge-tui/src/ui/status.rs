//! Status bar
//!
//! Displays the shown view, the language pair, the microphone flag and the
//! room code.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use voicebridge_app::AppState;
use voicebridge_core::ViewState;

use super::Palette;
use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let view = Span::styled(
        format!(" {} ", app.shown_view()),
        Style::default().fg(palette.bg).bg(palette.accent).add_modifier(Modifier::BOLD),
    );
    let details =
        Span::styled(format!(" {}", details(app.state(), app.shown_view())), palette.dim());

    frame.render_widget(Paragraph::new(Line::from(vec![view, details])), area);
}

/// Text right of the view badge.
pub(super) fn details(state: &AppState, shown: ViewState) -> String {
    let mic = if state.is_mic_active { "on" } else { "off" };
    let mut text = format!("{} | mic {mic}", state.active_language_pair);
    if let Some(code) = &state.room_code {
        text.push_str(&format!(" | room {code}"));
    }
    if shown != state.current_view {
        text.push_str(&format!(" | {} unavailable", state.current_view));
    }
    text
}
