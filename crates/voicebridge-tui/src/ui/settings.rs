//! Settings list grouped by section.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use voicebridge_app::{
    AppState,
    screen::{SettingsRow, SettingsScreen},
};

use super::Palette;

const LABEL_WIDTH: usize = 28;

/// Render the settings list.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    screen: &SettingsScreen,
    palette: &Palette,
    area: Rect,
) {
    let mut lines = Vec::new();
    let mut section = "";

    for row in SettingsRow::ALL {
        if row.section() != section {
            if !section.is_empty() {
                lines.push(Line::default());
            }
            section = row.section();
            lines.push(Line::from(Span::styled(section, palette.title())));
        }

        let text = format!("  {:<LABEL_WIDTH$}{}", row.label(), row.value(state));
        let style = if row == screen.selected() { palette.selected() } else { palette.base() };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(" Settings ")
        .title_bottom(" ↑/↓ select · Enter toggle · Esc back ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use voicebridge_app::{App, AppEvent, KeyInput};

    use crate::ui::test_support::{draw, shows};

    const NOW: u64 = 1_704_067_200_000;

    fn on_settings() -> App {
        let mut app = App::with_fixtures(NOW);
        app.handle(AppEvent::Key(KeyInput::Char('s')), NOW);
        app
    }

    #[test]
    fn lists_sections_and_values() {
        let rows = draw(&on_settings(), 80, 24);

        for heading in ["General", "Audio & Translation", "Privacy", "About"] {
            assert!(shows(&rows, heading), "missing {heading}");
        }
        assert!(shows(&rows, "1 connected"));
        assert!(shows(&rows, "1.0.0 (Beta)"));
        assert!(shows(&rows, "Speech Speed"));
        assert!(shows(&rows, "Delete Account"));
    }

    #[test]
    fn dark_mode_value_follows_theme() {
        let mut app = on_settings();
        let before = draw(&app, 80, 24);
        let was_dark = before.iter().any(|row| row.contains("Dark Mode") && row.contains("On"));

        for key in [KeyInput::Down, KeyInput::Enter] {
            app.handle(AppEvent::Key(key), NOW);
        }

        let after = draw(&app, 80, 24);
        let is_dark = after.iter().any(|row| row.contains("Dark Mode") && row.contains("On"));
        assert_ne!(was_dark, is_dark);
    }
}
