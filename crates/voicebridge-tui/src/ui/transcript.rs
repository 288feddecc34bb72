//! Transcript
//!
//! Search line on top, then one column per language. A message spoken in a
//! column's language shows its original text there and its translation in the
//! other column.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use voicebridge_app::{
    AppState,
    screen::{TranscriptRow, TranscriptScreen},
};
use voicebridge_core::Language;

use super::Palette;

/// Render the transcript.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    screen: &TranscriptScreen,
    palette: &Palette,
    area: Rect,
) {
    let [search_area, columns_area, count_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", palette.dim()),
        Span::raw(screen.search()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(palette.dim()).title(" Transcript "));
    frame.render_widget(search, search_area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(columns_area);
    let pair = state.active_language_pair;
    render_column(frame, &screen.column(state, pair.from), pair.from, palette, left);
    render_column(frame, &screen.column(state, pair.to), pair.to, palette, right);

    let found = screen.filtered(state).len();
    let count = Paragraph::new(Span::styled(
        format!(" {found} messages found · Esc back"),
        palette.dim(),
    ));
    frame.render_widget(count, count_area);
}

fn render_column(
    frame: &mut Frame,
    rows: &[TranscriptRow<'_>],
    language: Language,
    palette: &Palette,
    area: Rect,
) {
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let style = if row.is_original {
                Style::default().fg(palette.fg)
            } else {
                palette.dim().add_modifier(Modifier::ITALIC)
            };
            Line::from(vec![
                Span::styled(format!("{} ", row.message.clock_time()), palette.dim()),
                Span::styled(row.text, style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(format!(" {} ", language.display_name()));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use voicebridge_app::{App, AppEvent, KeyInput};

    use crate::ui::test_support::{draw, shows};

    const NOW: u64 = 1_704_067_200_000;

    fn on_transcript() -> App {
        let mut app = App::with_fixtures(NOW);
        for key in [KeyInput::Char('c'), KeyInput::Up] {
            app.handle(AppEvent::Key(key), NOW);
        }
        app
    }

    #[test]
    fn columns_show_originals_and_translations() {
        let rows = draw(&on_transcript(), 120, 30);

        assert!(shows(&rows, "Merhaba, nasılsın?"));
        assert!(shows(&rows, "Hello, how are you?"));
        assert!(shows(&rows, "3 messages found"));
    }

    #[test]
    fn search_narrows_both_columns() {
        let mut app = on_transcript();
        for c in "proje".chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)), NOW);
        }

        let rows = draw(&app, 120, 30);
        assert!(shows(&rows, "Search: proje"));
        assert!(shows(&rows, "1 messages found"));
        assert!(!shows(&rows, "Merhaba"));
    }
}
