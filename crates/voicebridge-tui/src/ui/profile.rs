//! Profile and usage statistics.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use voicebridge_app::{
    AppState,
    screen::{LANGUAGE_SHARE, WEEKLY_ACTIVITY},
};

use super::Palette;

const SHARE_BAR_WIDTH: usize = 20;

/// Render the profile.
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let [user_area, stats_area, chart_area, share_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(5),
    ])
    .areas(area);

    let user = Paragraph::new(vec![
        Line::from(Span::styled(state.user.name.as_str(), palette.title())),
        Line::from(Span::styled(state.user.email.as_str(), palette.dim())),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(palette.dim()).title(" Profile "));
    frame.render_widget(user, user_area);

    let stats = &state.stats;
    let stats_line = Line::from(vec![
        Span::styled("Talk time ", palette.dim()),
        Span::raw(stats.total_talk_time.as_str()),
        Span::styled("  Rooms ", palette.dim()),
        Span::raw(stats.rooms_created.to_string()),
        Span::styled("  Favourite ", palette.dim()),
        Span::raw(stats.favorite_pair.as_str()),
    ]);
    let stats = Paragraph::new(stats_line)
        .block(Block::default().borders(Borders::ALL).border_style(palette.dim()));
    frame.render_widget(stats, stats_area);

    render_weekly_activity(frame, palette, chart_area);
    render_language_share(frame, palette, share_area);
}

fn render_weekly_activity(frame: &mut Frame, palette: &Palette, area: Rect) {
    // Bar heights in tenths of an hour
    let bars: Vec<Bar> = WEEKLY_ACTIVITY
        .iter()
        .map(|&(day, hours)| {
            Bar::default()
                .label(Line::from(day))
                .value((hours * 10.0).round() as u64)
                .text_value(format!("{hours:.1}"))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.dim())
                .title(" Weekly activity (h) "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(palette.selected());
    frame.render_widget(chart, area);
}

fn render_language_share(frame: &mut Frame, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = LANGUAGE_SHARE
        .iter()
        .map(|&(pair, percent)| {
            let filled = usize::from(percent.min(100)) * SHARE_BAR_WIDTH / 100;
            Line::from(vec![
                Span::raw(format!("{pair:<7}")),
                Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
                Span::styled("░".repeat(SHARE_BAR_WIDTH - filled), palette.dim()),
                Span::raw(format!(" {percent:>3}%")),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(" Languages ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use voicebridge_app::{App, AppEvent, KeyInput};

    use crate::ui::test_support::{draw, shows};

    const NOW: u64 = 1_704_067_200_000;

    #[test]
    fn shows_user_stats_and_charts() {
        let mut app = App::with_fixtures(NOW);
        app.handle(AppEvent::Key(KeyInput::Char('p')), NOW);

        let rows = draw(&app, 80, 30);
        assert!(shows(&rows, "Ahmet Yılmaz"));
        assert!(shows(&rows, "42h 15m"));
        assert!(shows(&rows, "Rooms 18"));
        assert!(shows(&rows, "Favourite TR ↔ EN"));
        assert!(shows(&rows, "Mon"));
        assert!(shows(&rows, "TR-EN"));
        assert!(shows(&rows, " 65%"));
    }
}
