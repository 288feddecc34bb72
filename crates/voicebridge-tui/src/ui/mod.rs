//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O): each screen renders
//! from the store's state plus its own local state.

mod bluetooth;
mod home;
mod palette;
mod profile;
mod room;
mod settings;
mod status;
mod transcript;

pub use palette::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};
use voicebridge_app::Screen;

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let state = app.state();
    let palette = Palette::for_theme(state.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_screen(frame, app, &palette, *main_area);
    status::render(frame, app, &palette, *status_area);
}

fn render_screen(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    match app.active_screen() {
        Screen::Home(screen) => home::render(frame, state, screen, palette, area),
        Screen::Room(screen) => room::render(frame, state, screen, palette, area),
        Screen::Bluetooth(screen) => bluetooth::render(frame, state, screen, palette, area),
        Screen::Transcript(screen) => transcript::render(frame, state, screen, palette, area),
        Screen::Settings(screen) => settings::render(frame, state, screen, palette, area),
        Screen::Profile(_) => profile::render(frame, state, palette, area),
    }
}

/// Rectangle of `width` x `height` centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}


#[cfg(test)]
mod tests {
    use voicebridge_app::{AppEvent, KeyInput};
    use voicebridge_core::ViewState;

    use super::{test_support::draw, *};

    const NOW: u64 = 1_704_067_200_000;

    #[test]
    fn every_view_renders_without_panicking() {
        let mut app = App::with_fixtures(NOW);
        for view in ViewState::ALL {
            app.store_mut().set_view(view);
            app.handle(AppEvent::Tick, NOW);
            assert!(!draw(&app, 80, 24).is_empty());
            assert!(!draw(&app, 10, 4).is_empty());
        }
    }

    #[test]
    fn status_bar_names_the_shown_view() {
        let mut app = App::with_fixtures(NOW);
        app.handle(AppEvent::Key(KeyInput::Char('s')), NOW);

        let rows = draw(&app, 80, 24);
        assert!(rows.last().is_some_and(|row| row.contains("SETTINGS")));
    }

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 40, 40), area);
    }
}
