//! Device list

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use voicebridge_app::{AppState, screen::BluetoothScreen};
use voicebridge_core::BluetoothDevice;

use super::Palette;

/// Render the device list.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    screen: &BluetoothScreen,
    palette: &Palette,
    area: Rect,
) {
    let [scan_area, list_area, help_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

    let scan = if screen.is_scanning() {
        Line::from(Span::styled("Scanning for devices...", palette.title()))
    } else {
        Line::from(vec![
            Span::styled("Scan Complete", palette.title()),
            Span::styled("  [r] rescan", palette.dim()),
        ])
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(" Bluetooth ");
    frame.render_widget(Paragraph::new(scan).block(block), scan_area);

    let items: Vec<ListItem> =
        state.devices.iter().map(|device| ListItem::new(device_line(device, palette))).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(palette.dim()).title(" Devices "))
        .highlight_style(palette.selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(screen.selected()));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let help = Paragraph::new(Span::styled(" ↑/↓ select · Enter connect · Esc back", palette.dim()));
    frame.render_widget(help, help_area);
}

fn device_line<'a>(device: &'a BluetoothDevice, palette: &Palette) -> Line<'a> {
    let mut spans = vec![
        Span::raw(format!("{:<20}", device.name)),
        Span::styled(format!("{:<12}", device.status.label()), palette.device_status(device.status)),
    ];
    if let Some(battery) = device.battery {
        spans.push(Span::styled(format!("{battery}%"), palette.dim()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use voicebridge_app::{App, AppEvent, KeyInput, screen::SCAN_DURATION_MS};

    use crate::ui::test_support::{draw, shows};

    const NOW: u64 = 1_704_067_200_000;

    fn on_devices() -> App {
        let mut app = App::with_fixtures(NOW);
        app.handle(AppEvent::Key(KeyInput::Char('d')), NOW);
        app
    }

    #[test]
    fn scanning_then_complete() {
        let mut app = on_devices();
        assert!(shows(&draw(&app, 80, 24), "Scanning for devices..."));

        app.handle(AppEvent::Tick, NOW + SCAN_DURATION_MS);
        let rows = draw(&app, 80, 24);
        assert!(shows(&rows, "Scan Complete"));
        assert!(!shows(&rows, "Scanning"));
    }

    #[test]
    fn lists_devices_with_status_and_battery() {
        let rows = draw(&on_devices(), 80, 24);

        assert!(shows(&rows, "> AirPods Pro"));
        assert!(shows(&rows, "connected"));
        assert!(shows(&rows, "85%"));
        assert!(shows(&rows, "JBL Flip 5"));
    }

    #[test]
    fn selection_follows_cursor() {
        let mut app = on_devices();
        app.handle(AppEvent::Key(KeyInput::Down), NOW);

        assert!(shows(&draw(&app, 80, 24), "> JBL Flip 5"));
    }
}
