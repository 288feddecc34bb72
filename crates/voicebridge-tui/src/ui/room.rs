//! Conversation room
//!
//! Header with the room code and language pair, the message log with each
//! message's translation underneath, the draft line, and the audio settings
//! modal on top when it is open.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use voicebridge_app::{
    AppState,
    screen::{AudioField, RoomScreen},
};
use voicebridge_core::{AudioSettings, translate::PENDING_TRANSLATION};

use super::{Palette, centered};

const BORDER_SIZE: u16 = 2;
const SLIDER_WIDTH: usize = 20;

/// Render the room.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    screen: &RoomScreen,
    palette: &Palette,
    area: Rect,
) {
    let [header_area, log_area, input_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
            .areas(area);

    render_header(frame, state, palette, header_area);
    render_log(frame, state, palette, log_area);
    render_input(frame, screen, palette, input_area);

    if let Some(selected) = screen.modal() {
        render_audio_modal(frame, &state.audio_settings, selected, palette, area);
    }
}

fn render_header(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let code = state.room_code.as_deref().unwrap_or("------");
    let mic = if state.is_mic_active {
        Span::styled("● Listening", Style::default().fg(palette.ok))
    } else {
        Span::styled("○ Mic off", palette.dim())
    };

    let line = Line::from(vec![
        Span::styled(format!("Room {code}"), palette.title()),
        Span::raw("  "),
        Span::raw(state.active_language_pair.to_string()),
        Span::raw("  "),
        mic,
    ]);
    let block = Block::default().borders(Borders::ALL).border_style(palette.dim());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_log(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = state
        .messages
        .iter()
        .map(|msg| {
            let sender_style = if msg.is_me {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.ok).add_modifier(Modifier::BOLD)
            };
            let translation_style = if msg.text_translated == PENDING_TRANSLATION {
                Style::default().fg(palette.pending).add_modifier(Modifier::ITALIC)
            } else {
                palette.dim()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", msg.clock_time()), palette.dim()),
                    Span::styled(msg.sender_name.clone(), sender_style),
                    Span::styled(format!(" [{}] ", msg.language), palette.dim()),
                    Span::raw(msg.text_original.clone()),
                ]),
                Line::from(Span::styled(format!("      ↳ {}", msg.text_translated), translation_style)),
            ])
        })
        .collect();

    // Two lines per message
    let visible = usize::from(area.height.saturating_sub(BORDER_SIZE)) / 2;
    let skip = items.len().saturating_sub(visible);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(" Conversation ");
    frame.render_widget(List::new(visible_items).block(block), area);
}

fn render_input(frame: &mut Frame, screen: &RoomScreen, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.dim())
        .title(" Enter send · Tab mic · ↑ transcript · ↓ audio · Esc hang up ");
    let paragraph =
        Paragraph::new(format!("> {}", screen.draft())).style(Style::default().fg(palette.fg));
    frame.render_widget(paragraph.block(block), area);
}

fn render_audio_modal(
    frame: &mut Frame,
    audio: &AudioSettings,
    selected: AudioField,
    palette: &Palette,
    area: Rect,
) {
    const MODAL_WIDTH: u16 = 50;
    const MODAL_HEIGHT: u16 = 8;

    let lines: Vec<Line> = AudioField::ALL
        .into_iter()
        .map(|field| {
            let value = match field {
                AudioField::SpeakerVolume => slider(audio.speaker_volume),
                AudioField::MicSensitivity => slider(audio.mic_sensitivity),
                AudioField::EchoCancellation => switch(audio.echo_cancellation),
                AudioField::NoiseReduction => switch(audio.noise_reduction),
            };
            let style = if field == selected { palette.selected() } else { palette.base() };
            Line::from(Span::styled(format!("{:<18}{value}", field.label()), style))
        })
        .collect();

    let popup = centered(area, MODAL_WIDTH, MODAL_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.title())
        .title(" Audio Settings ")
        .title_bottom(" ←/→ adjust · Esc close ");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block).style(palette.base()), popup);
}

/// Text slider for a 0..=100 level.
fn slider(level: u8) -> String {
    let filled = usize::from(level.min(100)) * SLIDER_WIDTH / 100;
    format!("[{}{}] {level:>3}", "#".repeat(filled), "-".repeat(SLIDER_WIDTH - filled))
}

fn switch(on: bool) -> String {
    if on { "[on]".to_owned() } else { "[off]".to_owned() }
}
