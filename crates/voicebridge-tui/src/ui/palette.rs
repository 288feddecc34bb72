//! Colours per theme.

use ratatui::style::{Color, Modifier, Style};
use voicebridge_core::{DeviceStatus, Theme};

/// Colours used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default text.
    pub fg: Color,
    /// Background.
    pub bg: Color,
    /// Headings, selection and the primary action.
    pub accent: Color,
    /// Secondary text.
    pub muted: Color,
    /// Connected devices, switches that are on.
    pub ok: Color,
    /// Pending states.
    pub pending: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::Gray,
                ok: Color::Green,
                pending: Color::Yellow,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::LightBlue,
                muted: Color::DarkGray,
                ok: Color::LightGreen,
                pending: Color::LightYellow,
            },
        }
    }

    /// Default text on the background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Secondary text.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Headings.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Highlighted row.
    pub fn selected(&self) -> Style {
        Style::default().fg(self.bg).bg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Colour of a device status label.
    pub fn device_status(&self, status: DeviceStatus) -> Style {
        let color = match status {
            DeviceStatus::Connected => self.ok,
            DeviceStatus::Connecting => self.pending,
            DeviceStatus::Available => self.muted,
        };
        Style::default().fg(color)
    }
}
