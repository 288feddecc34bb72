//! Settings list.
//!
//! Only "Dark Mode" and "Devices" do anything. The other rows display fixed
//! values.

use voicebridge_core::{DeviceStatus, Theme, ViewState};

use crate::{AppAction, AppState, KeyInput, ScreenContext};

/// A row of the settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    /// Interface language.
    Language,
    /// Light/dark theme switch.
    DarkMode,
    /// Notification switch.
    Notifications,
    /// Synthetic voice.
    AiVoice,
    /// Playback speed of the synthetic voice.
    SpeechSpeed,
    /// Opens the Bluetooth screen.
    Devices,
    /// Conversation history switch.
    SaveHistory,
    /// Transcript retention.
    AutoDelete,
    /// Build version.
    Version,
    /// Account removal. Not implemented.
    DeleteAccount,
}

impl SettingsRow {
    /// All rows, top to bottom.
    pub const ALL: [Self; 10] = [
        Self::Language,
        Self::DarkMode,
        Self::Notifications,
        Self::AiVoice,
        Self::SpeechSpeed,
        Self::Devices,
        Self::SaveHistory,
        Self::AutoDelete,
        Self::Version,
        Self::DeleteAccount,
    ];

    /// Section heading the row is listed under.
    pub fn section(self) -> &'static str {
        match self {
            Self::Language | Self::DarkMode | Self::Notifications => "General",
            Self::AiVoice | Self::SpeechSpeed | Self::Devices => "Audio & Translation",
            Self::SaveHistory | Self::AutoDelete => "Privacy",
            Self::Version | Self::DeleteAccount => "About",
        }
    }

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::DarkMode => "Dark Mode",
            Self::Notifications => "Notifications",
            Self::AiVoice => "AI Voice",
            Self::SpeechSpeed => "Speech Speed",
            Self::Devices => "Devices",
            Self::SaveHistory => "Save Conversation History",
            Self::AutoDelete => "Auto-delete transcripts",
            Self::Version => "Version",
            Self::DeleteAccount => "Delete Account",
        }
    }

    /// Displayed value.
    pub fn value(self, state: &AppState) -> String {
        let switch = |on: bool| String::from(if on { "On" } else { "Off" });
        match self {
            Self::Language => "English".into(),
            Self::DarkMode => switch(state.theme == Theme::Dark),
            Self::Notifications | Self::SaveHistory => switch(true),
            Self::AiVoice => "Female (Sarah)".into(),
            Self::SpeechSpeed => "Normal".into(),
            Self::Devices => {
                let connected =
                    state.devices.iter().filter(|d| d.status == DeviceStatus::Connected).count();
                format!("{connected} connected")
            },
            Self::AutoDelete => "30 Days".into(),
            Self::Version => "1.0.0 (Beta)".into(),
            Self::DeleteAccount => String::new(),
        }
    }
}

/// Settings list with a selection cursor.
#[derive(Debug, Clone, Default)]
pub struct SettingsScreen {
    selected: usize,
}

impl SettingsScreen {
    /// Create the screen with the first row selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row.
    pub fn selected(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected.min(SettingsRow::ALL.len() - 1)]
    }

    pub(crate) fn reset(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        match key {
            KeyInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.selected = (self.selected + 1).min(SettingsRow::ALL.len() - 1);
                vec![AppAction::Render]
            },
            KeyInput::Enter => match self.selected() {
                SettingsRow::DarkMode => ctx.store.toggle_theme(),
                SettingsRow::Devices => ctx.store.set_view(ViewState::Bluetooth),
                row => {
                    tracing::debug!(row = row.label(), "settings row has no action");
                    vec![]
                },
            },
            KeyInput::Esc => ctx.store.set_view(ViewState::Home),
            _ => vec![],
        }
    }
}
