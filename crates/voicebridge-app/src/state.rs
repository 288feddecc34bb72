//! Observable application state.
//!
//! [`AppState`] is the root value the [`crate::Store`] owns. Screens only ever
//! see it by shared reference.

use voicebridge_core::{
    AudioSettings, BluetoothDevice, LanguagePair, Message, RoomStats, Theme, User, ViewState,
    fixtures,
};

/// Root application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The one screen being shown.
    pub current_view: ViewState,
    /// Colour theme.
    pub theme: Theme,
    /// Microphone display flag. No audio is captured.
    pub is_mic_active: bool,
    /// Languages of the active conversation.
    pub active_language_pair: LanguagePair,
    /// Code of the joined room. `None` if no code was entered or generated.
    pub room_code: Option<String>,
    /// Discovered Bluetooth devices.
    pub devices: Vec<BluetoothDevice>,
    /// Conversation log, in insertion order.
    pub messages: Vec<Message>,
    /// Local user.
    pub user: User,
    /// Usage statistics.
    pub stats: RoomStats,
    /// Audio settings.
    pub audio_settings: AudioSettings,
}

impl AppState {
    /// Prototype seed state, with message history relative to `now_ms`.
    pub fn fixture(now_ms: u64) -> Self {
        Self {
            current_view: ViewState::Home,
            theme: Theme::Light,
            is_mic_active: false,
            active_language_pair: fixtures::language_pair(),
            room_code: None,
            devices: fixtures::devices(),
            messages: fixtures::messages(now_ms),
            user: fixtures::user(),
            stats: fixtures::stats(),
            audio_settings: fixtures::audio_settings(),
        }
    }

    /// Message with the given id. `None` if there is none.
    pub fn message(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// Device with the given id. `None` if there is none.
    pub fn device(&self, device_id: &str) -> Option<&BluetoothDevice> {
        self.devices.iter().find(|d| d.id == device_id)
    }
}
