//! Domain model.
//!
//! Plain value types shared by the store, the screens and the service seams.
//! None of these types carry behaviour beyond small conversions; the store is
//! the only place they are mutated.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Upper bound for slider-style audio settings.
pub const AUDIO_LEVEL_MAX: u8 = 100;

/// Full-screen UI state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewState {
    /// Landing screen with create/join actions.
    Home,
    /// Active conversation room.
    Room,
    /// Bluetooth device pairing.
    Bluetooth,
    /// Searchable two-column transcript.
    Transcript,
    /// App settings.
    Settings,
    /// User profile and usage statistics.
    Profile,
}

impl ViewState {
    /// Every view, in navigation order.
    pub const ALL: [Self; 6] =
        [Self::Home, Self::Room, Self::Bluetooth, Self::Transcript, Self::Settings, Self::Profile];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Room => "ROOM",
            Self::Bluetooth => "BLUETOOTH",
            Self::Transcript => "TRANSCRIPT",
            Self::Settings => "SETTINGS",
            Self::Profile => "PROFILE",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a view name does not match any [`ViewState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown view: {0}")]
pub struct ParseViewError(pub String);

impl FromStr for ViewState {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Supported conversation languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Turkish.
    Tr,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
}

impl Language {
    /// Two-letter upper-case code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Tr => "TR",
            Self::En => "EN",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::De => "DE",
        }
    }

    /// English display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tr => "Turkish",
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Source and target language of the active conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    /// Language spoken by the local user.
    pub from: Language,
    /// Language spoken by the remote party.
    pub to: Language,
}

impl LanguagePair {
    /// Target language for text written in `language`.
    ///
    /// Text in `from` translates to `to`, anything else to `from`.
    pub fn target_for(self, language: Language) -> Language {
        if language == self.from { self.to } else { self.from }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.from, self.to)
    }
}

/// Local user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URI.
    pub avatar: String,
    /// Contact address.
    pub email: String,
}

/// One turn of conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique id, derived from the creation timestamp.
    pub id: String,
    /// Sender's user id.
    pub sender_id: String,
    /// Sender's display name.
    pub sender_name: String,
    /// Sender's avatar URI.
    pub avatar: String,
    /// Text as spoken or typed.
    pub text_original: String,
    /// Text in the other language of the pair.
    pub text_translated: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Language of `text_original`.
    pub language: Language,
    /// Sent by the local user.
    pub is_me: bool,
}

impl Message {
    /// Case-insensitive substring match over both texts.
    ///
    /// An empty needle matches every message.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.text_original.to_lowercase().contains(&needle)
            || self.text_translated.to_lowercase().contains(&needle)
    }

    /// Wall-clock `HH:MM` (UTC) of the creation timestamp.
    pub fn clock_time(&self) -> String {
        let minutes_of_day = (self.timestamp_ms / 60_000) % (24 * 60);
        format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
    }
}

/// Pairing state of a Bluetooth device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    /// Paired and in use.
    Connected,
    /// Discovered, not paired.
    Available,
    /// Pairing requested, not finished.
    Connecting,
}

impl DeviceStatus {
    /// Lower-case label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Available => "available",
            Self::Connecting => "connecting",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pairing-candidate audio peripheral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BluetoothDevice {
    /// Device identifier.
    pub id: String,
    /// Advertised name.
    pub name: String,
    /// Pairing state.
    pub status: DeviceStatus,
    /// Battery percentage. `None` if the device does not report it.
    pub battery: Option<u8>,
}

/// Audio settings shown in the room's settings modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    /// Output volume, 0..=100.
    pub speaker_volume: u8,
    /// Microphone sensitivity, 0..=100.
    pub mic_sensitivity: u8,
    /// Echo cancellation enabled.
    pub echo_cancellation: bool,
    /// Noise reduction enabled.
    pub noise_reduction: bool,
}

impl AudioSettings {
    /// Shallow merge: fields set in `patch` replace ours, the rest are kept.
    ///
    /// Levels are clamped to [`AUDIO_LEVEL_MAX`].
    pub fn merge(&mut self, patch: AudioSettingsPatch) {
        if let Some(volume) = patch.speaker_volume {
            self.speaker_volume = volume.min(AUDIO_LEVEL_MAX);
        }
        if let Some(sensitivity) = patch.mic_sensitivity {
            self.mic_sensitivity = sensitivity.min(AUDIO_LEVEL_MAX);
        }
        if let Some(echo) = patch.echo_cancellation {
            self.echo_cancellation = echo;
        }
        if let Some(noise) = patch.noise_reduction {
            self.noise_reduction = noise;
        }
    }
}

/// Partial update for [`AudioSettings`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioSettingsPatch {
    /// New output volume.
    pub speaker_volume: Option<u8>,
    /// New microphone sensitivity.
    pub mic_sensitivity: Option<u8>,
    /// New echo cancellation flag.
    pub echo_cancellation: Option<bool>,
    /// New noise reduction flag.
    pub noise_reduction: Option<bool>,
}

impl AudioSettingsPatch {
    /// Patch that only sets the speaker volume.
    pub fn speaker_volume(volume: u8) -> Self {
        Self { speaker_volume: Some(volume), ..Self::default() }
    }

    /// Patch that only sets the microphone sensitivity.
    pub fn mic_sensitivity(sensitivity: u8) -> Self {
        Self { mic_sensitivity: Some(sensitivity), ..Self::default() }
    }

    /// Patch that only sets echo cancellation.
    pub fn echo_cancellation(enabled: bool) -> Self {
        Self { echo_cancellation: Some(enabled), ..Self::default() }
    }

    /// Patch that only sets noise reduction.
    pub fn noise_reduction(enabled: bool) -> Self {
        Self { noise_reduction: Some(enabled), ..Self::default() }
    }
}

/// Usage statistics shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStats {
    /// Accumulated talk time, preformatted.
    pub total_talk_time: String,
    /// Number of rooms the user created.
    pub rooms_created: u32,
    /// Most used language pair, preformatted.
    pub favorite_pair: String,
}
