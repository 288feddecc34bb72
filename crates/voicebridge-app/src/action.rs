//! Store mutations and runtime side-effects.
//!
//! [`StoreAction`] is the closed set of mutations the [`crate::Store`]
//! accepts. [`AppAction`] is what the state machines hand back to the runtime
//! to execute.

use voicebridge_core::{AudioSettingsPatch, DeviceStatus, Language, Message, ViewState};

/// Mutations accepted by the store. Every state change is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Replace the current view.
    SetView(ViewState),

    /// Flip between light and dark.
    ToggleTheme,

    /// Flip the microphone display flag.
    ToggleMic,

    /// Append a message to the conversation.
    AddMessage(Message),

    /// Start pairing with a device.
    ConnectDevice {
        /// Device identifier.
        device_id: String,
    },

    /// Replace the room code.
    SetRoomCode(Option<String>),

    /// Merge a partial audio settings update.
    UpdateAudioSettings(AudioSettingsPatch),

    /// Overwrite a message's translated text.
    ApplyTranslation {
        /// Message identifier.
        message_id: String,
        /// Translated text.
        text: String,
    },

    /// Record the outcome of a pairing attempt.
    SetDeviceStatus {
        /// Device identifier.
        device_id: String,
        /// New status.
        status: DeviceStatus,
    },
}

/// Actions produced by the state machines for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Translate a freshly sent message.
    Translate {
        /// Message to rewrite when the translation arrives.
        message_id: String,
        /// Original text.
        text: String,
        /// Language of `text`.
        from: Language,
        /// Requested language.
        to: Language,
    },

    /// Complete a pairing request.
    PairDevice {
        /// Device identifier.
        device_id: String,
    },
}
