//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the [`crate::App`]
//! state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) and periodic ticks from the driver.
//! - Completions of translation and pairing requests run by the
//!   [`crate::Bridge`].

use voicebridge_core::{PairingError, TranslationError};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Translation arrived for a message.
    TranslationReady {
        /// Message identifier.
        message_id: String,
        /// Translated text.
        text: String,
    },

    /// Translation request failed.
    TranslationFailed {
        /// Message identifier.
        message_id: String,
        /// What went wrong.
        error: TranslationError,
    },

    /// Pairing attempt finished.
    PairingFinished {
        /// Device identifier.
        device_id: String,
        /// `Ok` if the device is now connected.
        result: Result<(), PairingError>,
    },
}
