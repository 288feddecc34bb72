//! Core types for VoiceBridge
//!
//! Plain domain data, the prototype's seed fixtures, and the two service seams
//! (translation and device pairing) that a real backend plugs into.
//!
//! Nothing in this crate holds mutable application state. The state container
//! lives in `voicebridge-app`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod pairing;
pub mod translate;

pub use env::{Environment, SimEnv, SystemEnv};
pub use error::{PairingError, TranslationError};
pub use model::{
    AudioSettings, AudioSettingsPatch, BluetoothDevice, DeviceStatus, Language, LanguagePair,
    Message, ParseViewError, RoomStats, Theme, User, ViewState,
};
pub use pairing::{MockPairing, PairingBackend};
pub use translate::{MockTranslator, Translator};
