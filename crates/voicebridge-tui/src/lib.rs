//! Terminal UI for VoiceBridge
//!
//! A thin shell over [`voicebridge_app::Driver`] that provides
//! terminal-specific I/O. All orchestration logic lives in the generic
//! [`voicebridge_app::Runtime`].
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
pub use voicebridge_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput, Runtime};
