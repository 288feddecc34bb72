//! Application layer for VoiceBridge
//!
//! Pure state machines and a generic runtime for the companion app, so the
//! same code runs under the terminal front end and in deterministic tests.
//!
//! # Components
//!
//! - [`Store`]: single owner of [`AppState`], one reducer over [`StoreAction`],
//!   synchronous subscriber notification
//! - [`Router`]: maps the current view to exactly one [`Screen`]
//! - [`App`]: routes input to the active screen and completions to the store
//! - [`Bridge`]: runs translation and pairing requests against the seams
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic event loop tying the above together

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod config;
mod driver;
mod event;
mod input;
mod router;
mod runtime;
pub mod screen;
mod state;
mod store;

pub use action::{AppAction, StoreAction};
pub use app::App;
pub use bridge::Bridge;
pub use config::{PairingCompletion, ParsePairingCompletionError, RuntimeConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use router::Router;
pub use runtime::Runtime;
pub use screen::{Screen, ScreenContext};
pub use state::AppState;
pub use store::{Store, Subscriber, SubscriptionId};
