//! Screen components.
//!
//! Each screen reads the store's state, calls store actions in response to
//! keys, and keeps only ephemeral UI state of its own (draft text, search
//! filter, modal flag, scan timer). That local state is reset whenever the
//! router leaves the screen.
//!
//! Screens are pure: they never perform I/O. Work that takes time is returned
//! as [`crate::AppAction`]s.

mod bluetooth;
mod home;
mod profile;
mod room;
mod settings;
mod transcript;

pub use bluetooth::{BluetoothScreen, SCAN_DURATION_MS};
pub use home::{HomeScreen, ROOM_CODE_LEN, generate_room_code};
pub use profile::{LANGUAGE_SHARE, ProfileScreen, WEEKLY_ACTIVITY};
pub use room::{AudioField, RoomScreen};
pub use settings::{SettingsRow, SettingsScreen};
pub use transcript::{TranscriptRow, TranscriptScreen};
use voicebridge_core::ViewState;

use crate::{AppAction, KeyInput, Store};

/// What a screen may touch while handling input.
pub struct ScreenContext<'a> {
    /// The application store.
    pub store: &'a mut Store,
    /// Wall-clock time of the input, milliseconds since the Unix epoch.
    pub now_ms: u64,
}

/// A registered screen.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Landing screen.
    Home(HomeScreen),
    /// Active conversation.
    Room(RoomScreen),
    /// Device pairing.
    Bluetooth(BluetoothScreen),
    /// Searchable transcript.
    Transcript(TranscriptScreen),
    /// Settings list.
    Settings(SettingsScreen),
    /// Profile and statistics.
    Profile(ProfileScreen),
}

impl Screen {
    /// The view this screen renders.
    pub fn view(&self) -> ViewState {
        match self {
            Self::Home(_) => ViewState::Home,
            Self::Room(_) => ViewState::Room,
            Self::Bluetooth(_) => ViewState::Bluetooth,
            Self::Transcript(_) => ViewState::Transcript,
            Self::Settings(_) => ViewState::Settings,
            Self::Profile(_) => ViewState::Profile,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyInput, ctx: &mut ScreenContext<'_>) -> Vec<AppAction> {
        match self {
            Self::Home(screen) => screen.handle_key(key, ctx),
            Self::Room(screen) => screen.handle_key(key, ctx),
            Self::Bluetooth(screen) => screen.handle_key(key, ctx),
            Self::Transcript(screen) => screen.handle_key(key, ctx),
            Self::Settings(screen) => screen.handle_key(key, ctx),
            Self::Profile(screen) => screen.handle_key(key, ctx),
        }
    }

    /// Periodic tick while this screen is shown.
    pub fn tick(&mut self, now_ms: u64) -> Vec<AppAction> {
        match self {
            Self::Bluetooth(screen) => screen.tick(now_ms),
            Self::Home(_)
            | Self::Room(_)
            | Self::Transcript(_)
            | Self::Settings(_)
            | Self::Profile(_) => vec![],
        }
    }

    /// The router switched to this screen.
    pub fn enter(&mut self, now_ms: u64) {
        if let Self::Bluetooth(screen) = self {
            screen.start_scan(now_ms);
        }
    }

    /// The router switched away from this screen. Drops ephemeral state.
    pub fn leave(&mut self) {
        match self {
            Self::Home(screen) => screen.reset(),
            Self::Room(screen) => screen.reset(),
            Self::Bluetooth(screen) => screen.reset(),
            Self::Transcript(screen) => screen.reset(),
            Self::Settings(screen) => screen.reset(),
            Self::Profile(_) => {},
        }
    }
}

impl From<HomeScreen> for Screen {
    fn from(screen: HomeScreen) -> Self {
        Self::Home(screen)
    }
}

impl From<RoomScreen> for Screen {
    fn from(screen: RoomScreen) -> Self {
        Self::Room(screen)
    }
}

impl From<BluetoothScreen> for Screen {
    fn from(screen: BluetoothScreen) -> Self {
        Self::Bluetooth(screen)
    }
}

impl From<TranscriptScreen> for Screen {
    fn from(screen: TranscriptScreen) -> Self {
        Self::Transcript(screen)
    }
}

impl From<SettingsScreen> for Screen {
    fn from(screen: SettingsScreen) -> Self {
        Self::Settings(screen)
    }
}

impl From<ProfileScreen> for Screen {
    fn from(screen: ProfileScreen) -> Self {
        Self::Profile(screen)
    }
}
