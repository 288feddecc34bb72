//! Read-only profile and usage statistics.

use voicebridge_core::ViewState;

use crate::{AppAction, KeyInput, ScreenContext};

/// Hours spoken per weekday, Monday first.
pub const WEEKLY_ACTIVITY: [(&str, f32); 7] = [
    ("Mon", 2.5),
    ("Tue", 1.2),
    ("Wed", 3.8),
    ("Thu", 2.1),
    ("Fri", 4.5),
    ("Sat", 1.0),
    ("Sun", 0.5),
];

/// Share of talk time per language pair, in percent.
pub const LANGUAGE_SHARE: [(&str, u8); 3] = [("TR-EN", 65), ("TR-DE", 25), ("TR-FR", 10)];

/// Profile screen. Has no local state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileScreen;

impl ProfileScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => ctx.store.set_view(ViewState::Home),
            _ => vec![],
        }
    }
}
