//! Landing screen.
//!
//! Create a room (generates a code), join one by typing its code, or open
//! settings, devices or the profile.

use voicebridge_core::ViewState;

use crate::{AppAction, KeyInput, ScreenContext};

/// Length of a room code.
pub const ROOM_CODE_LEN: usize = 6;

const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Landing screen. Local state: the join-code entry, when open.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    join_code: Option<String>,
}

impl HomeScreen {
    /// Create the screen with the join entry closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Code typed so far. `None` if the join entry is closed.
    pub fn join_code(&self) -> Option<&str> {
        self.join_code.as_deref()
    }

    pub(crate) fn reset(&mut self) {
        self.join_code = None;
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        if self.join_code.is_some() {
            return self.handle_join_key(key, ctx);
        }

        match key {
            KeyInput::Char('c') => {
                let code = generate_room_code(ctx.now_ms);
                tracing::info!(%code, "room created");
                enter_room(ctx, code)
            },
            KeyInput::Char('j') => {
                self.join_code = Some(String::new());
                vec![AppAction::Render]
            },
            KeyInput::Char('s') => ctx.store.set_view(ViewState::Settings),
            KeyInput::Char('d') => ctx.store.set_view(ViewState::Bluetooth),
            KeyInput::Char('p') => ctx.store.set_view(ViewState::Profile),
            KeyInput::Char('q') | KeyInput::Esc => vec![AppAction::Quit],
            _ => vec![],
        }
    }

    fn handle_join_key(&mut self, key: KeyInput, ctx: &mut ScreenContext<'_>) -> Vec<AppAction> {
        let Some(code) = self.join_code.as_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Char(c) if code.len() < ROOM_CODE_LEN => {
                let upper = c.to_ascii_uppercase();
                if !u8::try_from(upper).is_ok_and(|b| ROOM_CODE_ALPHABET.contains(&b)) {
                    return vec![];
                }
                code.push(upper);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                code.pop();
                vec![AppAction::Render]
            },
            KeyInput::Enter if code.len() == ROOM_CODE_LEN => {
                let code = std::mem::take(code);
                self.join_code = None;
                tracing::info!(%code, "joining room");
                enter_room(ctx, code)
            },
            KeyInput::Esc => {
                self.join_code = None;
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }
}

fn enter_room(ctx: &mut ScreenContext<'_>, code: String) -> Vec<AppAction> {
    let mut actions = ctx.store.set_room_code(Some(code));
    actions.extend(ctx.store.set_view(ViewState::Room));
    actions
}

/// Six-character room code derived from a timestamp.
pub fn generate_room_code(seed: u64) -> String {
    let base = ROOM_CODE_ALPHABET.len() as u64;
    let mut value = seed;
    (0..ROOM_CODE_LEN)
        .map(|_| {
            let idx = (value % base) as usize;
            value /= base;
            char::from(ROOM_CODE_ALPHABET[idx])
        })
        .collect()
}
