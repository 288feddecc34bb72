//! Searchable two-column transcript.

use voicebridge_core::{Language, Message, ViewState};

use crate::{AppAction, AppState, KeyInput, ScreenContext};

/// One line of a transcript column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRow<'a> {
    /// Message the line belongs to.
    pub message: &'a Message,
    /// Text shown in the column's language.
    pub text: &'a str,
    /// `true` if `text` is what the sender said, `false` if it is the
    /// translation.
    pub is_original: bool,
}

/// Transcript with a search filter.
#[derive(Debug, Clone, Default)]
pub struct TranscriptScreen {
    search: String,
}

impl TranscriptScreen {
    /// Create the screen with an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Messages matching the filter, in conversation order.
    pub fn filtered<'a>(&self, state: &'a AppState) -> Vec<&'a Message> {
        state.messages.iter().filter(|m| m.matches(&self.search)).collect()
    }

    /// Column for `language`.
    ///
    /// Messages spoken in `language` show their original text, every other
    /// message shows its translation.
    pub fn column<'a>(&self, state: &'a AppState, language: Language) -> Vec<TranscriptRow<'a>> {
        self.filtered(state)
            .into_iter()
            .map(|message| {
                let is_original = message.language == language;
                let text =
                    if is_original { &message.text_original } else { &message.text_translated };
                TranscriptRow { message, text, is_original }
            })
            .collect()
    }

    pub(crate) fn reset(&mut self) {
        self.search.clear();
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.search.push(c);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                self.search.pop();
                vec![AppAction::Render]
            },
            KeyInput::Esc => ctx.store.set_view(ViewState::Room),
            _ => vec![],
        }
    }
}
