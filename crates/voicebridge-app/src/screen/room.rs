//! Active conversation screen.
//!
//! Typed characters build a draft; Enter sends it as a message with a
//! placeholder translation and requests the real one. Down opens the audio
//! settings modal, which edits the store's audio settings in place.

use voicebridge_core::{
    AudioSettingsPatch, Message, ViewState, translate::PENDING_TRANSLATION,
};

use crate::{AppAction, AppState, KeyInput, ScreenContext};

const SLIDER_STEP: u8 = 5;

/// Field of the audio settings modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioField {
    /// Output volume slider.
    #[default]
    SpeakerVolume,
    /// Microphone sensitivity slider.
    MicSensitivity,
    /// Echo cancellation switch.
    EchoCancellation,
    /// Noise reduction switch.
    NoiseReduction,
}

impl AudioField {
    /// All fields, top to bottom.
    pub const ALL: [Self; 4] =
        [Self::SpeakerVolume, Self::MicSensitivity, Self::EchoCancellation, Self::NoiseReduction];

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SpeakerVolume => "Speaker Volume",
            Self::MicSensitivity => "Mic Sensitivity",
            Self::EchoCancellation => "Echo Cancellation",
            Self::NoiseReduction => "Noise Reduction",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Patch that moves this field one step. `up` raises sliders; switches
    /// flip either way.
    fn adjust(self, state: &AppState, up: bool) -> AudioSettingsPatch {
        let audio = state.audio_settings;
        let step = |value: u8| {
            if up { value.saturating_add(SLIDER_STEP) } else { value.saturating_sub(SLIDER_STEP) }
        };
        match self {
            Self::SpeakerVolume => AudioSettingsPatch::speaker_volume(step(audio.speaker_volume)),
            Self::MicSensitivity => {
                AudioSettingsPatch::mic_sensitivity(step(audio.mic_sensitivity))
            },
            Self::EchoCancellation => {
                AudioSettingsPatch::echo_cancellation(!audio.echo_cancellation)
            },
            Self::NoiseReduction => AudioSettingsPatch::noise_reduction(!audio.noise_reduction),
        }
    }
}

/// Conversation screen. Local state: the draft and the modal selection.
#[derive(Debug, Clone, Default)]
pub struct RoomScreen {
    draft: String,
    modal: Option<AudioField>,
}

impl RoomScreen {
    /// Create the screen with an empty draft and the modal closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed but not yet sent.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Selected modal field. `None` if the modal is closed.
    pub fn modal(&self) -> Option<AudioField> {
        self.modal
    }

    pub(crate) fn reset(&mut self) {
        self.draft.clear();
        self.modal = None;
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        if let Some(field) = self.modal {
            return self.handle_modal_key(field, key, ctx);
        }

        match key {
            KeyInput::Char(c) => {
                self.draft.push(c);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                self.draft.pop();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.send(ctx),
            KeyInput::Tab => ctx.store.toggle_mic(),
            KeyInput::Esc => {
                tracing::info!("call ended");
                ctx.store.set_view(ViewState::Home)
            },
            KeyInput::Up => ctx.store.set_view(ViewState::Transcript),
            KeyInput::Down => {
                self.modal = Some(AudioField::default());
                vec![AppAction::Render]
            },
            KeyInput::Left | KeyInput::Right => vec![],
        }
    }

    fn handle_modal_key(
        &mut self,
        field: AudioField,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        match key {
            KeyInput::Up => {
                self.modal = Some(field.previous());
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.modal = Some(field.next());
                vec![AppAction::Render]
            },
            KeyInput::Left | KeyInput::Right => {
                let patch = field.adjust(ctx.store.state(), key == KeyInput::Right);
                ctx.store.update_audio_settings(patch)
            },
            KeyInput::Esc | KeyInput::Enter => {
                self.modal = None;
                vec![AppAction::Render]
            },
            KeyInput::Char(_) | KeyInput::Backspace | KeyInput::Tab => vec![],
        }
    }

    fn send(&mut self, ctx: &mut ScreenContext<'_>) -> Vec<AppAction> {
        let text = self.draft.trim();
        if text.is_empty() {
            return vec![];
        }
        let text = text.to_owned();
        self.draft.clear();

        let state = ctx.store.state();
        let id = fresh_message_id(state, ctx.now_ms);
        let pair = state.active_language_pair;
        let message = Message {
            id: id.clone(),
            sender_id: state.user.id.clone(),
            sender_name: state.user.name.clone(),
            avatar: state.user.avatar.clone(),
            text_original: text.clone(),
            text_translated: PENDING_TRANSLATION.to_owned(),
            timestamp_ms: ctx.now_ms,
            language: pair.from,
            is_me: true,
        };
        tracing::debug!(message_id = %id, "message sent");

        let mut actions = ctx.store.add_message(message);
        actions.push(AppAction::Translate {
            message_id: id,
            text,
            from: pair.from,
            to: pair.target_for(pair.from),
        });
        actions
    }
}

/// Timestamp-derived id, bumped until it is unused.
fn fresh_message_id(state: &AppState, now_ms: u64) -> String {
    let mut candidate = now_ms;
    while state.message(&candidate.to_string()).is_some() {
        candidate = candidate.saturating_add(1);
    }
    candidate.to_string()
}
