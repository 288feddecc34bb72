//! Application state store.
//!
//! The [`Store`] is the single owner of [`AppState`] and the only mutation
//! path into it. Every mutation is a [`StoreAction`] run through [`reduce`];
//! the named methods are thin wrappers. After each mutation every subscriber
//! is notified synchronously with the new state, before the next input is
//! processed.
//!
//! Subscribers only receive `&AppState`, so they cannot dispatch while being
//! notified.

use std::fmt;

use voicebridge_core::{AudioSettingsPatch, DeviceStatus, Message, ViewState};

use crate::{AppAction, AppState, StoreAction};

/// Handle returned by [`Store::subscribe`].
pub type SubscriptionId = u64;

/// Receives the new state after every store mutation.
pub trait Subscriber: Send {
    /// Called once per mutation, after the state was updated.
    fn notify(&mut self, state: &AppState);
}

impl<F> Subscriber for F
where
    F: FnMut(&AppState) + Send,
{
    fn notify(&mut self, state: &AppState) {
        self(state);
    }
}

/// Single owner of mutable application state.
pub struct Store {
    state: AppState,
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    /// Create a store owning `state`, with no subscribers.
    pub fn new(state: AppState) -> Self {
        Self { state, subscribers: Vec::new(), next_subscription: 0 }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a mutation, notify subscribers and return follow-up actions.
    pub fn dispatch(&mut self, action: StoreAction) -> Vec<AppAction> {
        tracing::trace!(?action, "dispatch");
        let actions = reduce(&mut self.state, action);
        for (_, subscriber) in &mut self.subscribers {
            subscriber.notify(&self.state);
        }
        actions
    }

    /// Register a subscriber. It is not notified of the current state.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Drop all subscribers and hand back the final state.
    pub fn teardown(self) -> AppState {
        tracing::debug!(subscribers = self.subscribers.len(), "store teardown");
        self.state
    }

    /// Replace the current view.
    pub fn set_view(&mut self, view: ViewState) -> Vec<AppAction> {
        self.dispatch(StoreAction::SetView(view))
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) -> Vec<AppAction> {
        self.dispatch(StoreAction::ToggleTheme)
    }

    /// Flip the microphone display flag.
    pub fn toggle_mic(&mut self) -> Vec<AppAction> {
        self.dispatch(StoreAction::ToggleMic)
    }

    /// Append a message. The caller provides a fresh id.
    pub fn add_message(&mut self, message: Message) -> Vec<AppAction> {
        self.dispatch(StoreAction::AddMessage(message))
    }

    /// Start pairing with a device. Unknown ids are ignored.
    pub fn connect_device(&mut self, device_id: impl Into<String>) -> Vec<AppAction> {
        self.dispatch(StoreAction::ConnectDevice { device_id: device_id.into() })
    }

    /// Replace the room code.
    pub fn set_room_code(&mut self, code: Option<String>) -> Vec<AppAction> {
        self.dispatch(StoreAction::SetRoomCode(code))
    }

    /// Merge a partial audio settings update.
    pub fn update_audio_settings(&mut self, patch: AudioSettingsPatch) -> Vec<AppAction> {
        self.dispatch(StoreAction::UpdateAudioSettings(patch))
    }

    /// Overwrite a message's translated text. Unknown ids are ignored.
    pub fn apply_translation(
        &mut self,
        message_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Vec<AppAction> {
        self.dispatch(StoreAction::ApplyTranslation {
            message_id: message_id.into(),
            text: text.into(),
        })
    }

    /// Record a device's pairing status. Unknown ids are ignored.
    pub fn set_device_status(
        &mut self,
        device_id: impl Into<String>,
        status: DeviceStatus,
    ) -> Vec<AppAction> {
        self.dispatch(StoreAction::SetDeviceStatus { device_id: device_id.into(), status })
    }
}

/// Apply one mutation to `state`.
///
/// Total: no action fails. Lookups by id that find nothing leave the state
/// unchanged.
pub fn reduce(state: &mut AppState, action: StoreAction) -> Vec<AppAction> {
    match action {
        StoreAction::SetView(view) => {
            state.current_view = view;
            vec![]
        },
        StoreAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            vec![]
        },
        StoreAction::ToggleMic => {
            state.is_mic_active = !state.is_mic_active;
            vec![]
        },
        StoreAction::AddMessage(message) => {
            state.messages.push(message);
            vec![]
        },
        StoreAction::ConnectDevice { device_id } => {
            match state.devices.iter_mut().find(|d| d.id == device_id) {
                Some(device) => {
                    device.status = DeviceStatus::Connecting;
                    vec![AppAction::PairDevice { device_id }]
                },
                None => {
                    tracing::debug!(%device_id, "connect requested for unknown device");
                    vec![]
                },
            }
        },
        StoreAction::SetRoomCode(code) => {
            state.room_code = code;
            vec![]
        },
        StoreAction::UpdateAudioSettings(patch) => {
            state.audio_settings.merge(patch);
            vec![]
        },
        StoreAction::ApplyTranslation { message_id, text } => {
            match state.messages.iter_mut().find(|m| m.id == message_id) {
                Some(message) => message.text_translated = text,
                None => tracing::debug!(%message_id, "translation for removed message dropped"),
            }
            vec![]
        },
        StoreAction::SetDeviceStatus { device_id, status } => {
            if let Some(device) = state.devices.iter_mut().find(|d| d.id == device_id) {
                device.status = status;
            }
            vec![]
        },
    }
}
