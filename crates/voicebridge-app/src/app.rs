//! Application state machine.
//!
//! This module defines [`App`], which ties the [`Store`] to the [`Router`]. It
//! consumes [`AppEvent`]s and produces [`AppAction`]s for the runtime to
//! execute; it never performs I/O itself.
//!
//! # Responsibilities
//!
//! - Routes key presses and ticks to the active screen.
//! - Applies translation and pairing completions through the store.
//! - Keeps the router in step with the store's current view.
//! - Requests a render whenever the store changed.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use voicebridge_core::{DeviceStatus, ViewState};

use crate::{AppAction, AppEvent, AppState, Router, Screen, ScreenContext, Store, SubscriptionId};

/// Application state machine.
#[derive(Debug)]
pub struct App {
    store: Store,
    router: Router,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Set by a store subscriber on every mutation, cleared after each event.
    dirty: Arc<AtomicBool>,
    render_subscription: SubscriptionId,
}

impl App {
    /// Create an App over `state`, showing the screen for its current view.
    pub fn new(state: AppState, router: Router, now_ms: u64) -> Self {
        let mut store = Store::new(state);
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        let render_subscription = store.subscribe(move |_: &AppState| {
            flag.store(true, Ordering::Release);
        });

        let mut router = router;
        router.sync(store.state().current_view, now_ms);

        Self { store, router, terminal_size: (80, 24), dirty, render_subscription }
    }

    /// App over the prototype's seed data with every screen registered.
    pub fn with_fixtures(now_ms: u64) -> Self {
        Self::new(AppState::fixture(now_ms), Router::standard(), now_ms)
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent, now_ms: u64) -> Vec<AppAction> {
        let mut actions = match event {
            AppEvent::Key(key) => {
                let mut ctx = ScreenContext { store: &mut self.store, now_ms };
                self.router.active_mut().handle_key(key, &mut ctx)
            },
            AppEvent::Tick => self.router.active_mut().tick(now_ms),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::TranslationReady { message_id, text } => {
                tracing::debug!(%message_id, "translation ready");
                self.store.apply_translation(message_id, text)
            },
            AppEvent::TranslationFailed { message_id, error } => {
                tracing::warn!(
                    %message_id,
                    %error,
                    transient = error.is_transient(),
                    "translation failed, keeping placeholder"
                );
                vec![]
            },
            AppEvent::PairingFinished { device_id, result: Ok(()) } => {
                tracing::info!(%device_id, "device connected");
                self.store.set_device_status(device_id, DeviceStatus::Connected)
            },
            AppEvent::PairingFinished { device_id, result: Err(error) } => {
                tracing::warn!(
                    %device_id,
                    %error,
                    transient = error.is_transient(),
                    "pairing failed, device available again"
                );
                self.store.set_device_status(device_id, DeviceStatus::Available)
            },
        };

        self.router.sync(self.store.state().current_view, now_ms);

        if self.dirty.swap(false, Ordering::AcqRel) && !actions.contains(&AppAction::Render) {
            actions.push(AppAction::Render);
        }
        actions
    }

    /// The store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The store, mutably. Mutations made here are rendered after the next
    /// event.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// The router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Screen being shown.
    pub fn active_screen(&self) -> &Screen {
        self.router.active()
    }

    /// View being shown. Differs from the store's view when that one has no
    /// screen registered.
    pub fn shown_view(&self) -> ViewState {
        self.router.current()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Tear down the store and return the final state.
    pub fn into_state(mut self) -> AppState {
        self.store.unsubscribe(self.render_subscription);
        self.store.teardown()
    }
}

#[cfg(test)]
mod tests {
    use voicebridge_core::{PairingError, TranslationError};

    use super::*;
    use crate::{KeyInput, screen::HomeScreen};

    const NOW: u64 = 1_704_067_200_000;

    fn keys(app: &mut App, keys: &[KeyInput]) -> Vec<AppAction> {
        let mut actions = Vec::new();
        for key in keys {
            actions = app.handle(AppEvent::Key(*key), NOW);
        }
        actions
    }

    #[test]
    fn store_mutation_requests_render() {
        let mut app = App::with_fixtures(NOW);

        let actions = keys(&mut app, &[KeyInput::Char('s')]);

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.shown_view(), ViewState::Settings);
    }

    #[test]
    fn unmapped_key_requests_nothing() {
        let mut app = App::with_fixtures(NOW);
        assert!(keys(&mut app, &[KeyInput::Char('z')]).is_empty());
    }

    #[test]
    fn sent_message_requests_translation_then_render() {
        let mut app = App::with_fixtures(NOW);
        keys(&mut app, &[KeyInput::Char('c'), KeyInput::Char('H'), KeyInput::Char('i')]);

        let actions = keys(&mut app, &[KeyInput::Enter]);

        assert!(matches!(actions.first(), Some(AppAction::Translate { .. })));
        assert_eq!(actions.last(), Some(&AppAction::Render));
    }

    #[test]
    fn translation_ready_rewrites_message() {
        let mut app = App::with_fixtures(NOW);

        let actions = app.handle(
            AppEvent::TranslationReady { message_id: "2".into(), text: "done".into() },
            NOW,
        );

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.state().message("2").map(|m| m.text_translated.as_str()), Some("done"));
    }

    #[test]
    fn translation_failure_keeps_placeholder() {
        let mut app = App::with_fixtures(NOW);
        let before = app.state().clone();

        let actions = app.handle(
            AppEvent::TranslationFailed {
                message_id: "1".into(),
                error: TranslationError::Unavailable { reason: "offline".into() },
            },
            NOW,
        );

        assert!(actions.is_empty());
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn pairing_result_sets_device_status() {
        let mut app = App::with_fixtures(NOW);
        app.store_mut().connect_device("2");
        app.store_mut().connect_device("3");

        app.handle(AppEvent::PairingFinished { device_id: "2".into(), result: Ok(()) }, NOW);
        app.handle(
            AppEvent::PairingFinished {
                device_id: "3".into(),
                result: Err(PairingError::Timeout { elapsed: std::time::Duration::from_secs(10) }),
            },
            NOW,
        );

        let status = |id: &str| app.state().device(id).map(|d| d.status);
        assert_eq!(status("2"), Some(DeviceStatus::Connected));
        assert_eq!(status("3"), Some(DeviceStatus::Available));
    }

    #[test]
    fn leaving_room_clears_draft() {
        let mut app = App::with_fixtures(NOW);
        keys(&mut app, &[KeyInput::Char('c'), KeyInput::Char('x')]);
        keys(&mut app, &[KeyInput::Esc, KeyInput::Char('c')]);

        let Screen::Room(room) = app.active_screen() else {
            panic!("expected room screen");
        };
        assert_eq!(room.draft(), "");
    }

    #[test]
    fn unregistered_view_shows_home() {
        let mut app = App::new(AppState::fixture(NOW), Router::new(HomeScreen::new()), NOW);

        app.store_mut().set_view(ViewState::Profile);
        app.handle(AppEvent::Tick, NOW);

        assert_eq!(app.state().current_view, ViewState::Profile);
        assert_eq!(app.shown_view(), ViewState::Home);
    }

    #[test]
    fn into_state_returns_final_state() {
        let mut app = App::with_fixtures(NOW);
        keys(&mut app, &[KeyInput::Char('p')]);

        assert_eq!(app.into_state().current_view, ViewState::Profile);
    }
}
