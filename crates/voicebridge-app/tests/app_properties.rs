//! Property-based tests for the store, router and App.
//!
//! Tests verify that invariants hold under arbitrary input sequences.

use proptest::prelude::*;
use voicebridge_app::{App, AppEvent, AppState, KeyInput, Router, Store, screen::HomeScreen};
use voicebridge_core::{
    AudioSettingsPatch, Language, Message, Theme, ViewState, model::AUDIO_LEVEL_MAX,
};

const NOW: u64 = 1_704_067_200_000;

fn view_strategy() -> impl Strategy<Value = ViewState> {
    prop::sample::select(ViewState::ALL.to_vec())
}

/// Generate random key presses, weighted towards keys that navigate.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        3 => prop::sample::select(vec!['c', 'j', 's', 'd', 'p', 'r', 'a', '7']).prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Tab),
        2 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        2 => Just(KeyInput::Up),
        2 => Just(KeyInput::Down),
    ]
}

fn message(id: usize, text: &str) -> Message {
    Message {
        id: format!("m{id}"),
        sender_id: "u1".into(),
        sender_name: "Ahmet Yılmaz".into(),
        avatar: String::new(),
        text_original: text.into(),
        text_translated: "...".into(),
        timestamp_ms: NOW,
        language: Language::Tr,
        is_me: true,
    }
}

/// Everything but the translation must be unchanged.
fn same_except_translation(before: &Message, after: &Message) -> bool {
    Message { text_translated: after.text_translated.clone(), ..before.clone() } == *after
}

proptest! {
    #[test]
    fn prop_router_shows_latest_view(views in prop::collection::vec(view_strategy(), 1..30)) {
        let mut app = App::with_fixtures(NOW);

        for view in &views {
            app.store_mut().set_view(*view);
            app.handle(AppEvent::Tick, NOW);
            prop_assert_eq!(app.shown_view(), *view);
            prop_assert_eq!(app.active_screen().view(), *view);
        }
    }

    #[test]
    fn prop_unregistered_views_show_home(views in prop::collection::vec(view_strategy(), 1..30)) {
        let mut app = App::new(AppState::fixture(NOW), Router::new(HomeScreen::new()), NOW);

        for view in views {
            app.store_mut().set_view(view);
            app.handle(AppEvent::Tick, NOW);
            prop_assert_eq!(app.state().current_view, view);
            prop_assert_eq!(app.shown_view(), ViewState::Home);
        }
    }

    #[test]
    fn prop_add_message_is_append_only(texts in prop::collection::vec(".{0,20}", 1..20)) {
        let mut store = Store::new(AppState::fixture(NOW));

        for (i, text) in texts.iter().enumerate() {
            let before = store.state().messages.clone();
            store.add_message(message(i, text));
            let after = &store.state().messages;

            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(&after[before.len()].text_original, text);
        }
    }

    #[test]
    fn prop_theme_toggle_is_involution(start_dark in any::<bool>(), flips in 0usize..10) {
        let mut state = AppState::fixture(NOW);
        state.theme = if start_dark { Theme::Dark } else { Theme::Light };
        let original = state.theme;
        let mut store = Store::new(state);

        for _ in 0..flips {
            store.toggle_theme();
            store.toggle_theme();
        }

        prop_assert_eq!(store.state().theme, original);
    }

    #[test]
    fn prop_unknown_device_ids_change_nothing(id in "[a-z0-9]{1,8}") {
        prop_assume!(!["1", "2", "3"].contains(&id.as_str()));
        let mut store = Store::new(AppState::fixture(NOW));
        let before = store.state().devices.clone();

        let actions = store.connect_device(id);

        prop_assert!(actions.is_empty());
        prop_assert_eq!(&store.state().devices, &before);
    }

    #[test]
    fn prop_audio_patch_touches_only_given_field(volume in any::<u8>()) {
        let mut store = Store::new(AppState::fixture(NOW));
        let before = store.state().audio_settings;

        store.update_audio_settings(AudioSettingsPatch::speaker_volume(volume));

        let after = store.state().audio_settings;
        prop_assert_eq!(after.speaker_volume, volume.min(AUDIO_LEVEL_MAX));
        prop_assert_eq!(after.mic_sensitivity, before.mic_sensitivity);
        prop_assert_eq!(after.echo_cancellation, before.echo_cancellation);
        prop_assert_eq!(after.noise_reduction, before.noise_reduction);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_app_invariants_hold(keys in prop::collection::vec(key_strategy(), 0..80)) {
        let mut app = App::with_fixtures(NOW);

        for (step, key) in keys.into_iter().enumerate() {
            let before = app.state().messages.clone();
            app.handle(AppEvent::Key(key), NOW + step as u64);
            let state = app.state();

            // One screen, matching the store's view
            prop_assert_eq!(app.shown_view(), state.current_view);

            // Messages only grow; earlier ones keep everything but the translation
            prop_assert!(state.messages.len() >= before.len());
            for (old, new) in before.iter().zip(&state.messages) {
                prop_assert!(same_except_translation(old, new));
            }

            // Message ids stay unique
            let mut ids: Vec<_> = state.messages.iter().map(|m| &m.id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), state.messages.len());

            prop_assert!(state.audio_settings.speaker_volume <= AUDIO_LEVEL_MAX);
            prop_assert!(state.audio_settings.mic_sensitivity <= AUDIO_LEVEL_MAX);
        }
    }
}
