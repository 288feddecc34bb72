//! View router.
//!
//! Maps the store's current view to the one [`Screen`] that renders it.
//! Screens are registered by view; Home is required at construction and is
//! what every unregistered view falls back to.
//!
//! The router also remembers which screen was shown last. When the view
//! changes between two inputs, the screen being left drops its ephemeral state
//! and the screen being entered is told it is now visible.

use std::collections::BTreeMap;

use voicebridge_core::ViewState;

use crate::screen::{
    BluetoothScreen, HomeScreen, ProfileScreen, RoomScreen, Screen, SettingsScreen,
    TranscriptScreen,
};

/// Maps views to screens.
#[derive(Debug, Clone)]
pub struct Router {
    home: Screen,
    screens: BTreeMap<ViewState, Screen>,
    /// Resolved view of the screen shown last.
    current: ViewState,
}

impl Router {
    /// Router with only the Home screen registered.
    pub fn new(home: HomeScreen) -> Self {
        Self { home: Screen::Home(home), screens: BTreeMap::new(), current: ViewState::Home }
    }

    /// Router with every screen registered.
    pub fn standard() -> Self {
        let mut router = Self::new(HomeScreen::new());
        router.register(RoomScreen::new());
        router.register(BluetoothScreen::new());
        router.register(TranscriptScreen::new());
        router.register(SettingsScreen::new());
        router.register(ProfileScreen::new());
        router
    }

    /// Register a screen for the view it renders, replacing any previous one.
    pub fn register(&mut self, screen: impl Into<Screen>) {
        let screen = screen.into();
        match screen.view() {
            ViewState::Home => self.home = screen,
            view => {
                self.screens.insert(view, screen);
            },
        }
    }

    /// Whether `view` has a screen of its own.
    pub fn is_registered(&self, view: ViewState) -> bool {
        view == ViewState::Home || self.screens.contains_key(&view)
    }

    /// View whose screen renders `view`: itself if registered, else Home.
    pub fn resolve(&self, view: ViewState) -> ViewState {
        if self.is_registered(view) { view } else { ViewState::Home }
    }

    /// Resolved view of the active screen.
    pub fn current(&self) -> ViewState {
        self.current
    }

    /// The active screen.
    pub fn active(&self) -> &Screen {
        self.screens.get(&self.current).unwrap_or(&self.home)
    }

    /// The active screen, mutably.
    pub fn active_mut(&mut self) -> &mut Screen {
        match self.screens.get_mut(&self.current) {
            Some(screen) => screen,
            None => &mut self.home,
        }
    }

    /// Follow the store's current view.
    ///
    /// Returns `true` if the active screen changed.
    pub fn sync(&mut self, view: ViewState, now_ms: u64) -> bool {
        let target = self.resolve(view);
        if target != view {
            tracing::debug!(%view, "no screen registered, falling back to HOME");
        }
        if target == self.current {
            return false;
        }

        tracing::debug!(from = %self.current, to = %target, "view changed");
        self.active_mut().leave();
        self.current = target;
        self.active_mut().enter(now_ms);
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_view_falls_back_to_home() {
        let mut router = Router::new(HomeScreen::new());

        for view in ViewState::ALL {
            router.sync(view, 0);
            assert_eq!(router.active().view(), ViewState::Home);
        }
    }

    #[test]
    fn registered_views_resolve_to_themselves() {
        let mut router = Router::standard();

        for view in ViewState::ALL {
            router.sync(view, 0);
            assert_eq!(router.active().view(), view);
            assert_eq!(router.current(), view);
        }
    }

    #[test]
    fn sync_reports_changes_only() {
        let mut router = Router::standard();

        assert!(!router.sync(ViewState::Home, 0));
        assert!(router.sync(ViewState::Room, 0));
        assert!(!router.sync(ViewState::Room, 0));
    }

    #[test]
    fn entering_bluetooth_starts_a_scan() {
        let mut router = Router::standard();
        router.sync(ViewState::Bluetooth, 1_000);

        let Screen::Bluetooth(screen) = router.active() else {
            panic!("expected bluetooth screen");
        };
        assert!(screen.is_scanning());
    }

    #[test]
    fn register_replaces_previous_screen() {
        let mut router = Router::new(HomeScreen::new());
        assert!(!router.is_registered(ViewState::Profile));

        router.register(ProfileScreen::new());
        router.register(ProfileScreen::new());

        assert!(router.is_registered(ViewState::Profile));
        assert_eq!(router.resolve(ViewState::Profile), ViewState::Profile);
        assert_eq!(router.resolve(ViewState::Room), ViewState::Home);
    }
}
