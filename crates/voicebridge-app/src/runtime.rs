//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: store, router and screens
//! - [`Bridge`]: translation and pairing requests
//! - [`Driver`]: platform-specific I/O
//!
//! Input events and service completions are processed one at a time on the
//! loop's task, so state is never touched concurrently.

use voicebridge_core::Environment;

use crate::{App, AppAction, AppEvent, Bridge, Driver, RuntimeConfig};

/// Generic runtime that orchestrates App, Bridge, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
#[derive(Debug)]
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    bridge: Bridge,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime from its parts.
    pub fn new(driver: D, app: App, bridge: Bridge) -> Self {
        Self { driver, app, bridge }
    }

    /// Create a runtime over the seed data and the mock services.
    pub fn with_mocks<E: Environment>(driver: D, env: E, config: &RuntimeConfig) -> Self {
        let app = App::with_fixtures(driver.now_millis());
        let bridge = Bridge::with_mocks(env, config);
        Self::new(driver, app, bridge)
    }

    /// Run the main event loop until the App quits or input ends.
    ///
    /// Pending requests are cancelled and the driver is stopped on every
    /// exit path. Returns the App in its final state.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        let result = self.event_loop().await;

        self.bridge.cancel_all();
        self.driver.stop();
        tracing::info!(view = %self.app.state().current_view, "runtime stopped");

        result.map(|()| self.app)
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let event = tokio::select! {
                biased;

                Some(event) = self.bridge.next_event() => event,

                polled = self.driver.poll_event() => match polled? {
                    Some(event) => event,
                    None => {
                        tracing::debug!("input exhausted");
                        return Ok(());
                    },
                },
            };

            if self.process_event(event)? {
                return Ok(());
            }
        }
    }

    /// Hand one event to the App and execute what it asks for.
    ///
    /// Returns `true` if the application should quit.
    fn process_event(&mut self, event: AppEvent) -> Result<bool, D::Error> {
        if !self.bridge.settle(&event) {
            tracing::debug!(?event, "dropping completion of a cancelled request");
            return Ok(false);
        }
        let now_ms = self.driver.now_millis();
        let actions = self.app.handle(event, now_ms);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),

                // Service requests go through the bridge
                AppAction::Translate { .. } | AppAction::PairDevice { .. } => {
                    self.bridge.process_app_action(action);
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Bridge
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}
