//! Service-to-Application translation layer.
//!
//! The [`Bridge`] runs the requests the state machines hand back as
//! [`AppAction`]s against the [`Translator`] and [`PairingBackend`] seams.
//!
//! # Responsibilities
//!
//! - Spawns one task per request and reports its outcome as an [`AppEvent`]
//!   over a channel the runtime selects on.
//! - Keeps an abort handle per pending request, keyed by message or device
//!   id, so requests can be cancelled individually or all at once.
//! - Applies the configured [`PairingCompletion`] mode and the per-attempt
//!   pairing timeout.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
    time::Duration,
};

use tokio::{sync::mpsc, task::AbortHandle};
use voicebridge_core::{
    Environment, Language, MockPairing, MockTranslator, PairingBackend, PairingError,
    TranslationError, Translator,
};

use crate::{AppAction, AppEvent, PairingCompletion, RuntimeConfig};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Bridge between the App and the service seams.
pub struct Bridge {
    translator: Arc<dyn Translator>,
    pairing: Arc<dyn PairingBackend>,
    completion: PairingCompletion,
    pairing_timeout: Duration,
    /// Pending translations by message id.
    translations: HashMap<String, AbortHandle>,
    /// Pending pairings by device id.
    pairings: HashMap<String, AbortHandle>,
    /// Message ids whose cancellation report is queued.
    cancelled: HashSet<String>,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("completion", &self.completion)
            .field("pairing_timeout", &self.pairing_timeout)
            .field("translations", &self.translations.len())
            .field("pairings", &self.pairings.len())
            .finish_non_exhaustive()
    }
}

impl Bridge {
    /// Create a bridge over the given services.
    pub fn new(
        translator: Arc<dyn Translator>,
        pairing: Arc<dyn PairingBackend>,
        config: &RuntimeConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            translator,
            pairing,
            completion: config.pairing,
            pairing_timeout: config.pairing_timeout,
            translations: HashMap::new(),
            pairings: HashMap::new(),
            cancelled: HashSet::new(),
            events_tx,
            events_rx,
        }
    }

    /// Create a bridge over the mock services, timed by `env`.
    pub fn with_mocks<E: Environment>(env: E, config: &RuntimeConfig) -> Self {
        let translator = MockTranslator::new(env.clone(), config.translation_delay);
        let pairing = MockPairing::new(env, config.pairing_delay);
        Self::new(Arc::new(translator), Arc::new(pairing), config)
    }

    /// Start the work an action asks for. Actions without service work are
    /// ignored.
    ///
    /// Must be called from within a tokio runtime.
    pub fn process_app_action(&mut self, action: AppAction) {
        match action {
            AppAction::Translate { message_id, text, from, to } => {
                self.spawn_translation(message_id, text, from, to);
            },
            AppAction::PairDevice { device_id } => match self.completion {
                PairingCompletion::Hold => {
                    tracing::debug!(%device_id, "pairing held, device stays connecting");
                },
                PairingCompletion::Backend => self.spawn_pairing(device_id),
            },
            AppAction::Render | AppAction::Quit => {},
        }
    }

    /// Wait for the next completion. Cancel-safe.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Forget the request a completion belongs to. Call before handing the
    /// event to the App.
    ///
    /// Returns `false` for a completion of a request that is no longer
    /// pending, such as a result queued just before its translation was
    /// cancelled. Such events must not reach the App. Input events always
    /// return `true`.
    pub fn settle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::TranslationFailed { message_id, error: TranslationError::Cancelled } => {
                self.cancelled.remove(message_id) || self.translations.remove(message_id).is_some()
            },
            AppEvent::TranslationReady { message_id, .. }
            | AppEvent::TranslationFailed { message_id, .. } => {
                self.translations.remove(message_id).is_some()
            },
            AppEvent::PairingFinished { device_id, .. } => self.pairings.remove(device_id).is_some(),
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => true,
        }
    }

    /// Cancel a pending translation. The message keeps its placeholder, even
    /// if the result was already queued: [`Bridge::settle`] rejects it.
    ///
    /// Returns `false` if no translation for `message_id` was pending.
    pub fn cancel_translation(&mut self, message_id: &str) -> bool {
        let Some(handle) = self.translations.remove(message_id) else {
            return false;
        };
        handle.abort();
        tracing::debug!(%message_id, "translation cancelled");

        let event = AppEvent::TranslationFailed {
            message_id: message_id.to_string(),
            error: TranslationError::Cancelled,
        };
        if self.events_tx.try_send(event).is_ok() {
            self.cancelled.insert(message_id.to_string());
        } else {
            tracing::debug!(%message_id, "event channel full, cancellation not reported");
        }
        true
    }

    /// Abort every pending request without reporting them.
    pub fn cancel_all(&mut self) {
        let pending = self.pending();
        if pending > 0 {
            tracing::debug!(pending, "cancelling pending requests");
        }
        for (_, handle) in self.translations.drain().chain(self.pairings.drain()) {
            handle.abort();
        }
        self.cancelled.clear();
    }

    /// Number of requests not yet settled.
    pub fn pending(&self) -> usize {
        self.translations.len() + self.pairings.len()
    }

    /// Whether a translation for `message_id` is pending.
    pub fn is_translating(&self, message_id: &str) -> bool {
        self.translations.contains_key(message_id)
    }

    /// Whether pairing with `device_id` is pending.
    pub fn is_pairing(&self, device_id: &str) -> bool {
        self.pairings.contains_key(device_id)
    }

    fn spawn_translation(&mut self, message_id: String, text: String, from: Language, to: Language) {
        let translator = Arc::clone(&self.translator);
        let tx = self.events_tx.clone();
        let id = message_id.clone();

        let task = tokio::spawn(async move {
            let event = match translator.translate(&text, from, to).await {
                Ok(text) => AppEvent::TranslationReady { message_id: id, text },
                Err(error) => AppEvent::TranslationFailed { message_id: id, error },
            };
            if tx.send(event).await.is_err() {
                tracing::trace!("bridge gone, translation dropped");
            }
        });

        if let Some(previous) = self.translations.insert(message_id, task.abort_handle()) {
            previous.abort();
        }
    }

    fn spawn_pairing(&mut self, device_id: String) {
        if self.pairings.contains_key(&device_id) {
            tracing::debug!(%device_id, "pairing already in progress");
            return;
        }

        let backend = Arc::clone(&self.pairing);
        let timeout = self.pairing_timeout;
        let tx = self.events_tx.clone();
        let id = device_id.clone();

        let task = tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, backend.pair(&id)).await {
                Ok(result) => result,
                Err(_) => Err(PairingError::Timeout { elapsed: timeout }),
            };
            if tx.send(AppEvent::PairingFinished { device_id: id, result }).await.is_err() {
                tracing::trace!("bridge gone, pairing result dropped");
            }
        });

        self.pairings.insert(device_id, task.abort_handle());
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use voicebridge_core::{SimEnv, translate::mock_translation};

    use super::*;

    fn config(completion: PairingCompletion) -> RuntimeConfig {
        RuntimeConfig { pairing: completion, ..RuntimeConfig::default() }
    }

    fn translate(id: &str, text: &str) -> AppAction {
        AppAction::Translate {
            message_id: id.into(),
            text: text.into(),
            from: Language::Tr,
            to: Language::En,
        }
    }

    async fn quiet_for(bridge: &mut Bridge, duration: Duration) -> bool {
        tokio::time::timeout(duration, bridge.next_event()).await.is_err()
    }

    #[tokio::test(start_paused = true)]
    async fn translation_arrives_after_delay() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &RuntimeConfig::default());
        bridge.process_app_action(translate("4", "Selam"));
        assert!(bridge.is_translating("4"));

        assert!(quiet_for(&mut bridge, Duration::from_millis(1400)).await);

        let event = bridge.next_event().await;
        assert_eq!(
            event,
            Some(AppEvent::TranslationReady { message_id: "4".into(), text: mock_translation("Selam") })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn settle_forgets_request() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &RuntimeConfig::default());
        bridge.process_app_action(translate("4", "Selam"));

        let event = bridge.next_event().await;
        assert!(event.is_some_and(|event| bridge.settle(&event)));

        assert_eq!(bridge.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_translation_reports_cancelled_once() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &RuntimeConfig::default());
        bridge.process_app_action(translate("4", "Selam"));

        assert!(bridge.cancel_translation("4"));
        assert!(!bridge.cancel_translation("4"));

        assert_eq!(
            bridge.next_event().await,
            Some(AppEvent::TranslationFailed {
                message_id: "4".into(),
                error: TranslationError::Cancelled
            })
        );
        assert!(quiet_for(&mut bridge, Duration::from_secs(5)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_rejects_result_queued_before_it() {
        let config = RuntimeConfig { translation_delay: Duration::ZERO, ..RuntimeConfig::default() };
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config);
        bridge.process_app_action(translate("4", "Hi"));

        // Let the task finish and queue its result
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(bridge.cancel_translation("4"));

        let ready = bridge.next_event().await;
        assert_eq!(
            ready,
            Some(AppEvent::TranslationReady { message_id: "4".into(), text: mock_translation("Hi") })
        );
        assert!(ready.is_some_and(|event| !bridge.settle(&event)));

        let cancelled = bridge.next_event().await;
        assert_eq!(
            cancelled,
            Some(AppEvent::TranslationFailed {
                message_id: "4".into(),
                error: TranslationError::Cancelled
            })
        );
        assert!(cancelled.is_some_and(|event| bridge.settle(&event)));
        assert_eq!(bridge.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_rejects_unknown_completions() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config(PairingCompletion::Backend));

        assert!(!bridge.settle(&AppEvent::TranslationReady {
            message_id: "9".into(),
            text: "late".into()
        }));
        assert!(!bridge.settle(&AppEvent::PairingFinished { device_id: "9".into(), result: Ok(()) }));
        assert!(bridge.settle(&AppEvent::Tick));
    }

    #[tokio::test(start_paused = true)]
    async fn hold_never_completes_pairing() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config(PairingCompletion::Hold));
        bridge.process_app_action(AppAction::PairDevice { device_id: "2".into() });

        assert!(!bridge.is_pairing("2"));
        assert!(quiet_for(&mut bridge, Duration::from_secs(60)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_reports_pairing_result() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config(PairingCompletion::Backend));
        bridge.process_app_action(AppAction::PairDevice { device_id: "2".into() });
        bridge.process_app_action(AppAction::PairDevice { device_id: "2".into() });
        assert_eq!(bridge.pending(), 1);

        assert_eq!(
            bridge.next_event().await,
            Some(AppEvent::PairingFinished { device_id: "2".into(), result: Ok(()) })
        );
        assert!(quiet_for(&mut bridge, Duration::from_secs(10)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_pairing_times_out() {
        let config = RuntimeConfig {
            pairing: PairingCompletion::Backend,
            pairing_delay: Duration::from_secs(60),
            pairing_timeout: Duration::from_secs(3),
            ..RuntimeConfig::default()
        };
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config);
        bridge.process_app_action(AppAction::PairDevice { device_id: "3".into() });

        assert_eq!(
            bridge.next_event().await,
            Some(AppEvent::PairingFinished {
                device_id: "3".into(),
                result: Err(PairingError::Timeout { elapsed: Duration::from_secs(3) }),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_silences_everything() {
        let mut bridge = Bridge::with_mocks(SimEnv::default(), &config(PairingCompletion::Backend));
        bridge.process_app_action(translate("4", "a"));
        bridge.process_app_action(translate("5", "b"));
        bridge.process_app_action(AppAction::PairDevice { device_id: "2".into() });
        assert_eq!(bridge.pending(), 3);

        bridge.cancel_all();

        assert_eq!(bridge.pending(), 0);
        assert!(quiet_for(&mut bridge, Duration::from_secs(30)).await);
    }
}
