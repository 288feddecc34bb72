//! Translation service seam.
//!
//! The room screen appends a message with a placeholder translation and asks a
//! [`Translator`] for the real text. The result is written back by message id.
//! [`MockTranslator`] reproduces the prototype: a fixed delay, then a
//! deterministic placeholder derived from the original text.

use std::time::Duration;

use async_trait::async_trait;

use crate::{Environment, TranslationError, model::Language};

/// Text shown while a translation is pending.
pub const PENDING_TRANSLATION: &str = "Çeviri yapılıyor...";

/// Prefix the mock puts in front of the original text.
pub const MOCK_TRANSLATION_PREFIX: &str = "Mock Translated Text: ";

/// Default latency of the mock translator.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1500);

/// Translates text between two languages.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `from` into `to`.
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError>;
}

/// Deterministic placeholder the mock produces for `original`.
pub fn mock_translation(original: &str) -> String {
    format!("{MOCK_TRANSLATION_PREFIX}{original}")
}

/// Stand-in translator with fixed latency.
#[derive(Debug, Clone)]
pub struct MockTranslator<E: Environment> {
    env: E,
    delay: Duration,
}

impl<E: Environment> MockTranslator<E> {
    /// Create a mock that answers after `delay`.
    pub fn new(env: E, delay: Duration) -> Self {
        Self { env, delay }
    }

    /// Configured latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl<E: Environment> Translator for MockTranslator<E> {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        tracing::debug!(%from, %to, delay = ?self.delay, "mock translation scheduled");
        self.env.sleep(self.delay).await;
        Ok(mock_translation(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimEnv;

    #[test]
    fn placeholder_is_derived_from_original() {
        assert_eq!(mock_translation("Hi"), "Mock Translated Text: Hi");
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_delay() {
        let translator = MockTranslator::new(SimEnv::default(), DEFAULT_MOCK_DELAY);
        let start = tokio::time::Instant::now();

        let text = translator.translate("Merhaba", Language::Tr, Language::En).await;

        assert_eq!(text, Ok("Mock Translated Text: Merhaba".to_string()));
        assert!(start.elapsed() >= DEFAULT_MOCK_DELAY);
    }
}
