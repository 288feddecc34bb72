//! Error types for the service seams.
//!
//! Store actions are total and never fail. Only the injectable translation
//! and pairing backends can fail, and the runtime absorbs their errors: a
//! failed translation keeps its placeholder, a failed pairing reverts the
//! device to `available`.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by a [`crate::Translator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Backend could not be reached or refused the request.
    #[error("translation unavailable: {reason}")]
    Unavailable {
        /// Backend-provided description.
        reason: String,
    },

    /// Request was cancelled before a result arrived.
    #[error("translation cancelled")]
    Cancelled,
}

impl TranslationError {
    /// Returns true if the same request may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Errors produced by a [`crate::PairingBackend`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// Device did not finish pairing in time.
    #[error("pairing timed out after {elapsed:?}")]
    Timeout {
        /// How long we waited.
        elapsed: Duration,
    },

    /// Device refused the pairing request.
    #[error("pairing rejected by device {device_id}: {reason}")]
    Rejected {
        /// Device that refused.
        device_id: String,
        /// Device-provided description.
        reason: String,
    },

    /// Bluetooth stack is not available.
    #[error("pairing backend unavailable: {reason}")]
    Unavailable {
        /// Backend-provided description.
        reason: String,
    },
}

impl PairingError {
    /// Returns true if the same request may succeed on retry.
    ///
    /// A rejection is a decision by the device and is never transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_are_transient() {
        assert!(PairingError::Timeout { elapsed: Duration::from_secs(10) }.is_transient());
        assert!(TranslationError::Unavailable { reason: "offline".into() }.is_transient());
    }

    #[test]
    fn rejection_and_cancellation_are_final() {
        let rejected = PairingError::Rejected { device_id: "2".into(), reason: "busy".into() };
        assert!(!rejected.is_transient());
        assert!(!TranslationError::Cancelled.is_transient());
    }

    #[test]
    fn rejection_message_names_device() {
        let err = PairingError::Rejected { device_id: "3".into(), reason: "PIN mismatch".into() };
        assert_eq!(err.to_string(), "pairing rejected by device 3: PIN mismatch");
    }
}
