//! Runtime configuration.

use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;
use voicebridge_core::{pairing::DEFAULT_PAIRING_DELAY, translate::DEFAULT_MOCK_DELAY};

/// What happens after a device enters `connecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingCompletion {
    /// Leave the device in `connecting`. Nothing completes the pairing.
    #[default]
    Hold,
    /// Ask the pairing backend; `connected` on success, `available` on
    /// failure or timeout.
    Backend,
}

impl PairingCompletion {
    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::Backend => "backend",
        }
    }
}

impl fmt::Display for PairingCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown pairing completion mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pairing mode {0:?}, expected \"hold\" or \"backend\"")]
pub struct ParsePairingCompletionError(pub String);

impl FromStr for PairingCompletion {
    type Err = ParsePairingCompletionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hold" => Ok(Self::Hold),
            "backend" => Ok(Self::Backend),
            _ => Err(ParsePairingCompletionError(s.to_string())),
        }
    }
}

/// Tunables of the runtime and its mock services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Latency of the mock translator.
    pub translation_delay: Duration,
    /// Pairing completion mode.
    pub pairing: PairingCompletion,
    /// Latency of the mock pairing backend.
    pub pairing_delay: Duration,
    /// Upper bound on one pairing attempt.
    pub pairing_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            translation_delay: DEFAULT_MOCK_DELAY,
            pairing: PairingCompletion::Hold,
            pairing_delay: DEFAULT_PAIRING_DELAY,
            pairing_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_mode_parses_case_insensitively() {
        assert_eq!("hold".parse(), Ok(PairingCompletion::Hold));
        assert_eq!(" Backend ".parse(), Ok(PairingCompletion::Backend));
        assert!("eventually".parse::<PairingCompletion>().is_err());
    }

    #[test]
    fn defaults_match_prototype() {
        let config = RuntimeConfig::default();
        assert_eq!(config.translation_delay, Duration::from_millis(1500));
        assert_eq!(config.pairing, PairingCompletion::Hold);
    }
}
