//! Device pairing seam.
//!
//! `connect_device` moves a device to `connecting`. Whether anything ever
//! completes that transition is the runtime's choice; when it does, it asks a
//! [`PairingBackend`]. `Ok` means the device is now connected.

use std::{collections::HashSet, time::Duration};

use async_trait::async_trait;

use crate::{Environment, PairingError};

/// Default latency of the mock pairing backend.
pub const DEFAULT_PAIRING_DELAY: Duration = Duration::from_secs(2);

/// Pairs with a Bluetooth device.
#[async_trait]
pub trait PairingBackend: Send + Sync {
    /// Pair with the device. `Ok` means the device is connected.
    async fn pair(&self, device_id: &str) -> Result<(), PairingError>;
}

/// Stand-in pairing backend.
///
/// Succeeds after a fixed delay unless the device id was marked as rejecting.
#[derive(Debug, Clone)]
pub struct MockPairing<E: Environment> {
    env: E,
    delay: Duration,
    rejecting: HashSet<String>,
}

impl<E: Environment> MockPairing<E> {
    /// Create a mock that pairs every device after `delay`.
    pub fn new(env: E, delay: Duration) -> Self {
        Self { env, delay, rejecting: HashSet::new() }
    }

    /// Make pairing with `device_id` fail with [`PairingError::Rejected`].
    #[must_use]
    pub fn rejecting(mut self, device_id: impl Into<String>) -> Self {
        self.rejecting.insert(device_id.into());
        self
    }
}

#[async_trait]
impl<E: Environment> PairingBackend for MockPairing<E> {
    async fn pair(&self, device_id: &str) -> Result<(), PairingError> {
        self.env.sleep(self.delay).await;

        if self.rejecting.contains(device_id) {
            return Err(PairingError::Rejected {
                device_id: device_id.to_string(),
                reason: "pairing request declined".into(),
            });
        }

        tracing::debug!(device_id, "mock pairing complete");
        Ok(())
    }
}
