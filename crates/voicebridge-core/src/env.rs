//! Environment abstraction for deterministic testing.
//!
//! Decouples screens and service mocks from the system clock. Production uses
//! [`SystemEnv`]; tests use [`SimEnv`], whose wall clock only moves when told
//! to.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// Abstract environment providing wall-clock time and async sleep.
///
/// # Invariants
///
/// - `now_millis()` is used for message ids and timestamps, so consecutive
///   calls should not go backwards within a session.
/// - `sleep()` must not block the calling thread.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Sleeps for the specified duration.
    ///
    /// Only service mocks and drivers sleep. State transitions never do.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production environment backed by the system clock and tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::disallowed_methods)]
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Simulation environment with a manually advanced wall clock.
///
/// Sleeping still goes through tokio, so tests that pause the tokio clock
/// control both timers and timestamps. Clones share the same clock.
#[derive(Debug, Clone)]
pub struct SimEnv {
    clock_ms: Arc<AtomicU64>,
}

impl SimEnv {
    /// Create a simulation environment starting at `start_ms`.
    pub fn starting_at(start_ms: u64) -> Self {
        Self { clock_ms: Arc::new(AtomicU64::new(start_ms)) }
    }

    /// Move the wall clock forward.
    pub fn advance(&self, by: Duration) {
        self.clock_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Default for SimEnv {
    fn default() -> Self {
        // 2024-01-01T00:00:00Z
        Self::starting_at(1_704_067_200_000)
    }
}

impl Environment for SimEnv {
    fn now_millis(&self) -> u64 {
        self.clock_ms.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_env_clock_is_shared_between_clones() {
        let env = SimEnv::starting_at(1_000);
        let other = env.clone();

        env.advance(Duration::from_millis(250));

        assert_eq!(other.now_millis(), 1_250);
    }

    #[test]
    fn system_env_is_after_2020() {
        assert!(SystemEnv::new().now_millis() > 1_577_836_800_000);
    }

    #[tokio::test(start_paused = true)]
    async fn sim_env_sleep_uses_tokio_clock() {
        let env = SimEnv::default();
        let start = tokio::time::Instant::now();

        env.sleep(Duration::from_secs(3)).await;

        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
