//! Engine configuration.

use std::time::Duration;

use crate::constants::DEFAULT_POLL_INTERVAL;

/// Tuning knobs for the refresh loop.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Cadence of periodic re-reads from the shared store.
    pub poll_interval: Duration,
    /// How long a cached table snapshot may serve repeated reads between
    /// ticks. Defaults to the poll cadence.
    pub cache_ttl: Duration,
}

impl SyncConfig {
    /// Override the poll cadence; the cache TTL follows it.
    ///
    /// Callers wiring user input through this should clamp against
    /// [`crate::constants::MIN_POLL_INTERVAL`] first. Tests use shorter
    /// intervals deliberately.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self.cache_ttl = interval;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            cache_ttl: DEFAULT_POLL_INTERVAL,
        }
    }
}
