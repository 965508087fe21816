//! Configuration for a session engine instance.

use std::time::Duration;

/// Tunables for one [`crate::Session`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls and random wizard defaults.
    pub seed: u64,
    /// How long a cached adventure stays valid.
    pub cache_ttl: Duration,
    /// Await-reply timeout for single-field wizard steps.
    pub reply_timeout: Duration,
    /// Await-reply timeout for the multi-value skill step.
    pub skills_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cache_ttl: Duration::from_secs(300),
            reply_timeout: Duration::from_secs(30),
            skills_timeout: Duration::from_secs(60),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the adventure cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set both wizard timeouts at once, keeping the skill step at twice the
    /// single-field timeout.
    pub fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = timeout;
        self.skills_timeout = timeout * 2;
        self
    }
}
