//! Per-user, per-command cooldown tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::transport::UserId;

/// Once the entry map crosses this mark, expired entries are swept before
/// inserting, keeping the set bounded under many distinct users.
const SWEEP_THRESHOLD: usize = 1024;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The command may run; an expiry was recorded.
    Admitted,
    /// The command is still cooling down.
    Cooling {
        /// Remaining seconds, rounded up.
        remaining_secs: u64,
    },
}

/// Tracks at most one live expiry instant per (user, command) pair.
///
/// Entries are never explicitly deleted on expiry; they are superseded in
/// place on the next admitted call and bulk-swept once the map grows past a
/// high-water mark.
#[derive(Debug, Default)]
pub struct CooldownGate {
    entries: HashMap<(UserId, &'static str), Instant>,
}

impl CooldownGate {
    /// Create an empty gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and, if clear, reserve a cooldown window. A live entry denies
    /// with the rounded-up remaining seconds and performs no mutation. A
    /// zero duration always admits without recording anything.
    pub fn check_and_reserve(
        &mut self,
        user: &UserId,
        command: &'static str,
        duration: Duration,
    ) -> Admission {
        self.check_at(user, command, duration, Instant::now())
    }

    fn check_at(
        &mut self,
        user: &UserId,
        command: &'static str,
        duration: Duration,
        now: Instant,
    ) -> Admission {
        if let Some(expiry) = self.entries.get(&(user.clone(), command))
            && *expiry > now
        {
            let remaining = expiry.duration_since(now);
            return Admission::Cooling {
                remaining_secs: remaining.as_secs_f64().ceil() as u64,
            };
        }
        if duration.is_zero() {
            return Admission::Admitted;
        }
        if self.entries.len() >= SWEEP_THRESHOLD {
            self.sweep_at(now);
        }
        self.entries.insert((user.clone(), command), now + duration);
        Admission::Admitted
    }

    fn sweep_at(&mut self, now: Instant) {
        self.entries.retain(|_, expiry| *expiry > now);
    }

    /// Number of tracked entries, live or expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
