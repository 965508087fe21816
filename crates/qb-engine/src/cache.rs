//! TTL-bounded per-user cache of the last generated adventure.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

use crate::parser::ParsedScenario;
use crate::transport::UserId;

/// A user's pending adventure: narrative plus the authoritative choice map.
#[derive(Debug, Clone)]
pub struct Adventure {
    /// The scene text shown to the user.
    pub narrative: String,
    choices: Vec<String>,
    created: Instant,
}

impl Adventure {
    /// Choice texts in presentation order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Resolve a user-supplied choice key ("1".."N") to its text.
    pub fn choice(&self, key: &str) -> Option<&str> {
        let index: usize = key.trim().parse().ok()?;
        if index == 0 {
            return None;
        }
        self.choices.get(index - 1).map(String::as_str)
    }
}

/// Per-user store of the last generated adventure, valid for a fixed TTL.
///
/// A stale entry is evicted eagerly on the access that discovers it, never
/// silently reused. Storing overwrites any prior pending adventure for the
/// user: at most one pending adventure per user at a time.
#[derive(Debug)]
pub struct ScenarioCache {
    ttl: Duration,
    entries: HashMap<UserId, Adventure>,
}

impl ScenarioCache {
    /// Create an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Return the user's adventure if present and within TTL, evicting it
    /// first if it has expired.
    pub fn fresh(&mut self, user: &UserId) -> Option<&Adventure> {
        self.fresh_at(user, Instant::now())
    }

    fn fresh_at(&mut self, user: &UserId, now: Instant) -> Option<&Adventure> {
        match self.entries.get(user) {
            Some(entry) if now.duration_since(entry.created) < self.ttl => {}
            Some(_) => {
                self.entries.remove(user);
                return None;
            }
            None => return None,
        }
        self.entries.get(user)
    }

    /// Store a freshly parsed scenario for the user, overwriting any prior
    /// pending adventure.
    pub fn store(&mut self, user: UserId, parsed: ParsedScenario) -> &Adventure {
        self.store_at(user, parsed, Instant::now())
    }

    fn store_at(&mut self, user: UserId, parsed: ParsedScenario, now: Instant) -> &Adventure {
        let entry = Adventure {
            narrative: parsed.narrative,
            choices: parsed.choices,
            created: now,
        };
        match self.entries.entry(user) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    /// Number of cached entries, fresh or not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(tag: &str) -> ParsedScenario {
        ParsedScenario {
            narrative: format!("Narrative {tag}"),
            choices: vec![format!("{tag} A"), format!("{tag} B"), format!("{tag} C")],
        }
    }

    fn user() -> UserId {
        UserId::new("u1")
    }

    #[test]
    fn fresh_entry_is_returned_within_ttl() {
        let mut cache = ScenarioCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.store_at(user(), scenario("x"), t0);

        let adv = cache
            .fresh_at(&user(), t0 + Duration::from_secs(299))
            .unwrap();
        assert_eq!(adv.narrative, "Narrative x");
    }

    #[test]
    fn expired_entry_is_evicted_eagerly() {
        let mut cache = ScenarioCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.store_at(user(), scenario("x"), t0);

        assert!(cache.fresh_at(&user(), t0 + Duration::from_secs(300)).is_none());
        // Eviction happened on access, the entry is gone, not lingering.
        assert!(cache.is_empty());
    }

    #[test]
    fn store_overwrites_pending_adventure() {
        let mut cache = ScenarioCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.store_at(user(), scenario("old"), t0);
        cache.store_at(user(), scenario("new"), t0 + Duration::from_secs(1));

        let adv = cache.fresh_at(&user(), t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(adv.choice("1"), Some("new A"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn users_do_not_share_entries() {
        let mut cache = ScenarioCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.store_at(UserId::new("u1"), scenario("one"), t0);

        assert!(cache.fresh_at(&UserId::new("u2"), t0).is_none());
    }

    #[test]
    fn choice_keys_are_one_indexed() {
        let mut cache = ScenarioCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.store_at(user(), scenario("x"), t0);
        let adv = cache.fresh_at(&user(), t0).unwrap();

        assert_eq!(adv.choice("1"), Some("x A"));
        assert_eq!(adv.choice("3"), Some("x C"));
        assert_eq!(adv.choice("0"), None);
        assert_eq!(adv.choice("4"), None);
        assert_eq!(adv.choice("two"), None);
        assert_eq!(adv.choice(" 2 "), Some("x B"));
    }
}
