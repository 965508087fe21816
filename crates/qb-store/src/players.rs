//! The active profile store and its parallel archive.
//!
//! Both collections are whole-loaded at open and whole-saved on every
//! mutation. Saves go through a temp file followed by a rename so a profile
//! file is never left half-written. The archive-then-delete sequence writes
//! the archive before touching the active collection, so an interruption in
//! between leaves the profile in both places rather than in neither.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::profile::PlayerProfile;

const ACTIVE_FILE: &str = "players.json";
const ARCHIVE_FILE: &str = "archive.json";

/// Durable store of player profiles with a soft-delete archive.
#[derive(Debug)]
pub struct PlayerStore {
    dir: PathBuf,
    active: BTreeMap<String, PlayerProfile>,
    archive: BTreeMap<String, PlayerProfile>,
}

impl PlayerStore {
    /// Open the store rooted at `dir`, creating the directory if needed and
    /// loading any existing collections.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let active = load_collection(&dir.join(ACTIVE_FILE))?;
        let archive = load_collection(&dir.join(ARCHIVE_FILE))?;
        Ok(Self {
            dir,
            active,
            archive,
        })
    }

    /// Register a new profile. Rejects (without overwriting) if the user key
    /// is already present.
    pub fn register(&mut self, profile: PlayerProfile) -> StoreResult<()> {
        if self.active.contains_key(&profile.user) {
            return Err(StoreError::AlreadyRegistered(profile.user.clone()));
        }
        self.active.insert(profile.user.clone(), profile);
        self.save_active()
    }

    /// Look up an active profile.
    pub fn get(&self, user: &str) -> Option<&PlayerProfile> {
        self.active.get(user)
    }

    /// Append a chosen action to an existing profile's history.
    pub fn append_history(&mut self, user: &str, action: &str) -> StoreResult<()> {
        let profile = self
            .active
            .get_mut(user)
            .ok_or_else(|| StoreError::NotFound(user.into()))?;
        profile.history.push(action.into());
        self.save_active()
    }

    /// Move a profile into the archive (overwriting any prior archive entry
    /// for that key), then remove it from the active store. Returns the
    /// archived profile.
    pub fn archive_and_delete(&mut self, user: &str) -> StoreResult<PlayerProfile> {
        let profile = self
            .active
            .get(user)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(user.into()))?;

        // Archive write must land before the active record disappears.
        self.archive.insert(user.into(), profile.clone());
        self.save_archive()?;

        self.active.remove(user);
        self.save_active()?;
        Ok(profile)
    }

    /// Look up an archived profile.
    pub fn get_archived(&self, user: &str) -> Option<&PlayerProfile> {
        self.archive.get(user)
    }

    /// Iterate over active profiles in key order.
    pub fn active(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.active.values()
    }

    /// Iterate over archived profiles in key order.
    pub fn archived(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.archive.values()
    }

    /// Number of active profiles.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether there are no active profiles.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn save_active(&self) -> StoreResult<()> {
        save_collection(&self.dir.join(ACTIVE_FILE), &self.active)
    }

    fn save_archive(&self) -> StoreResult<()> {
        save_collection(&self.dir.join(ARCHIVE_FILE), &self.archive)
    }
}

fn load_collection(path: &Path) -> StoreResult<BTreeMap<String, PlayerProfile>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Atomic whole-collection save: write a sibling temp file, then rename.
fn save_collection(path: &Path, map: &BTreeMap<String, PlayerProfile>) -> StoreResult<()> {
    let text = serde_json::to_string_pretty(map)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, text)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PlayerStore) {
        let dir = TempDir::new().unwrap();
        let store = PlayerStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn register_and_get() {
        let (_dir, mut store) = store();
        store
            .register(PlayerProfile::synthesized("u1"))
            .unwrap();
        assert!(store.get("u1").is_some());
        assert!(store.get("u2").is_none());
    }

    #[test]
    fn register_is_idempotent_rejecting() {
        let (_dir, mut store) = store();
        let mut first = PlayerProfile::synthesized("u1");
        first.name = "First".into();
        store.register(first).unwrap();

        let mut second = PlayerProfile::synthesized("u1");
        second.name = "Second".into();
        let err = store.register(second).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyRegistered(_)));
        assert_eq!(store.get("u1").unwrap().name, "First");
    }

    #[test]
    fn append_history() {
        let (_dir, mut store) = store();
        store
            .register(PlayerProfile::synthesized("u1"))
            .unwrap();
        store.append_history("u1", "Enter the cave").unwrap();
        store.append_history("u1", "Light a torch").unwrap();
        assert_eq!(
            store.get("u1").unwrap().history,
            vec!["Enter the cave", "Light a torch"]
        );
    }

    #[test]
    fn append_history_unknown_user() {
        let (_dir, mut store) = store();
        let err = store.append_history("nobody", "x").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn archive_then_reregister() {
        let (_dir, mut store) = store();
        let mut old = PlayerProfile::synthesized("u1");
        old.name = "Old".into();
        store.register(old).unwrap();

        let archived = store.archive_and_delete("u1").unwrap();
        assert_eq!(archived.name, "Old");
        assert!(store.get("u1").is_none());

        let mut new = PlayerProfile::synthesized("u1");
        new.name = "New".into();
        store.register(new).unwrap();

        assert_eq!(store.get("u1").unwrap().name, "New");
        assert_eq!(store.get_archived("u1").unwrap().name, "Old");
    }

    #[test]
    fn archive_overwrites_prior_archive() {
        let (_dir, mut store) = store();
        let mut p = PlayerProfile::synthesized("u1");
        p.name = "First".into();
        store.register(p).unwrap();
        store.archive_and_delete("u1").unwrap();

        let mut p = PlayerProfile::synthesized("u1");
        p.name = "Second".into();
        store.register(p).unwrap();
        store.archive_and_delete("u1").unwrap();

        assert_eq!(store.get_archived("u1").unwrap().name, "Second");
    }

    #[test]
    fn archive_missing_user() {
        let (_dir, mut store) = store();
        let err = store.archive_and_delete("ghost").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = PlayerStore::open(dir.path()).unwrap();
            store
                .register(PlayerProfile::synthesized("u1"))
                .unwrap();
            store.append_history("u1", "Run away").unwrap();
            store
                .register(PlayerProfile::synthesized("u2"))
                .unwrap();
            store.archive_and_delete("u2").unwrap();
        }
        let store = PlayerStore::open(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("u1").unwrap().history, vec!["Run away"]);
        assert!(store.get_archived("u2").is_some());
    }

    #[test]
    fn no_stray_temp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = PlayerStore::open(dir.path()).unwrap();
        store
            .register(PlayerProfile::synthesized("u1"))
            .unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
    }
}
