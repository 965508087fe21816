pub mod archive;
pub mod log;
pub mod play;
pub mod roster;

use std::path::Path;

use qb_store::{PlayerStore, StoreResult};

/// Open the player store under the data directory.
pub fn open_store(data: &Path) -> Result<PlayerStore, String> {
    let opened: StoreResult<PlayerStore> = PlayerStore::open(data);
    opened.map_err(|e| format!("failed to open player data in {}: {e}", data.display()))
}

/// Path of the decision log inside the data directory.
pub fn decision_log_path(data: &Path) -> std::path::PathBuf {
    data.join("decisions.jsonl")
}
