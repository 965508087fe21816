//! Durable storage for the Questbote session engine.
//!
//! Two independently-persisted profile collections (active and archive) plus
//! an append-only decision log. All profile mutation goes through
//! [`PlayerStore`] operations; each durable write is applied atomically
//! (temp file + rename for the collections, one appended line for the log).

pub mod decisions;
pub mod error;
pub mod players;
pub mod profile;

pub use decisions::{DecisionLog, DecisionRecord};
pub use error::{StoreError, StoreResult};
pub use players::PlayerStore;
pub use profile::PlayerProfile;
