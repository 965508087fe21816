//! The append-only decision log.
//!
//! One JSON object per line, appended and flushed per record. The core only
//! ever writes; reading back is a reporting concern (the CLI's `log`
//! subcommand). Record ids are monotone across process restarts: the highest
//! existing id is recovered when the log is opened.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// One recorded player decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Auto-incrementing identity, unique within one log file.
    pub id: u64,
    /// The user who decided.
    pub user: String,
    /// The choice text the user picked.
    pub choice: String,
    /// The narrative the choice was made against.
    pub context: String,
    /// When the decision was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of player decisions.
#[derive(Debug)]
pub struct DecisionLog {
    path: PathBuf,
    next_id: u64,
    appended: u64,
}

impl DecisionLog {
    /// Open (or start) the log at `path`, recovering the next id from any
    /// existing records.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let next_id = read_records(&path)?
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |m| m + 1);
        Ok(Self {
            path,
            next_id,
            appended: 0,
        })
    }

    /// Append one decision. Fatal to the call on storage failure; the record
    /// is never retried (a retry could duplicate it).
    pub fn append(&mut self, user: &str, choice: &str, context: &str) -> StoreResult<DecisionRecord> {
        let record = DecisionRecord {
            id: self.next_id,
            user: user.into(),
            choice: choice.into(),
            context: context.into(),
            timestamp: Utc::now(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        self.next_id += 1;
        self.appended += 1;
        Ok(record)
    }

    /// Records appended by this handle (not the whole file).
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Read every record in a log file, oldest first. Reporting helper, not
    /// part of the core write path.
    pub fn read_all(path: &Path) -> StoreResult<Vec<DecisionRecord>> {
        read_records(path)
    }
}

fn read_records(path: &Path) -> StoreResult<Vec<DecisionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(line)?);
    }
    Ok(records)
}
