//! Shared test utilities for ledger and surface tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use playnest::engine::{Expected, Submission};
use playnest::rewards::RewardsLedger;
use playnest::store::SqliteStore;
use tempfile::TempDir;

pub const KEY_PREFIX: &str = "kids_";

/// Temp directory holding a progress database path
pub fn progress_db() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("progress.db");
    (temp_dir, path)
}

/// Open (or reopen) a ledger on the database at `path`
pub fn open_ledger(path: &Path) -> RewardsLedger {
    let store = SqliteStore::open(path).expect("Failed to open progress db");
    RewardsLedger::load(Box::new(store), KEY_PREFIX)
}

/// The submission a perfect player would give
pub fn right_answer(expected: &Expected) -> Submission {
    match expected {
        Expected::Number(n) => Submission::Typed(n.to_string()),
        Expected::Choice(c) => Submission::Choice(c.clone()),
        Expected::Sequence(words) => Submission::Sequence(words.clone()),
        Expected::Position(p) => Submission::Position(*p),
    }
}
