//! Durable key/value storage for player progress
//!
//! Progress is stored as a handful of scalar string values (decimal integers or
//! JSON documents) under fixed keys. Backends:
//!
//! - [`SqliteStore`]: a single `kv` table in `~/.playnest/progress.db`
//! - [`MemoryStore`]: a shared in-process map for tests and throwaway sessions

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StoreError;

/// Minimal string key/value store.
///
/// Absence of a key is not an error: `get` returns `Ok(None)`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage key names for the progress fields, with a namespace prefix applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub points: String,
    pub badges: String,
    pub stories_read: String,
    pub games_played: String,
    pub puzzles_solved: String,
    pub sections_visited: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        let key = |name: &str| format!("{prefix}{name}");
        Self {
            points: key("points"),
            badges: key("badges"),
            stories_read: key("stories_read"),
            games_played: key("games_played"),
            puzzles_solved: key("puzzles_solved"),
            sections_visited: key("sections_visited"),
        }
    }

    /// All keys, in a stable order
    pub fn all(&self) -> [&str; 6] {
        [
            &self.points,
            &self.badges,
            &self.stories_read,
            &self.games_played,
            &self.puzzles_solved,
            &self.sections_visited,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_with_prefix() {
        let keys = StorageKeys::with_prefix("kids_");
        assert_eq!(keys.points, "kids_points");
        assert_eq!(keys.puzzles_solved, "kids_puzzles_solved");

        let bare = StorageKeys::with_prefix("");
        assert_eq!(bare.badges, "badges");
        assert_eq!(bare.all().len(), 6);
    }
}
