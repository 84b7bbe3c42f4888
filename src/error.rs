//! Error types shared across the crate

use std::fmt;

/// Errors raised by a progress store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Kind of content a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Story,
    Video,
    Game,
    Puzzle,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Story => "story",
            Self::Video => "video",
            Self::Game => "game",
            Self::Puzzle => "puzzle",
        };
        f.write_str(label)
    }
}

/// Lookup failures for catalog content.
///
/// A missing id is a terminal "not found" state for the surface that asked,
/// never a reason to abort the program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: ContentKind, id: String },
}

impl ContentError {
    pub fn not_found(kind: ContentKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ContentError::not_found(ContentKind::Game, "chess");
        assert_eq!(err.to_string(), "game not found: chess");
    }
}
