//! Site sections tracked for the explorer badge

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A top-level section of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Stories,
    Videos,
    Games,
    Puzzles,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Stories => "stories",
            Self::Videos => "videos",
            Self::Games => "games",
            Self::Puzzles => "puzzles",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "stories" => Some(Self::Stories),
            "videos" => Some(Self::Videos),
            "games" => Some(Self::Games),
            "puzzles" => Some(Self::Puzzles),
            _ => None,
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Self::Home,
            Self::Stories,
            Self::Videos,
            Self::Games,
            Self::Puzzles,
        ]
    }
}

/// True once every section appears in `visited`
pub fn all_sections_visited(visited: &BTreeSet<Section>) -> bool {
    Section::all().iter().all(|s| visited.contains(s))
}
