//! Badge definitions and metadata
//!
//! The badge catalog is fixed: nine badges, each unlocked once by a threshold
//! over points, activity counters, or visited sections.

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeId {
    // Story badges
    FirstStory,
    StoryLover,

    // Game badges
    FirstGame,
    GameMaster,

    // Puzzle badges
    FirstPuzzle,
    PuzzleGenius,

    // Points badges
    Points100,
    Points500,

    // Exploration
    Explorer,
}

impl BadgeId {
    /// Get the string ID used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstStory => "first_story",
            Self::StoryLover => "story_lover",
            Self::FirstGame => "first_game",
            Self::GameMaster => "game_master",
            Self::FirstPuzzle => "first_puzzle",
            Self::PuzzleGenius => "puzzle_genius",
            Self::Points100 => "points_100",
            Self::Points500 => "points_500",
            Self::Explorer => "explorer",
        }
    }

    /// Parse from a storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_story" => Some(Self::FirstStory),
            "story_lover" => Some(Self::StoryLover),
            "first_game" => Some(Self::FirstGame),
            "game_master" => Some(Self::GameMaster),
            "first_puzzle" => Some(Self::FirstPuzzle),
            "puzzle_genius" => Some(Self::PuzzleGenius),
            "points_100" => Some(Self::Points100),
            "points_500" => Some(Self::Points500),
            "explorer" => Some(Self::Explorer),
            _ => None,
        }
    }

    /// Get all badge IDs in catalog order
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::FirstStory,
            Self::StoryLover,
            Self::FirstGame,
            Self::GameMaster,
            Self::FirstPuzzle,
            Self::PuzzleGenius,
            Self::Points100,
            Self::Points500,
            Self::Explorer,
        ]
    }
}

/// Unlock condition of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCondition {
    StoriesRead(u32),
    GamesPlayed(u32),
    PuzzlesSolved(u32),
    Points(u64),
    /// Every site section has been opened at least once
    AllSectionsVisited,
}

/// Badge definition with display metadata
#[derive(Debug, Clone)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub condition: BadgeCondition,
}

impl BadgeDefinition {
    /// Look up the definition for an ID. `BADGES` lists every id in
    /// declaration order, so the discriminant is the index.
    pub fn get(id: BadgeId) -> &'static BadgeDefinition {
        let def = &BADGES[id as usize];
        debug_assert_eq!(def.id, id, "BADGES out of BadgeId order");
        def
    }
}

/// All badge definitions, in display order
pub static BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: BadgeId::FirstStory,
        name: "Little Reader",
        description: "Read your first story",
        emoji: "📖",
        condition: BadgeCondition::StoriesRead(1),
    },
    BadgeDefinition {
        id: BadgeId::StoryLover,
        name: "Story Lover",
        description: "Read 5 stories",
        emoji: "📚",
        condition: BadgeCondition::StoriesRead(5),
    },
    BadgeDefinition {
        id: BadgeId::FirstGame,
        name: "New Player",
        description: "Finished your first game",
        emoji: "🎮",
        condition: BadgeCondition::GamesPlayed(1),
    },
    BadgeDefinition {
        id: BadgeId::GameMaster,
        name: "Game Champion",
        description: "Finished 5 games",
        emoji: "🏆",
        condition: BadgeCondition::GamesPlayed(5),
    },
    BadgeDefinition {
        id: BadgeId::FirstPuzzle,
        name: "Puzzle Starter",
        description: "Solved your first puzzle",
        emoji: "🧩",
        condition: BadgeCondition::PuzzlesSolved(1),
    },
    BadgeDefinition {
        id: BadgeId::PuzzleGenius,
        name: "Puzzle Genius",
        description: "Solved 10 puzzles",
        emoji: "🧠",
        condition: BadgeCondition::PuzzlesSolved(10),
    },
    BadgeDefinition {
        id: BadgeId::Points100,
        name: "Rising Star",
        description: "Collected 100 points",
        emoji: "⭐",
        condition: BadgeCondition::Points(100),
    },
    BadgeDefinition {
        id: BadgeId::Points500,
        name: "Shining Star",
        description: "Collected 500 points",
        emoji: "🌟",
        condition: BadgeCondition::Points(500),
    },
    BadgeDefinition {
        id: BadgeId::Explorer,
        name: "Explorer",
        description: "Visited every section",
        emoji: "🗺️",
        condition: BadgeCondition::AllSectionsVisited,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_ids() {
        assert_eq!(BADGES.len(), 9);
        for (def, id) in BADGES.iter().zip(BadgeId::all()) {
            assert_eq!(def.id, *id);
            assert_eq!(BadgeDefinition::get(*id).id, *id);
        }
    }

    #[test]
    fn test_lookup_returns_own_definition() {
        assert_eq!(BadgeDefinition::get(BadgeId::FirstStory).name, "Little Reader");
        assert_eq!(BadgeDefinition::get(BadgeId::Points500).name, "Shining Star");
        assert_eq!(BadgeDefinition::get(BadgeId::Explorer).name, "Explorer");
    }

    #[test]
    fn test_id_string_roundtrip() {
        for id in BadgeId::all() {
            assert_eq!(BadgeId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(BadgeId::from_str("night_owl"), None);
    }
}
