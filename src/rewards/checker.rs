//! Badge checking logic
//!
//! Pure functions: given a progress snapshot and the already-earned IDs,
//! decide which badges unlock now.

use super::definitions::{BadgeCondition, BadgeId, BADGES};

/// Values the badge thresholds are evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub points: u64,
    pub stories_read: u32,
    pub games_played: u32,
    pub puzzles_solved: u32,
    pub all_sections_visited: bool,
}

/// Whether a single condition holds for the snapshot
pub fn condition_met(condition: BadgeCondition, snapshot: &ProgressSnapshot) -> bool {
    match condition {
        BadgeCondition::StoriesRead(n) => snapshot.stories_read >= n,
        BadgeCondition::GamesPlayed(n) => snapshot.games_played >= n,
        BadgeCondition::PuzzlesSolved(n) => snapshot.puzzles_solved >= n,
        BadgeCondition::Points(n) => snapshot.points >= n,
        BadgeCondition::AllSectionsVisited => snapshot.all_sections_visited,
    }
}

/// Badges whose condition holds but which are not yet earned, in catalog order
pub fn check_badges(snapshot: &ProgressSnapshot, earned: &[BadgeId]) -> Vec<BadgeId> {
    BADGES
        .iter()
        .filter(|def| !earned.contains(&def.id))
        .filter(|def| condition_met(def.condition, snapshot))
        .map(|def| def.id)
        .collect()
}
