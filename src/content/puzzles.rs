//! Puzzle board: filtering, hints and answer reveals

use std::collections::BTreeSet;

use tracing::info;

use super::catalog::{find_puzzle, Difficulty, Puzzle, PuzzleCategory, PUZZLES};
use crate::error::ContentError;
use crate::rewards::{RewardEvent, RewardsLedger};

/// Board state for one visit to the puzzle page
#[derive(Debug, Default)]
pub struct PuzzleBoard {
    category: Option<PuzzleCategory>,
    difficulty: Option<Difficulty>,
    hinted: BTreeSet<u32>,
    revealed: BTreeSet<u32>,
    points_earned: u64,
}

impl PuzzleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the board to one category; `None` shows all
    pub fn set_category(&mut self, category: Option<PuzzleCategory>) {
        self.category = category;
    }

    /// Limit the board to one difficulty; `None` shows all
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// Puzzles passing both filters, in catalog order
    pub fn visible(&self) -> Vec<&'static Puzzle> {
        PUZZLES
            .iter()
            .filter(|p| self.category.is_none_or(|c| p.category == c))
            .filter(|p| self.difficulty.is_none_or(|d| p.difficulty == d))
            .collect()
    }

    pub fn show_hint(&mut self, id: u32) -> Result<&'static str, ContentError> {
        let puzzle = find_puzzle(id)?;
        self.hinted.insert(id);
        Ok(puzzle.hint)
    }

    pub fn is_hinted(&self, id: u32) -> bool {
        self.hinted.contains(&id)
    }

    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    /// Show the answer. The first reveal of a puzzle on this board credits
    /// its points and a solved puzzle to the ledger.
    pub fn reveal_answer(
        &mut self,
        id: u32,
        ledger: &mut RewardsLedger,
    ) -> Result<(&'static str, Vec<RewardEvent>), ContentError> {
        let puzzle = find_puzzle(id)?;
        if !self.revealed.insert(id) {
            return Ok((puzzle.answer, Vec::new()));
        }

        self.points_earned += puzzle.points;
        info!(puzzle = id, points = puzzle.points, "Puzzle solved");
        let mut events = ledger.add_points(puzzle.points);
        events.extend(ledger.increment_puzzles_solved());
        Ok((puzzle.answer, events))
    }

    /// Points credited from this board since it was opened or reset
    pub fn points_earned(&self) -> u64 {
        self.points_earned
    }

    /// Clear reveals, hints and the tally. Filters and the ledger are kept.
    pub fn reset(&mut self) {
        self.hinted.clear();
        self.revealed.clear();
        self.points_earned = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::BadgeId;

    #[test]
    fn test_filters_combine() {
        let mut board = PuzzleBoard::new();
        assert_eq!(board.visible().len(), PUZZLES.len());

        board.set_category(Some(PuzzleCategory::Math));
        assert!(board.visible().iter().all(|p| p.category == PuzzleCategory::Math));

        board.set_difficulty(Some(Difficulty::Easy));
        let ids: Vec<u32> = board.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 11]);

        board.set_category(None);
        assert!(board.visible().iter().all(|p| p.difficulty == Difficulty::Easy));
    }

    #[test]
    fn test_reveal_credits_once() {
        let mut ledger = RewardsLedger::in_memory();
        let mut board = PuzzleBoard::new();

        let (answer, events) = board.reveal_answer(3, &mut ledger).unwrap();
        assert!(answer.starts_with("Short"));
        assert!(!events.is_empty());
        assert_eq!(ledger.points(), 20);
        assert_eq!(ledger.puzzles_solved(), 1);
        assert!(ledger.badge(BadgeId::FirstPuzzle).unwrap().earned);

        let (_, events) = board.reveal_answer(3, &mut ledger).unwrap();
        assert!(events.is_empty());
        assert_eq!(ledger.points(), 20);
        assert_eq!(ledger.puzzles_solved(), 1);
        assert_eq!(board.points_earned(), 20);
    }

    #[test]
    fn test_hint_and_reset() {
        let mut ledger = RewardsLedger::in_memory();
        let mut board = PuzzleBoard::new();
        board.set_category(Some(PuzzleCategory::Riddle));

        assert_eq!(board.show_hint(1).unwrap(), "It tells you the time.");
        board.reveal_answer(1, &mut ledger).unwrap();
        assert!(board.is_hinted(1) && board.is_revealed(1));

        board.reset();
        assert!(!board.is_hinted(1) && !board.is_revealed(1));
        assert_eq!(board.points_earned(), 0);
        assert_eq!(board.visible().len(), 4);
        assert_eq!(ledger.points(), 10);
    }

    #[test]
    fn test_unknown_puzzle() {
        let mut ledger = RewardsLedger::in_memory();
        let mut board = PuzzleBoard::new();
        assert!(board.show_hint(77).is_err());
        assert!(board.reveal_answer(77, &mut ledger).is_err());
        assert_eq!(ledger.points(), 0);
    }
}
