//! Puzzle listing and solving commands

use anyhow::{bail, Result};

use playnest::content::{Difficulty, PuzzleBoard, PuzzleCategory};
use playnest::rewards::Section;
use playnest::Config;

use super::{open_ledger, print_events};

/// List puzzles, optionally filtered
pub fn puzzles_command(category: Option<&str>, difficulty: Option<&str>) -> Result<()> {
    let mut board = PuzzleBoard::new();

    if let Some(name) = category {
        let Some(category) = PuzzleCategory::from_str(name) else {
            bail!("Unknown category: {} (riddle, math, words, logic)", name);
        };
        board.set_category(Some(category));
    }
    if let Some(name) = difficulty {
        let Some(difficulty) = Difficulty::from_str(name) else {
            bail!("Unknown difficulty: {} (easy, medium, hard)", name);
        };
        board.set_difficulty(Some(difficulty));
    }

    let puzzles = board.visible();
    if puzzles.is_empty() {
        println!("No puzzles found.");
        return Ok(());
    }

    println!("Puzzles ({}):\n", puzzles.len());
    for puzzle in puzzles {
        println!(
            "  #{} [{} / {}] {} ({} points)",
            puzzle.id,
            puzzle.category.as_str(),
            puzzle.difficulty.as_str(),
            puzzle.question,
            puzzle.points
        );
    }
    Ok(())
}

/// Reveal a puzzle's answer and credit it the first time
pub fn solve_command(config: &Config, puzzle_id: u32, hint: bool) -> Result<()> {
    let mut ledger = open_ledger(config)?;
    print_events(&ledger.visit_section(Section::Puzzles));

    let mut board = PuzzleBoard::new();
    if hint {
        println!("💡 Hint: {}", board.show_hint(puzzle_id)?);
    }

    let (answer, events) = board.reveal_answer(puzzle_id, &mut ledger)?;
    println!("✅ Answer: {}", answer);
    print_events(&events);
    Ok(())
}
