//! Content surfaces: story reader, puzzle board, game page and the static
//! catalogs behind them
//!
//! Each surface runs its own interaction and reports completions to a
//! [`RewardsLedger`](crate::rewards::RewardsLedger) passed in by the caller.

pub mod catalog;
mod narration;
mod play;
mod puzzles;
mod story;

pub use catalog::{Difficulty, GameDescriptor, Puzzle, PuzzleCategory, Story, Video};
pub use narration::{Narrator, SpeechBackend};
pub use play::GamePlay;
pub use puzzles::PuzzleBoard;
pub use story::{ReadingState, StoryReader};
