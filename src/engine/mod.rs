//! Round engine shared by all mini-games
//!
//! Two state machines live here:
//!
//! - [`RoundSession`]: an ordered list of question rounds with a fixed point
//!   value per correct answer. Nine of the ten games are data over this type.
//! - [`MemoryMatch`]: the card-matching game, scored once at the end from the
//!   number of two-card comparisons.
//!
//! Neither type sleeps. Transitions that the UI shows for a moment (feedback,
//! advancing to the next round, flipping cards back) hand out a [`DelayedReset`]
//! ticket; the caller waits and then applies it. A ticket whose session or
//! sequence number is no longer current is skipped.

mod memory_match;
mod round;
mod session;

pub use memory_match::{score_for_moves, Card, FlipOutcome, MemoryMatch};
pub use round::{AnswerKind, Expected, Round, RoundPlan, Submission, WrongAnswerPolicy};
pub use session::{RoundSession, SubmitOutcome};

use std::fmt;

use uuid::Uuid;

/// Default time correct/wrong feedback stays visible
pub const FEEDBACK_DELAY_MS: u64 = 800;

/// Default time a mismatched card pair stays face up
pub const FLIP_BACK_DELAY_MS: u64 = 1000;

/// Callback receiving the final score of a session
pub type WinCallback = Box<dyn FnOnce(u32)>;

/// Identity of one playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Active,
    Finished,
}

/// Transient answer feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

/// What a delayed reset does when applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    /// Clear "wrong" feedback and let the player retry the round
    ClearFeedback,
    /// Clear "correct" feedback and move to the next round
    Advance,
    /// Turn a mismatched card pair face down again
    FlipBack,
}

/// Ticket for a deferred transition, valid only for the session and
/// sequence number it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedReset {
    pub session: SessionId,
    pub seq: u64,
    pub kind: ResetKind,
}
