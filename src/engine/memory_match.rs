//! Card-matching game
//!
//! A deck of paired symbols is shuffled once. At most two cards are face up
//! while a comparison is pending; a matching pair is solved for good, a
//! mismatched pair turns face down again after a delay. The score is computed
//! once, when the last pair is solved.

use rand::seq::SliceRandom;
use tracing::{debug, info};

use super::{DelayedReset, ResetKind, SessionId, SessionStatus, WinCallback};

/// Starting score before the move penalty
const BASE_SCORE: u32 = 50;
/// Points lost per comparison
const MOVE_PENALTY: u32 = 2;
/// Lowest possible score for a finished deck
const MIN_SCORE: u32 = 10;

/// Final score for a deck solved in `moves` comparisons: `max(50 - 2*moves, 10)`
pub fn score_for_moves(moves: u32) -> u32 {
    BASE_SCORE
        .saturating_sub(moves.saturating_mul(MOVE_PENALTY))
        .max(MIN_SCORE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub symbol: String,
    pub face_up: bool,
    pub matched: bool,
}

/// Result of selecting a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Not active, unknown card, or card already face up / solved
    Ignored,
    /// Two cards are already face up and waiting to be resolved
    Rejected,
    /// First card of a pair turned over
    FirstCard,
    /// The pair matched; `pairs_left` pairs remain
    Matched { pairs_left: usize },
    /// The pair did not match; apply `reset` after the flip-back delay
    Mismatched { reset: DelayedReset },
    /// Last pair matched; the final score was reported
    Finished { score: u32, moves: u32 },
}

/// One playthrough of the card-matching game
pub struct MemoryMatch {
    id: SessionId,
    cards: Vec<Card>,
    flipped: Vec<usize>,
    moves: u32,
    score: u32,
    status: SessionStatus,
    reset_seq: u64,
    flip_back_pending: bool,
    on_win: Option<WinCallback>,
}

impl MemoryMatch {
    /// Build a shuffled deck holding every symbol twice
    pub fn new(symbols: &[&str], on_win: impl FnOnce(u32) + 'static) -> Self {
        let mut deck: Vec<String> = symbols
            .iter()
            .chain(symbols.iter())
            .map(|s| s.to_string())
            .collect();
        deck.shuffle(&mut rand::thread_rng());
        Self::with_deck(deck, on_win)
    }

    /// Build from an already ordered deck
    pub fn with_deck(deck: Vec<String>, on_win: impl FnOnce(u32) + 'static) -> Self {
        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();

        Self {
            id: SessionId::new(),
            cards,
            flipped: Vec::with_capacity(2),
            moves: 0,
            score: 0,
            status: SessionStatus::NotStarted,
            reset_seq: 0,
            flip_back_pending: false,
            on_win: Some(Box::new(on_win)),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Completed two-card comparisons, matching or not
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Zero until the deck is solved
    pub fn session_score(&self) -> u32 {
        self.score
    }

    pub fn pairs_left(&self) -> usize {
        self.cards.iter().filter(|c| !c.matched).count() / 2
    }

    pub fn start(&mut self) -> bool {
        if self.status != SessionStatus::NotStarted {
            return false;
        }
        self.status = SessionStatus::Active;
        debug!(session = %self.id, cards = self.cards.len(), "Memory session started");

        if self.pairs_left() == 0 {
            self.finish();
        }
        true
    }

    /// Turn over a card
    pub fn flip(&mut self, card_id: usize) -> FlipOutcome {
        if self.status != SessionStatus::Active {
            return FlipOutcome::Ignored;
        }
        if self.flipped.len() == 2 {
            return FlipOutcome::Rejected;
        }
        match self.cards.get_mut(card_id) {
            Some(card) if !card.face_up && !card.matched => card.face_up = true,
            _ => return FlipOutcome::Ignored,
        }

        self.flipped.push(card_id);
        if self.flipped.len() < 2 {
            return FlipOutcome::FirstCard;
        }

        self.moves += 1;
        let (a, b) = (self.flipped[0], self.flipped[1]);
        if self.cards[a].symbol != self.cards[b].symbol {
            self.reset_seq += 1;
            self.flip_back_pending = true;
            return FlipOutcome::Mismatched {
                reset: DelayedReset {
                    session: self.id,
                    seq: self.reset_seq,
                    kind: ResetKind::FlipBack,
                },
            };
        }

        self.cards[a].matched = true;
        self.cards[b].matched = true;
        self.flipped.clear();

        let pairs_left = self.pairs_left();
        if pairs_left > 0 {
            return FlipOutcome::Matched { pairs_left };
        }

        let score = self.finish();
        FlipOutcome::Finished {
            score,
            moves: self.moves,
        }
    }

    /// Turn a mismatched pair back over. Returns false for a stale ticket.
    pub fn apply_reset(&mut self, reset: DelayedReset) -> bool {
        let current = reset.session == self.id
            && reset.seq == self.reset_seq
            && reset.kind == ResetKind::FlipBack
            && self.flip_back_pending;
        if !current {
            debug!(session = %self.id, seq = reset.seq, "Skipping stale flip-back");
            return false;
        }

        for id in self.flipped.drain(..) {
            if let Some(card) = self.cards.get_mut(id) {
                card.face_up = false;
            }
        }
        self.flip_back_pending = false;
        true
    }

    /// An empty deck scores 0, like an empty round plan
    fn finish(&mut self) -> u32 {
        self.score = if self.cards.is_empty() {
            0
        } else {
            score_for_moves(self.moves)
        };
        self.status = SessionStatus::Finished;
        info!(session = %self.id, moves = self.moves, score = self.score, "Memory session finished");
        if let Some(on_win) = self.on_win.take() {
            on_win(self.score);
        }
        self.score
    }
}
