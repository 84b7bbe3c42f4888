//! The ten mini-games as data over the round engine
//!
//! Every game except `memory` is a [`RoundPlan`]: a list of rounds, a point
//! value per correct answer and a wrong-answer policy. `memory` runs on
//! [`MemoryMatch`].

mod data;
mod math;

pub use data::MEMORY_SYMBOLS;
pub use math::{MathQuestion, Operation};

use rand::seq::SliceRandom;

use crate::engine::{
    DelayedReset, Expected, MemoryMatch, Round, RoundPlan, RoundSession, SessionStatus,
    WrongAnswerPolicy,
};
use data::{
    ChoiceRound, ANIMALS, COLORS, COUNT_ROUNDS, DIFF_ROUNDS, LETTER_ROUNDS, SENTENCES, SHAPES,
    WORD_MATCHES,
};

/// Rounds in one arithmetic session
pub const MATH_ROUNDS: usize = 10;

/// Identifier of each mini-game, as used in routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    Memory,
    Math,
    ColorGame,
    WordOrder,
    CountGame,
    ShapeMatch,
    LetterFind,
    AnimalSound,
    FindDiff,
    WordMatch,
}

impl GameId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Math => "math",
            Self::ColorGame => "colorGame",
            Self::WordOrder => "wordOrder",
            Self::CountGame => "countGame",
            Self::ShapeMatch => "shapeMatch",
            Self::LetterFind => "letterFind",
            Self::AnimalSound => "animalSound",
            Self::FindDiff => "findDiff",
            Self::WordMatch => "wordMatch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    pub fn all() -> &'static [GameId] {
        &[
            Self::Memory,
            Self::Math,
            Self::ColorGame,
            Self::WordOrder,
            Self::CountGame,
            Self::ShapeMatch,
            Self::LetterFind,
            Self::AnimalSound,
            Self::FindDiff,
            Self::WordMatch,
        ]
    }

    /// Points per correct round (None for the card game, scored on moves)
    pub fn points_per_round(&self) -> Option<u32> {
        match self {
            Self::Memory => None,
            Self::Math
            | Self::ColorGame
            | Self::CountGame
            | Self::ShapeMatch
            | Self::AnimalSound
            | Self::WordMatch => Some(10),
            Self::WordOrder | Self::LetterFind => Some(15),
            Self::FindDiff => Some(20),
        }
    }
}

/// Fresh round plan for a round-based game; `None` for `memory`.
///
/// Randomized parts (questions, option order, word tiles) are drawn anew on
/// every call.
pub fn round_plan(game: GameId) -> Option<RoundPlan> {
    let points = game.points_per_round()?;
    let plan = match game {
        GameId::Memory => return None,
        GameId::Math => RoundPlan::new(math_rounds(), points),
        GameId::ColorGame => RoundPlan::new(color_rounds(), points),
        GameId::WordOrder => RoundPlan::new(word_order_rounds(), points)
            .with_wrong_answer_policy(WrongAnswerPolicy::ReshuffleOptions),
        GameId::CountGame => RoundPlan::new(count_rounds(), points),
        GameId::ShapeMatch => RoundPlan::new(
            choice_rounds(SHAPES, |s| format!("Which one is a {s}?")),
            points,
        ),
        GameId::LetterFind => RoundPlan::new(letter_rounds(), points),
        GameId::AnimalSound => RoundPlan::new(
            choice_rounds(ANIMALS, |s| format!("What does the {s} say?")),
            points,
        ),
        GameId::FindDiff => RoundPlan::new(find_diff_rounds(), points),
        GameId::WordMatch => RoundPlan::new(
            choice_rounds(WORD_MATCHES, |s| format!("What is this? {s}")),
            points,
        ),
    };
    Some(plan)
}

fn shuffled(items: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    out.shuffle(&mut rand::thread_rng());
    out
}

fn math_rounds() -> Vec<Round> {
    let mut rng = rand::thread_rng();
    (0..MATH_ROUNDS)
        .map(|_| {
            let q = MathQuestion::random(&mut rng);
            Round::new(q.to_string(), Vec::new(), Expected::Number(q.answer()))
        })
        .collect()
}

fn color_rounds() -> Vec<Round> {
    COLORS
        .iter()
        .map(|c| {
            Round::new(
                format!("Which square is {}?", c.name),
                shuffled(&c.options),
                Expected::Choice(c.swatch.to_string()),
            )
        })
        .collect()
}

fn word_order_rounds() -> Vec<Round> {
    SENTENCES
        .iter()
        .map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            Round::new(
                "Put the words in the right order",
                shuffled(&words),
                Expected::Sequence(words.iter().map(|w| w.to_string()).collect()),
            )
        })
        .collect()
}

fn count_rounds() -> Vec<Round> {
    COUNT_ROUNDS
        .iter()
        .map(|r| {
            Round::new(
                format!("How many? {}", r.emoji.repeat(r.count)),
                Vec::new(),
                Expected::Number(r.count as i64),
            )
        })
        .collect()
}

fn choice_rounds(table: &[ChoiceRound], prompt: impl Fn(&str) -> String) -> Vec<Round> {
    table
        .iter()
        .map(|r| {
            Round::new(
                prompt(r.subject),
                shuffled(&r.options),
                Expected::Choice(r.answer.to_string()),
            )
        })
        .collect()
}

/// Case-insensitive occurrences of `letter` in `sentence`
pub fn count_letter(sentence: &str, letter: char) -> usize {
    let target = letter.to_lowercase().to_string();
    sentence
        .chars()
        .filter(|c| c.to_lowercase().to_string() == target)
        .count()
}

fn letter_rounds() -> Vec<Round> {
    LETTER_ROUNDS
        .iter()
        .map(|r| {
            Round::new(
                format!("How many times does \"{}\" appear in: {}", r.letter, r.sentence),
                Vec::new(),
                Expected::Number(count_letter(r.sentence, r.letter) as i64),
            )
        })
        .collect()
}

fn find_diff_rounds() -> Vec<Round> {
    DIFF_ROUNDS
        .iter()
        .filter_map(|r| {
            let position = r.left.iter().zip(r.right.iter()).position(|(a, b)| a != b)?;
            Some(Round::new(
                format!("{}\nLeft:  {}", r.title, r.left.join(" ")),
                r.right.iter().map(|s| s.to_string()).collect(),
                Expected::Position(position),
            ))
        })
        .collect()
}

/// A running playthrough of any game
pub enum GameSession {
    Rounds(RoundSession),
    Cards(MemoryMatch),
}

impl GameSession {
    /// New, not yet started session for `game`
    pub fn new(game: GameId, on_win: impl FnOnce(u32) + 'static) -> Self {
        match round_plan(game) {
            Some(plan) => Self::Rounds(RoundSession::new(plan, on_win)),
            None => Self::Cards(MemoryMatch::new(&MEMORY_SYMBOLS, on_win)),
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Rounds(s) => s.status(),
            Self::Cards(s) => s.status(),
        }
    }

    pub fn session_score(&self) -> u32 {
        match self {
            Self::Rounds(s) => s.session_score(),
            Self::Cards(s) => s.session_score(),
        }
    }

    pub fn start(&mut self) -> bool {
        match self {
            Self::Rounds(s) => s.start(),
            Self::Cards(s) => s.start(),
        }
    }

    pub fn apply_reset(&mut self, reset: DelayedReset) -> bool {
        match self {
            Self::Rounds(s) => s.apply_reset(reset),
            Self::Cards(s) => s.apply_reset(reset),
        }
    }
}
