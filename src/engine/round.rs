//! Round definitions: prompt, options and expected answer

use rand::seq::SliceRandom;

/// The value a round accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A typed whole number (counting, arithmetic, letter counts)
    Number(i64),
    /// One option out of the round's option list
    Choice(String),
    /// Words in a fixed order
    Sequence(Vec<String>),
    /// A zero-based position in the round's option list
    Position(usize),
}

/// What the player handed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Raw text from an input box
    Typed(String),
    Choice(String),
    Sequence(Vec<String>),
    Position(usize),
}

/// Input widget a round needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Number,
    Choice,
    Sequence,
    Position,
}

impl Expected {
    /// Pure answer check. Malformed input is simply not a match.
    pub fn accepts(&self, submission: &Submission) -> bool {
        match (self, submission) {
            (Self::Number(n), Submission::Typed(raw)) => {
                raw.trim().parse::<i64>().is_ok_and(|v| v == *n)
            }
            (Self::Choice(c), Submission::Choice(s)) => c == s,
            (Self::Sequence(words), Submission::Sequence(s)) => words == s,
            (Self::Sequence(words), Submission::Typed(raw)) => raw
                .split_whitespace()
                .eq(words.iter().map(String::as_str)),
            (Self::Position(i), Submission::Position(p)) => i == p,
            _ => false,
        }
    }

    pub fn kind(&self) -> AnswerKind {
        match self {
            Self::Number(_) => AnswerKind::Number,
            Self::Choice(_) => AnswerKind::Choice,
            Self::Sequence(_) => AnswerKind::Sequence,
            Self::Position(_) => AnswerKind::Position,
        }
    }
}

/// One question of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub prompt: String,
    /// Choices, word tiles or positions shown to the player (may be empty)
    pub options: Vec<String>,
    pub expected: Expected,
}

impl Round {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, expected: Expected) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            expected,
        }
    }

    pub fn answer_kind(&self) -> AnswerKind {
        self.expected.kind()
    }

    pub fn is_correct(&self, submission: &Submission) -> bool {
        self.expected.accepts(submission)
    }

    pub(crate) fn shuffle_options(&mut self) {
        self.options.shuffle(&mut rand::thread_rng());
    }
}

/// What happens to a round after a wrong answer, once feedback clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrongAnswerPolicy {
    /// Same round, same options
    #[default]
    Retry,
    /// Same round, options shuffled again (word tiles go back to the pool)
    ReshuffleOptions,
}

/// The full round list of a session and its scoring rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    pub(crate) rounds: Vec<Round>,
    pub(crate) points_per_round: u32,
    pub(crate) on_wrong: WrongAnswerPolicy,
}

impl RoundPlan {
    pub fn new(rounds: Vec<Round>, points_per_round: u32) -> Self {
        Self {
            rounds,
            points_per_round,
            on_wrong: WrongAnswerPolicy::Retry,
        }
    }

    pub fn with_wrong_answer_policy(mut self, policy: WrongAnswerPolicy) -> Self {
        self.on_wrong = policy;
        self
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn points_per_round(&self) -> u32 {
        self.points_per_round
    }

    pub fn wrong_answer_policy(&self) -> WrongAnswerPolicy {
        self.on_wrong
    }

    /// Score for answering every round
    pub fn max_score(&self) -> u32 {
        self.points_per_round * self.rounds.len() as u32
    }
}
