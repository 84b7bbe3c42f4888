//! Generic multi-round session
//!
//! State machine:
//!
//! ```text
//! NotStarted --start--> Active --last round correct--> Finished
//!                        |  ^
//!      correct (not last)|  | Advance ticket applied
//!                        v  |
//!                  feedback = Correct
//! ```
//!
//! A wrong answer shows `Wrong` feedback and hands out a `ClearFeedback`
//! ticket; the round stays the same.

use tracing::{debug, info};

use super::round::{Round, RoundPlan, Submission, WrongAnswerPolicy};
use super::{DelayedReset, Feedback, ResetKind, SessionId, SessionStatus, WinCallback};

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not active, or a correct answer is still waiting to advance
    Ignored,
    /// Points added; apply `reset` after the feedback delay to advance
    Correct { awarded: u32, reset: DelayedReset },
    /// Last round answered; the final score was reported
    Finished { score: u32 },
    /// Apply `reset` after the feedback delay to clear the feedback
    Wrong { reset: DelayedReset },
}

/// One playthrough of a round-based game
pub struct RoundSession {
    id: SessionId,
    plan: RoundPlan,
    round_index: usize,
    session_score: u32,
    feedback: Feedback,
    status: SessionStatus,
    reset_seq: u64,
    pending: Option<ResetKind>,
    on_win: Option<WinCallback>,
}

impl RoundSession {
    /// Create a session. `on_win` runs at most once, when the session finishes.
    pub fn new(plan: RoundPlan, on_win: impl FnOnce(u32) + 'static) -> Self {
        Self {
            id: SessionId::new(),
            plan,
            round_index: 0,
            session_score: 0,
            feedback: Feedback::None,
            status: SessionStatus::NotStarted,
            reset_seq: 0,
            pending: None,
            on_win: Some(Box::new(on_win)),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn total_rounds(&self) -> usize {
        self.plan.total_rounds()
    }

    pub fn session_score(&self) -> u32 {
        self.session_score
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// The round currently shown, if the session is running
    pub fn current_round(&self) -> Option<&Round> {
        match self.status {
            SessionStatus::Active => self.plan.rounds.get(self.round_index),
            _ => None,
        }
    }

    /// Begin play. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.status != SessionStatus::NotStarted {
            return false;
        }
        self.status = SessionStatus::Active;
        debug!(session = %self.id, rounds = self.total_rounds(), "Session started");

        if self.plan.rounds.is_empty() {
            self.finish();
        }
        true
    }

    /// Check an answer against the current round
    pub fn submit(&mut self, submission: &Submission) -> SubmitOutcome {
        if self.status != SessionStatus::Active || self.pending == Some(ResetKind::Advance) {
            return SubmitOutcome::Ignored;
        }
        let Some(round) = self.plan.rounds.get(self.round_index) else {
            return SubmitOutcome::Ignored;
        };

        if !round.is_correct(submission) {
            self.feedback = Feedback::Wrong;
            let reset = self.schedule(ResetKind::ClearFeedback);
            return SubmitOutcome::Wrong { reset };
        }

        let awarded = self.plan.points_per_round;
        self.session_score += awarded;
        self.feedback = Feedback::Correct;

        if self.round_index + 1 >= self.plan.rounds.len() {
            self.pending = None;
            let score = self.finish();
            return SubmitOutcome::Finished { score };
        }

        let reset = self.schedule(ResetKind::Advance);
        SubmitOutcome::Correct { awarded, reset }
    }

    /// Apply a deferred transition. Returns false (and changes nothing) when
    /// the ticket is stale: another session, or superseded by a newer action.
    pub fn apply_reset(&mut self, reset: DelayedReset) -> bool {
        let current = reset.session == self.id
            && reset.seq == self.reset_seq
            && self.pending == Some(reset.kind)
            && self.status == SessionStatus::Active;
        if !current {
            debug!(session = %self.id, seq = reset.seq, "Skipping stale delayed reset");
            return false;
        }

        self.pending = None;
        self.feedback = Feedback::None;
        match reset.kind {
            ResetKind::Advance => self.round_index += 1,
            ResetKind::ClearFeedback => {
                if self.plan.on_wrong == WrongAnswerPolicy::ReshuffleOptions {
                    if let Some(round) = self.plan.rounds.get_mut(self.round_index) {
                        round.shuffle_options();
                    }
                }
            }
            ResetKind::FlipBack => {}
        }
        true
    }

    fn schedule(&mut self, kind: ResetKind) -> DelayedReset {
        self.reset_seq += 1;
        self.pending = Some(kind);
        DelayedReset {
            session: self.id,
            seq: self.reset_seq,
            kind,
        }
    }

    fn finish(&mut self) -> u32 {
        self.status = SessionStatus::Finished;
        info!(session = %self.id, score = self.session_score, "Session finished");
        if let Some(on_win) = self.on_win.take() {
            on_win(self.session_score);
        }
        self.session_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Expected;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn number_plan(answers: &[i64], points: u32) -> RoundPlan {
        let rounds = answers
            .iter()
            .map(|a| Round::new(format!("type {a}"), Vec::new(), Expected::Number(*a)))
            .collect();
        RoundPlan::new(rounds, points)
    }

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl FnOnce(u32) + 'static) {
        let wins = Rc::new(RefCell::new(Vec::new()));
        let sink = wins.clone();
        (wins, move |score| sink.borrow_mut().push(score))
    }

    fn typed(n: i64) -> Submission {
        Submission::Typed(n.to_string())
    }

    #[test]
    fn test_ten_correct_rounds_report_once() {
        let answers: Vec<i64> = (1..=10).collect();
        let (wins, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&answers, 10), on_win);
        assert!(session.start());

        for (i, answer) in answers.iter().enumerate() {
            assert_eq!(session.status(), SessionStatus::Active);
            assert_eq!(session.round_index(), i);
            match session.submit(&typed(*answer)) {
                SubmitOutcome::Correct { awarded, reset } => {
                    assert_eq!(awarded, 10);
                    assert!(session.apply_reset(reset));
                }
                SubmitOutcome::Finished { score } => {
                    assert_eq!(i, 9);
                    assert_eq!(score, 100);
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(*wins.borrow(), vec![100]);
        assert_eq!(session.submit(&typed(10)), SubmitOutcome::Ignored);
        assert_eq!(*wins.borrow(), vec![100]);
    }

    #[test]
    fn test_wrong_answer_keeps_round_and_score() {
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[4, 5], 10), on_win);
        session.start();

        let SubmitOutcome::Wrong { reset } = session.submit(&typed(3)) else {
            panic!("expected wrong");
        };
        assert_eq!(session.feedback(), Feedback::Wrong);
        assert_eq!(session.session_score(), 0);

        assert!(session.apply_reset(reset));
        assert_eq!(session.feedback(), Feedback::None);
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn test_non_numeric_input_is_wrong() {
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[4], 10), on_win);
        session.start();
        assert!(matches!(
            session.submit(&Submission::Typed("four".into())),
            SubmitOutcome::Wrong { .. }
        ));
    }

    #[test]
    fn test_submissions_before_start_are_ignored() {
        let (wins, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[1], 10), on_win);
        assert_eq!(session.submit(&typed(1)), SubmitOutcome::Ignored);
        assert!(session.current_round().is_none());
        assert!(wins.borrow().is_empty());
    }

    #[test]
    fn test_pending_advance_blocks_double_scoring() {
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[1, 2], 10), on_win);
        session.start();

        let SubmitOutcome::Correct { reset, .. } = session.submit(&typed(1)) else {
            panic!("expected correct");
        };
        assert_eq!(session.submit(&typed(1)), SubmitOutcome::Ignored);
        assert_eq!(session.session_score(), 10);

        assert!(session.apply_reset(reset));
        assert!(!session.apply_reset(reset));
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn test_stale_clear_does_not_wipe_newer_feedback() {
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[1, 2], 10), on_win);
        session.start();

        let SubmitOutcome::Wrong { reset: stale } = session.submit(&typed(9)) else {
            panic!("expected wrong");
        };
        let SubmitOutcome::Correct { reset, .. } = session.submit(&typed(1)) else {
            panic!("expected correct");
        };

        assert!(!session.apply_reset(stale));
        assert_eq!(session.feedback(), Feedback::Correct);
        assert_eq!(session.round_index(), 0);

        assert!(session.apply_reset(reset));
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn test_ticket_from_other_session_is_rejected() {
        let (_, a_win) = recorder();
        let (_, b_win) = recorder();
        let mut a = RoundSession::new(number_plan(&[1, 2], 10), a_win);
        let mut b = RoundSession::new(number_plan(&[1, 2], 10), b_win);
        a.start();
        b.start();

        let SubmitOutcome::Correct { reset, .. } = a.submit(&typed(1)) else {
            panic!("expected correct");
        };
        b.submit(&typed(1));
        assert!(!b.apply_reset(reset));
        assert_eq!(b.round_index(), 0);
    }

    #[test]
    fn test_score_never_decreases() {
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(number_plan(&[1, 2, 3], 15), on_win);
        session.start();

        let mut last = 0;
        for input in ["x", "1", "1", "5", "2", "3"] {
            let outcome = session.submit(&Submission::Typed(input.into()));
            assert!(session.session_score() >= last);
            last = session.session_score();
            match outcome {
                SubmitOutcome::Correct { reset, .. } | SubmitOutcome::Wrong { reset } => {
                    session.apply_reset(reset);
                }
                _ => {}
            }
        }
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.session_score(), 45);
    }

    #[test]
    fn test_reshuffle_policy_keeps_same_options() {
        let words: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let round = Round::new("order", words.clone(), Expected::Sequence(words.clone()));
        let plan = RoundPlan::new(vec![round], 15)
            .with_wrong_answer_policy(WrongAnswerPolicy::ReshuffleOptions);
        let (_, on_win) = recorder();
        let mut session = RoundSession::new(plan, on_win);
        session.start();

        let SubmitOutcome::Wrong { reset } = session.submit(&Submission::Typed("d c b a".into()))
        else {
            panic!("expected wrong");
        };
        assert!(session.apply_reset(reset));

        let mut options = session.current_round().unwrap().options.clone();
        options.sort();
        assert_eq!(options, words);
    }

    #[test]
    fn test_empty_plan_finishes_on_start() {
        let (wins, on_win) = recorder();
        let mut session = RoundSession::new(RoundPlan::new(Vec::new(), 10), on_win);
        session.start();
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(*wins.borrow(), vec![0]);
    }
}
