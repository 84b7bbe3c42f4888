//! Game page: one game, one session at a time, wired to the ledger

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use super::catalog::{find_game, GameDescriptor};
use crate::engine::{DelayedReset, FlipOutcome, SessionStatus, Submission, SubmitOutcome};
use crate::error::ContentError;
use crate::games::GameSession;
use crate::rewards::{RewardEvent, RewardsLedger};

pub struct GamePlay {
    game: &'static GameDescriptor,
    session: GameSession,
    won: Rc<Cell<Option<u32>>>,
    final_score: Option<u32>,
}

impl GamePlay {
    /// Open the game page for a route id such as `math` or `wordOrder`
    pub fn open(id: &str) -> Result<Self, ContentError> {
        let game = find_game(id)?;
        let (session, won) = new_session(game);
        Ok(Self {
            game,
            session,
            won,
            final_score: None,
        })
    }

    pub fn game(&self) -> &'static GameDescriptor {
        self.game
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    /// Score of the finished session, once the win has been credited
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Answer the current round of a round-based game
    pub fn submit(
        &mut self,
        submission: &Submission,
        ledger: &mut RewardsLedger,
    ) -> (SubmitOutcome, Vec<RewardEvent>) {
        let outcome = match &mut self.session {
            GameSession::Rounds(session) => session.submit(submission),
            GameSession::Cards(_) => SubmitOutcome::Ignored,
        };
        (outcome, self.credit_win(ledger))
    }

    /// Turn over a card in the memory game
    pub fn flip(&mut self, card: usize, ledger: &mut RewardsLedger) -> (FlipOutcome, Vec<RewardEvent>) {
        let outcome = match &mut self.session {
            GameSession::Cards(game) => game.flip(card),
            GameSession::Rounds(_) => FlipOutcome::Ignored,
        };
        (outcome, self.credit_win(ledger))
    }

    pub fn apply_reset(&mut self, reset: DelayedReset) -> bool {
        self.session.apply_reset(reset)
    }

    /// Throw the session away and start over with a fresh one.
    /// Tickets from the old session no longer apply.
    pub fn restart(&mut self) {
        let (session, won) = new_session(self.game);
        self.session = session;
        self.won = won;
        self.final_score = None;
        self.session.start();
    }

    fn credit_win(&mut self, ledger: &mut RewardsLedger) -> Vec<RewardEvent> {
        let Some(score) = self.won.take() else {
            return Vec::new();
        };
        self.final_score = Some(score);
        info!(game = self.game.id.as_str(), score, "Game won");
        let mut events = ledger.add_points(u64::from(score));
        events.extend(ledger.increment_games_played());
        events
    }
}

fn new_session(game: &GameDescriptor) -> (GameSession, Rc<Cell<Option<u32>>>) {
    let won = Rc::new(Cell::new(None));
    let sink = won.clone();
    let session = GameSession::new(game.id, move |score| sink.set(Some(score)));
    (session, won)
}
