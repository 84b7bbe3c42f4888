//! Interactive game command

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use playnest::content::GamePlay;
use playnest::engine::{
    AnswerKind, DelayedReset, FlipOutcome, MemoryMatch, Round, SessionStatus, Submission,
    SubmitOutcome,
};
use playnest::games::GameSession;
use playnest::rewards::{RewardsLedger, Section};
use playnest::Config;

use super::{open_ledger, print_events, Input};

pub async fn play_command(config: &Config, game_id: &str) -> Result<()> {
    let mut play = GamePlay::open(game_id)?;
    let mut ledger = open_ledger(config)?;
    print_events(&ledger.visit_section(Section::Games));

    let game = play.game();
    println!("{} {}: {}", game.emoji, game.title, game.description);
    println!("[r] restart, [q] quit\n");

    play.start();
    let mut input = Input::new();

    while play.status() == SessionStatus::Active {
        let prompt = match play.session() {
            GameSession::Rounds(session) => match session.current_round() {
                Some(round) => {
                    show_round(round, session.round_index(), session.total_rounds());
                    "> "
                }
                None => break,
            },
            GameSession::Cards(cards) => {
                show_cards(cards);
                "card> "
            }
        };

        let Some(line) = input.ask(prompt).await? else {
            return Ok(());
        };
        match line.as_str() {
            "q" => return Ok(()),
            "r" => {
                play.restart();
                println!("Starting over!\n");
                continue;
            }
            _ => {}
        }

        let reset = if matches!(play.session(), GameSession::Cards(_)) {
            flip_card(&mut play, &line, &mut ledger)
        } else {
            answer_round(&mut play, &line, &mut ledger)
        };
        if let Some(reset) = reset {
            tokio::time::sleep(Duration::from_millis(config.timing.delay_for(&reset))).await;
            if !play.apply_reset(reset) {
                debug!(seq = reset.seq, "Delayed reset no longer current");
            }
        }
    }

    if let Some(score) = play.final_score() {
        println!("\n🏆 You won with {} points!", score);
        println!("Total points: {}  (level {})", ledger.points(), ledger.level());
    }
    Ok(())
}

fn show_round(round: &Round, index: usize, total: usize) {
    println!("Round {}/{}", index + 1, total);
    println!("{}", round.prompt);
    match round.answer_kind() {
        AnswerKind::Number => {}
        AnswerKind::Sequence => {
            println!("  Words: {}", numbered(&round.options));
            println!("  Type the sentence, or the word numbers in order");
        }
        AnswerKind::Choice => println!("  {}", numbered(&round.options)),
        AnswerKind::Position => {
            println!("Right: {}", numbered(&round.options));
            println!("  Which one is different?");
        }
    }
}

fn numbered(options: &[String]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}) {}", i + 1, o))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Turn a typed line into a submission for the round's input widget
fn parse_submission(round: &Round, line: &str) -> Submission {
    let pick = |s: &str| {
        s.parse::<usize>()
            .ok()
            .filter(|n| (1..=round.options.len()).contains(n))
            .map(|n| n - 1)
    };

    match round.answer_kind() {
        AnswerKind::Number => Submission::Typed(line.to_string()),
        AnswerKind::Choice => match pick(line) {
            Some(i) => Submission::Choice(round.options[i].clone()),
            None => Submission::Choice(line.to_string()),
        },
        AnswerKind::Position => match pick(line) {
            Some(i) => Submission::Position(i),
            None => Submission::Typed(line.to_string()),
        },
        AnswerKind::Sequence => {
            let picks: Option<Vec<usize>> = line.split_whitespace().map(pick).collect();
            match picks {
                Some(picks) if !picks.is_empty() => Submission::Sequence(
                    picks.into_iter().map(|i| round.options[i].clone()).collect(),
                ),
                _ => Submission::Typed(line.to_string()),
            }
        }
    }
}

fn answer_round(play: &mut GamePlay, line: &str, ledger: &mut RewardsLedger) -> Option<DelayedReset> {
    let GameSession::Rounds(session) = play.session() else {
        return None;
    };
    let submission = parse_submission(session.current_round()?, line);

    let (outcome, events) = play.submit(&submission, ledger);
    let reset = match outcome {
        SubmitOutcome::Correct { awarded, reset } => {
            println!("✅ Correct! +{}\n", awarded);
            Some(reset)
        }
        SubmitOutcome::Wrong { reset } => {
            println!("❌ Not quite, try again\n");
            Some(reset)
        }
        SubmitOutcome::Finished { .. } => {
            println!("✅ Correct!");
            None
        }
        SubmitOutcome::Ignored => None,
    };
    print_events(&events);
    reset
}

fn show_cards(game: &MemoryMatch) {
    let row: Vec<String> = game
        .cards()
        .iter()
        .map(|c| {
            if c.face_up || c.matched {
                format!("{:>2}:{}", c.id + 1, c.symbol)
            } else {
                format!("{:>2}:❓", c.id + 1)
            }
        })
        .collect();
    for chunk in row.chunks(4) {
        println!("  {}", chunk.join("  "));
    }
    println!("Moves: {}  Pairs left: {}", game.moves(), game.pairs_left());
}

fn flip_card(play: &mut GamePlay, line: &str, ledger: &mut RewardsLedger) -> Option<DelayedReset> {
    let Some(card) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
        println!("Type a card number\n");
        return None;
    };

    let (outcome, events) = play.flip(card, ledger);
    let reset = match outcome {
        FlipOutcome::Mismatched { reset } => {
            if let GameSession::Cards(game) = play.session() {
                show_cards(game);
            }
            println!("❌ No match\n");
            Some(reset)
        }
        FlipOutcome::Matched { pairs_left } => {
            println!("✅ Match! {} pairs to go\n", pairs_left);
            None
        }
        FlipOutcome::Finished { moves, .. } => {
            println!("✅ All pairs found in {} moves!", moves);
            None
        }
        FlipOutcome::Ignored | FlipOutcome::Rejected => {
            println!("You can't pick that card\n");
            None
        }
        FlipOutcome::FirstCard => None,
    };
    print_events(&events);
    reset
}
