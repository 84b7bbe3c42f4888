//! Ledger state survives a restart through the SQLite store

mod common;

use common::{open_ledger, progress_db, KEY_PREFIX};
use playnest::content::{PuzzleBoard, StoryReader};
use playnest::rewards::{BadgeId, RewardsLedger, Section};
use playnest::store::{KeyValueStore, SqliteStore};

fn finish_story(id: u32, ledger: &mut RewardsLedger) {
    let mut reader = StoryReader::open(id).expect("story exists");
    while !reader.is_completed() {
        reader.next_paragraph(ledger);
    }
}

#[test]
fn test_progress_survives_reopen() {
    let (_dir, path) = progress_db();

    let earned_at = {
        let mut ledger = open_ledger(&path);
        finish_story(1, &mut ledger);
        PuzzleBoard::new()
            .reveal_answer(4, &mut ledger)
            .expect("puzzle exists");
        ledger.badge(BadgeId::FirstStory).unwrap().earned_at
    };

    let ledger = open_ledger(&path);
    assert_eq!(ledger.points(), 30);
    assert_eq!(ledger.stories_read(), 1);
    assert_eq!(ledger.puzzles_solved(), 1);
    assert!(ledger.badge(BadgeId::FirstPuzzle).unwrap().earned);

    let story_badge = ledger.badge(BadgeId::FirstStory).unwrap();
    assert!(story_badge.earned);
    assert!(earned_at.is_some());
    assert_eq!(story_badge.earned_at, earned_at);
}

#[test]
fn test_raw_layout_uses_prefixed_keys() {
    let (_dir, path) = progress_db();
    {
        let mut ledger = open_ledger(&path);
        ledger.add_points(40);
        ledger.increment_games_played();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("kids_points").unwrap().as_deref(), Some("40"));
    assert_eq!(store.get("kids_games_played").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("points").unwrap(), None);

    let badges: serde_json::Value =
        serde_json::from_str(&store.get("kids_badges").unwrap().unwrap()).unwrap();
    let badges = badges.as_array().unwrap();
    assert_eq!(badges.len(), 9);
    let first_game = badges.iter().find(|b| b["id"] == "first_game").unwrap();
    assert_eq!(first_game["earned"], true);
    assert!(first_game["earnedAt"].is_string());
}

#[test]
fn test_prefixes_are_isolated() {
    let (_dir, path) = progress_db();
    {
        let mut ledger = open_ledger(&path);
        ledger.add_points(55);
    }

    let store = SqliteStore::open(&path).unwrap();
    let other = RewardsLedger::load(Box::new(store), "sibling_");
    assert_eq!(other.points(), 0);
    assert_eq!(open_ledger(&path).points(), 55);
}

#[test]
fn test_corrupt_values_fall_back_to_defaults() {
    let (_dir, path) = progress_db();
    {
        let store = SqliteStore::open(&path).unwrap();
        store.set(&format!("{KEY_PREFIX}points"), "lots").unwrap();
        store.set(&format!("{KEY_PREFIX}badges"), "{not json").unwrap();
        store.set(&format!("{KEY_PREFIX}stories_read"), "3").unwrap();
    }

    let ledger = open_ledger(&path);
    assert_eq!(ledger.points(), 0);
    assert_eq!(ledger.stories_read(), 3);
    assert_eq!(ledger.badges().len(), 9);
    assert!(ledger.badge(BadgeId::FirstStory).unwrap().earned);
}

#[test]
fn test_explorer_and_reset_persist() {
    let (_dir, path) = progress_db();
    {
        let mut ledger = open_ledger(&path);
        for section in Section::all() {
            ledger.visit_section(*section);
        }
        assert!(ledger.badge(BadgeId::Explorer).unwrap().earned);
    }

    let mut ledger = open_ledger(&path);
    assert_eq!(ledger.sections_visited().len(), 5);
    assert!(ledger.badge(BadgeId::Explorer).unwrap().earned);

    ledger.reset();
    drop(ledger);

    let ledger = open_ledger(&path);
    assert!(ledger.sections_visited().is_empty());
    assert_eq!(ledger.earned_badges().count(), 0);
}
