//! Rewards ledger - points, counters and badges
//!
//! The ledger is the single owner of gamification state. Every mutation writes
//! the affected field through to the store and re-evaluates the badge catalog.
//! Store failures never abort a mutation: reads fall back to defaults and
//! writes are logged and skipped.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::checker::{self, ProgressSnapshot};
use super::definitions::{BadgeDefinition, BadgeId};
use super::levels::{level_for_points, LevelProgress, PointRewards};
use super::sections::{all_sections_visited, Section};
use crate::store::{KeyValueStore, MemoryStore, StorageKeys};

/// A catalog badge together with its earned state
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: BadgeId,
    pub earned: bool,
    pub earned_at: Option<DateTime<Utc>>,
}

impl Badge {
    fn unearned(id: BadgeId) -> Self {
        Self {
            id,
            earned: false,
            earned_at: None,
        }
    }

    pub fn definition(&self) -> &'static BadgeDefinition {
        BadgeDefinition::get(self.id)
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    pub fn emoji(&self) -> &'static str {
        self.definition().emoji
    }
}

/// Badge as serialized in the `badges` key
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBadge {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    earned_at: Option<DateTime<Utc>>,
}

impl From<&Badge> for StoredBadge {
    fn from(badge: &Badge) -> Self {
        Self {
            id: badge.id.as_str().to_string(),
            name: badge.name().to_string(),
            description: badge.description().to_string(),
            emoji: badge.emoji().to_string(),
            earned: badge.earned,
            earned_at: badge.earned_at,
        }
    }
}

/// Lay stored badge state over the fixed catalog: unknown IDs are dropped,
/// missing ones start unearned.
fn merge_badges(stored: &[StoredBadge]) -> Vec<Badge> {
    BadgeId::all()
        .iter()
        .map(|id| {
            match stored
                .iter()
                .find(|s| BadgeId::from_str(&s.id) == Some(*id))
            {
                Some(s) if s.earned => Badge {
                    id: *id,
                    earned: true,
                    earned_at: s.earned_at,
                },
                _ => Badge::unearned(*id),
            }
        })
        .collect()
}

fn default_badges() -> Vec<Badge> {
    BadgeId::all().iter().map(|id| Badge::unearned(*id)).collect()
}

/// Something the player should be told about after a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum RewardEvent {
    PointsAwarded { amount: u64, total: u64 },
    LevelUp { old_level: u64, new_level: u64 },
    BadgeEarned { id: BadgeId, earned_at: DateTime<Utc> },
}

/// Owner of points, activity counters, visited sections and badges
pub struct RewardsLedger {
    store: Box<dyn KeyValueStore>,
    keys: StorageKeys,
    points: u64,
    stories_read: u32,
    games_played: u32,
    puzzles_solved: u32,
    badges: Vec<Badge>,
    sections_visited: BTreeSet<Section>,
}

impl RewardsLedger {
    /// Rehydrate the ledger from a store. Missing or malformed values default.
    pub fn load(store: Box<dyn KeyValueStore>, key_prefix: &str) -> Self {
        let keys = StorageKeys::with_prefix(key_prefix);

        let points = read_value(store.as_ref(), &keys.points);
        let stories_read = read_value(store.as_ref(), &keys.stories_read);
        let games_played = read_value(store.as_ref(), &keys.games_played);
        let puzzles_solved = read_value(store.as_ref(), &keys.puzzles_solved);

        let badges = read_json::<Vec<StoredBadge>>(store.as_ref(), &keys.badges)
            .map(|stored| merge_badges(&stored))
            .unwrap_or_else(default_badges);

        let sections_visited = read_json::<Vec<String>>(store.as_ref(), &keys.sections_visited)
            .map(|names| names.iter().filter_map(|n| Section::from_str(n)).collect())
            .unwrap_or_default();

        let mut ledger = Self {
            store,
            keys,
            points,
            stories_read,
            games_played,
            puzzles_solved,
            badges,
            sections_visited,
        };

        debug!(
            points = ledger.points,
            stories_read = ledger.stories_read,
            games_played = ledger.games_played,
            puzzles_solved = ledger.puzzles_solved,
            "Loaded rewards ledger"
        );

        // Thresholds reached by an earlier run whose badge write was lost
        ledger.check_badges();
        ledger
    }

    /// A ledger over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()), "")
    }

    // ========================================
    // READ ACCESS
    // ========================================

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Derived from points on every call
    pub fn level(&self) -> u64 {
        level_for_points(self.points)
    }

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::new(self.points)
    }

    pub fn stories_read(&self) -> u32 {
        self.stories_read
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn puzzles_solved(&self) -> u32 {
        self.puzzles_solved
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn badge(&self, id: BadgeId) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn earned_badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|b| b.earned)
    }

    pub fn sections_visited(&self) -> &BTreeSet<Section> {
        &self.sections_visited
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            points: self.points,
            stories_read: self.stories_read,
            games_played: self.games_played,
            puzzles_solved: self.puzzles_solved,
            all_sections_visited: all_sections_visited(&self.sections_visited),
        }
    }

    // ========================================
    // MUTATIONS
    // ========================================

    /// Add points, persist them, and report level-ups and new badges
    pub fn add_points(&mut self, amount: u64) -> Vec<RewardEvent> {
        if amount == 0 {
            return Vec::new();
        }

        let old_level = self.level();
        self.points = self.points.saturating_add(amount);
        self.write(&self.keys.points, &self.points.to_string());

        let mut events = vec![RewardEvent::PointsAwarded {
            amount,
            total: self.points,
        }];

        let new_level = self.level();
        if new_level > old_level {
            info!(old_level, new_level, "Level up");
            events.push(RewardEvent::LevelUp {
                old_level,
                new_level,
            });
        }

        events.extend(self.check_badges());
        events
    }

    /// Count a completed story. Also awards the fixed completion points.
    pub fn increment_stories_read(&mut self) -> Vec<RewardEvent> {
        self.stories_read = self.stories_read.saturating_add(1);
        self.write(&self.keys.stories_read, &self.stories_read.to_string());
        // add_points re-checks badges with the new counter in place
        self.add_points(PointRewards::STORY_COMPLETED)
    }

    /// Count a finished game. Points are awarded separately by the caller.
    pub fn increment_games_played(&mut self) -> Vec<RewardEvent> {
        self.games_played = self.games_played.saturating_add(1);
        self.write(&self.keys.games_played, &self.games_played.to_string());
        self.check_badges()
    }

    /// Count a solved puzzle. Points are awarded separately by the caller.
    pub fn increment_puzzles_solved(&mut self) -> Vec<RewardEvent> {
        self.puzzles_solved = self.puzzles_solved.saturating_add(1);
        self.write(&self.keys.puzzles_solved, &self.puzzles_solved.to_string());
        self.check_badges()
    }

    /// Record that a section was opened
    pub fn visit_section(&mut self, section: Section) -> Vec<RewardEvent> {
        if !self.sections_visited.insert(section) {
            return Vec::new();
        }

        let names: Vec<&str> = self.sections_visited.iter().map(|s| s.as_str()).collect();
        match serde_json::to_string(&names) {
            Ok(json) => self.write(&self.keys.sections_visited, &json),
            Err(e) => warn!(error = %e, "Failed to serialize visited sections"),
        }

        self.check_badges()
    }

    /// Unlock every badge whose threshold is met and that is not yet earned.
    ///
    /// Idempotent: earned badges are never touched again, so a second call with
    /// unchanged state returns no events.
    pub fn check_badges(&mut self) -> Vec<RewardEvent> {
        let earned: Vec<BadgeId> = self.earned_badges().map(|b| b.id).collect();
        let newly_unlocked = checker::check_badges(&self.snapshot(), &earned);
        if newly_unlocked.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        let mut events = Vec::with_capacity(newly_unlocked.len());
        for id in newly_unlocked {
            if let Some(badge) = self.badges.iter_mut().find(|b| b.id == id) {
                badge.earned = true;
                badge.earned_at = Some(now);
                info!(badge = id.as_str(), "Badge earned");
                events.push(RewardEvent::BadgeEarned { id, earned_at: now });
            }
        }

        self.persist_badges();
        events
    }

    /// Wipe all progress, in memory and in the store
    pub fn reset(&mut self) {
        for key in self.keys.all() {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to remove progress value");
            }
        }

        self.points = 0;
        self.stories_read = 0;
        self.games_played = 0;
        self.puzzles_solved = 0;
        self.badges = default_badges();
        self.sections_visited.clear();
        info!("Progress reset");
    }

    // ========================================
    // PERSISTENCE
    // ========================================

    fn persist_badges(&self) {
        let stored: Vec<StoredBadge> = self.badges.iter().map(StoredBadge::from).collect();
        match serde_json::to_string(&stored) {
            Ok(json) => self.write(&self.keys.badges, &json),
            Err(e) => warn!(error = %e, "Failed to serialize badges"),
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "Failed to persist progress value");
        }
    }
}

fn read_value<T: FromStr + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            debug!(key, raw = %raw, "Malformed progress value, using default");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read progress value");
            T::default()
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "Malformed progress document, using default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read progress document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn ledger_with_store() -> (RewardsLedger, MemoryStore) {
        let store = MemoryStore::new();
        let ledger = RewardsLedger::load(Box::new(store.clone()), "kids_");
        (ledger, store)
    }

    fn earned_ids(ledger: &RewardsLedger) -> Vec<BadgeId> {
        ledger.earned_badges().map(|b| b.id).collect()
    }

    #[test]
    fn test_fresh_ledger_defaults() {
        let (ledger, store) = ledger_with_store();
        assert_eq!(ledger.points(), 0);
        assert_eq!(ledger.level(), 1);
        assert_eq!(ledger.badges().len(), 9);
        assert!(earned_ids(&ledger).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_first_story_scenario() {
        let (mut ledger, _) = ledger_with_store();
        let events = ledger.increment_stories_read();

        assert_eq!(ledger.points(), 5);
        assert_eq!(ledger.stories_read(), 1);
        assert_eq!(earned_ids(&ledger), vec![BadgeId::FirstStory]);
        assert!(events.contains(&RewardEvent::PointsAwarded {
            amount: 5,
            total: 5
        }));
        assert!(events
            .iter()
            .any(|e| matches!(e, RewardEvent::BadgeEarned { id: BadgeId::FirstStory, .. })));
    }

    #[test]
    fn test_hundred_points_scenario() {
        let (mut ledger, _) = ledger_with_store();
        let events = ledger.add_points(100);

        assert_eq!(ledger.points(), 100);
        assert_eq!(ledger.level(), 2);
        assert_eq!(earned_ids(&ledger), vec![BadgeId::Points100]);
        assert!(events.contains(&RewardEvent::LevelUp {
            old_level: 1,
            new_level: 2
        }));
    }

    #[test]
    fn test_points_sum_and_level_at_every_step() {
        let (mut ledger, _) = ledger_with_store();
        let mut sum = 0;
        for amount in [7, 93, 1, 150, 49, 250] {
            ledger.add_points(amount);
            sum += amount;
            assert_eq!(ledger.points(), sum);
            assert_eq!(ledger.level(), sum / 100 + 1);
        }
    }

    #[test]
    fn test_check_badges_is_idempotent() {
        let (mut ledger, _) = ledger_with_store();
        ledger.add_points(120);
        ledger.increment_games_played();

        let before = ledger.badges().to_vec();
        assert!(ledger.check_badges().is_empty());
        assert!(ledger.check_badges().is_empty());
        assert_eq!(ledger.badges(), before.as_slice());
    }

    #[test]
    fn test_counters_do_not_award_points() {
        let (mut ledger, _) = ledger_with_store();
        ledger.increment_games_played();
        ledger.increment_puzzles_solved();

        assert_eq!(ledger.points(), 0);
        assert_eq!(
            earned_ids(&ledger),
            vec![BadgeId::FirstGame, BadgeId::FirstPuzzle]
        );
    }

    #[test]
    fn test_writes_through_to_store() {
        let (mut ledger, store) = ledger_with_store();
        ledger.increment_stories_read();
        ledger.increment_puzzles_solved();

        assert_eq!(store.get("kids_points").unwrap().as_deref(), Some("5"));
        assert_eq!(store.get("kids_stories_read").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("kids_puzzles_solved").unwrap().as_deref(), Some("1"));

        let badges: serde_json::Value =
            serde_json::from_str(&store.get("kids_badges").unwrap().unwrap()).unwrap();
        assert_eq!(badges[0]["id"], "first_story");
        assert_eq!(badges[0]["earned"], true);
        assert!(badges[0]["earnedAt"].is_string());
        assert!(badges[1].get("earnedAt").is_none());
    }

    #[test]
    fn test_reload_preserves_state() {
        let (mut ledger, store) = ledger_with_store();
        ledger.add_points(140);
        ledger.increment_games_played();
        let earned_at = ledger.badge(BadgeId::Points100).unwrap().earned_at;

        let reloaded = RewardsLedger::load(Box::new(store), "kids_");
        assert_eq!(reloaded.points(), 140);
        assert_eq!(reloaded.level(), 2);
        assert_eq!(reloaded.games_played(), 1);
        assert_eq!(
            earned_ids(&reloaded),
            vec![BadgeId::FirstGame, BadgeId::Points100]
        );
        assert_eq!(reloaded.badge(BadgeId::Points100).unwrap().earned_at, earned_at);
    }

    #[test]
    fn test_malformed_values_default() {
        let store = MemoryStore::new();
        store.set("points", "lots").unwrap();
        store.set("games_played", "-3").unwrap();
        store.set("badges", "{not json").unwrap();

        let ledger = RewardsLedger::load(Box::new(store), "");
        assert_eq!(ledger.points(), 0);
        assert_eq!(ledger.games_played(), 0);
        assert_eq!(ledger.badges().len(), 9);
    }

    #[test]
    fn test_stored_badges_merge_onto_catalog() {
        let store = MemoryStore::new();
        store
            .set(
                "badges",
                r#"[{"id":"game_master","earned":true},{"id":"retired_badge","earned":true}]"#,
            )
            .unwrap();

        let ledger = RewardsLedger::load(Box::new(store), "");
        assert_eq!(ledger.badges().len(), 9);
        assert_eq!(earned_ids(&ledger), vec![BadgeId::GameMaster]);
    }

    #[test]
    fn test_persisted_badge_stays_earned_below_threshold() {
        let store = MemoryStore::new();
        store
            .set("badges", r#"[{"id":"points_500","earned":true}]"#)
            .unwrap();
        let mut ledger = RewardsLedger::load(Box::new(store), "");

        ledger.add_points(10);
        assert!(ledger.badge(BadgeId::Points500).unwrap().earned);
    }

    #[test]
    fn test_explorer_badge() {
        let (mut ledger, store) = ledger_with_store();
        for section in &Section::all()[..4] {
            ledger.visit_section(*section);
        }
        assert!(!ledger.badge(BadgeId::Explorer).unwrap().earned);

        assert!(ledger.visit_section(Section::Home).is_empty());
        let events = ledger.visit_section(Section::Puzzles);
        assert!(events
            .iter()
            .any(|e| matches!(e, RewardEvent::BadgeEarned { id: BadgeId::Explorer, .. })));

        let reloaded = RewardsLedger::load(Box::new(store), "kids_");
        assert_eq!(reloaded.sections_visited().len(), 5);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut ledger, store) = ledger_with_store();
        ledger.add_points(600);
        ledger.visit_section(Section::Games);
        ledger.reset();

        assert_eq!(ledger.points(), 0);
        assert_eq!(ledger.level(), 1);
        assert!(earned_ids(&ledger).is_empty());
        assert!(ledger.sections_visited().is_empty());
        assert!(store.is_empty());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut ledger = RewardsLedger::load(Box::new(FailingStore), "");
        ledger.add_points(100);
        ledger.increment_stories_read();

        assert_eq!(ledger.points(), 105);
        assert!(ledger.badge(BadgeId::Points100).unwrap().earned);
        assert!(ledger.badge(BadgeId::FirstStory).unwrap().earned);
    }
}
