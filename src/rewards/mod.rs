//! Gamification layer: points, levels, badges
//!
//! Every content surface reports completions here. The ledger owns the state,
//! persists it through a [`KeyValueStore`](crate::store::KeyValueStore) and
//! unlocks badges as thresholds are crossed.

mod checker;
mod definitions;
mod ledger;
mod levels;
mod sections;

pub use checker::{condition_met, ProgressSnapshot};
pub use definitions::{BadgeCondition, BadgeDefinition, BadgeId, BADGES};
pub use ledger::{Badge, RewardEvent, RewardsLedger};
pub use levels::{level_for_points, LevelProgress, PointRewards, POINTS_PER_LEVEL};
pub use sections::{all_sections_visited, Section};
