//! Playnest - rewards and mini-games for a kids' learning corner
//!
//! The crate has two cores that everything else feeds into:
//!
//! - [`rewards`]: the points / level / badge ledger, persisted through a
//!   small key-value [`store`].
//! - [`engine`]: the round and card-matching state machines that every
//!   mini-game in [`games`] is built from.
//!
//! [`content`] holds the static catalogs and the surfaces (story reader,
//! puzzle board, game page) that report completions to the ledger.

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod games;
pub mod rewards;
pub mod store;

pub use config::Config;
pub use error::{ContentError, StoreError};
pub use rewards::RewardsLedger;
