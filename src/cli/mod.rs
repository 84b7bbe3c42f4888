//! CLI command implementations

pub mod catalog;
pub mod init;
pub mod play;
pub mod puzzles;
pub mod read;
pub mod status;

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use playnest::rewards::{BadgeDefinition, RewardEvent, RewardsLedger};
use playnest::store::SqliteStore;
use playnest::Config;

/// Open the ledger backed by the configured progress database
pub fn open_ledger(config: &Config) -> Result<RewardsLedger> {
    let path = config.storage_path();
    let store = SqliteStore::open(&path)
        .with_context(|| format!("Failed to open progress database: {}", path.display()))?;
    Ok(RewardsLedger::load(Box::new(store), &config.storage.key_prefix))
}

/// Print celebrations for everything the ledger reported
pub fn print_events(events: &[RewardEvent]) {
    for event in events {
        match event {
            RewardEvent::PointsAwarded { amount, total } => {
                println!("  ⭐ +{} points ({} total)", amount, total);
            }
            RewardEvent::LevelUp { new_level, .. } => {
                println!("  🎉 Level up! You reached level {}", new_level);
            }
            RewardEvent::BadgeEarned { id, .. } => {
                let badge = BadgeDefinition::get(*id);
                println!("  🏅 New badge: {} {} - {}", badge.emoji, badge.name, badge.description);
            }
        }
    }
}

/// Line-oriented reader over stdin
pub struct Input {
    lines: Lines<BufReader<Stdin>>,
}

impl Input {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Show `prompt` and wait for one trimmed line; `None` at end of input
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }
}
