//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::Deserialize;

use crate::engine::{DelayedReset, ResetKind, FEEDBACK_DELAY_MS, FLIP_BACK_DELAY_MS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Where progress is kept
    #[serde(default)]
    pub storage: StorageSettings,

    /// Delays used by the game surfaces
    #[serde(default)]
    pub timing: TimingSettings,

    /// Read-aloud voice
    #[serde(default)]
    pub narration: NarrationSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageSettings {
    /// Progress database file. Defaults to ~/.playnest/progress.db
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Prefix applied to every stored key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingSettings {
    /// How long correct/wrong feedback stays on screen
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,

    /// How long a mismatched card pair stays face up
    #[serde(default = "default_flip_back_ms")]
    pub flip_back_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NarrationSettings {
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Speech rate, 1.0 is normal speed
    #[serde(default = "default_rate")]
    pub rate: f32,
}

fn default_key_prefix() -> String {
    "kids_".to_string()
}

fn default_feedback_ms() -> u64 {
    FEEDBACK_DELAY_MS
}

fn default_flip_back_ms() -> u64 {
    FLIP_BACK_DELAY_MS
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_rate() -> f32 {
    0.8
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: None,
            key_prefix: default_key_prefix(),
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
            flip_back_ms: default_flip_back_ms(),
        }
    }
}

impl TimingSettings {
    /// How long to wait before applying `reset`
    pub fn delay_for(&self, reset: &DelayedReset) -> u64 {
        match reset.kind {
            ResetKind::ClearFeedback | ResetKind::Advance => self.feedback_ms,
            ResetKind::FlipBack => self.flip_back_ms,
        }
    }
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            rate: default_rate(),
        }
    }
}

impl Config {
    /// Progress database path, falling back to the global directory
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("progress.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.key_prefix, "kids_");
        assert_eq!(config.timing.feedback_ms, 800);
        assert_eq!(config.timing.flip_back_ms, 1000);
        assert_eq!(config.narration.lang, "en-US");
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[storage]
path = "/tmp/kids.db"

[timing]
feedback_ms = 300
"#,
        )
        .unwrap();
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/kids.db"));
        assert_eq!(config.storage.key_prefix, "kids_");
        assert_eq!(config.timing.feedback_ms, 300);
        assert_eq!(config.timing.flip_back_ms, 1000);
    }

    #[test]
    fn test_delay_follows_reset_kind() {
        let timing = TimingSettings {
            feedback_ms: 5,
            flip_back_ms: 7,
        };
        let reset = |kind| DelayedReset {
            session: crate::engine::SessionId::new(),
            seq: 1,
            kind,
        };
        assert_eq!(timing.delay_for(&reset(ResetKind::Advance)), 5);
        assert_eq!(timing.delay_for(&reset(ResetKind::ClearFeedback)), 5);
        assert_eq!(timing.delay_for(&reset(ResetKind::FlipBack)), 7);
    }

    #[test]
    fn test_default_storage_path_is_global() {
        let config = Config::default();
        assert!(config.storage_path().ends_with(".playnest/progress.db"));
    }
}
