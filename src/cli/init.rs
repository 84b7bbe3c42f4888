//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use playnest::Config;

/// Default configuration content for playnest init
pub const DEFAULT_CONFIG: &str = r#"# Playnest Configuration
# =======================

# ============================================================================
# STORAGE - Where points, badges and counters are kept
# ============================================================================
#
#   path        - SQLite progress file (default: ~/.playnest/progress.db)
#   key_prefix  - Prefix for every stored key (default: "kids_")

[storage]
key_prefix = "kids_"

# ============================================================================
# TIMING - How long feedback stays on screen in the games (milliseconds)
# ============================================================================

[timing]
feedback_ms = 800
flip_back_ms = 1000

# ============================================================================
# NARRATION - Read-aloud voice for stories
# ============================================================================

[narration]
lang = "en-US"
rate = 0.8
"#;

/// Write the default configuration file
pub async fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(&config_path, DEFAULT_CONFIG).await?;
    println!("Created: {}", config_path.display());

    Ok(())
}
