use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "playnest")]
#[command(about = "Stories, puzzles and mini-games with points and badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.playnest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, level and badges
    Status,

    /// Play one of the mini-games
    Play {
        /// Game id, e.g. math, memory, wordOrder (see `playnest games`)
        game: String,
    },

    /// Read a story paragraph by paragraph
    Read {
        /// Story id (see `playnest stories`)
        story: u32,

        /// Read the story aloud
        #[arg(long)]
        narrate: bool,
    },

    /// List puzzles
    Puzzles {
        /// Only this category: riddle, math, words, logic
        #[arg(long)]
        category: Option<String>,

        /// Only this difficulty: easy, medium, hard
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Show the answer to a puzzle
    Solve {
        /// Puzzle id
        puzzle: u32,

        /// Show the hint before the answer
        #[arg(long)]
        hint: bool,
    },

    /// List the mini-games
    Games,

    /// List or search stories
    Stories {
        /// Text to look for in titles and categories
        query: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// List videos
    Videos {
        #[arg(long)]
        category: Option<String>,
    },

    /// Mark a section as visited: home, stories, videos, games, puzzles
    Visit { section: String },

    /// Erase all progress
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Write a default ~/.playnest/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they stay out of the game screens
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config;
    let load_config = || playnest::Config::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path.as_deref(), force).await?;
        }
        Some(Commands::Status) | None => {
            cli::status::status_command(&load_config()?)?;
        }
        Some(Commands::Play { game }) => {
            cli::play::play_command(&load_config()?, &game).await?;
        }
        Some(Commands::Read { story, narrate }) => {
            cli::read::read_command(&load_config()?, story, narrate).await?;
        }
        Some(Commands::Puzzles {
            category,
            difficulty,
        }) => {
            cli::puzzles::puzzles_command(category.as_deref(), difficulty.as_deref())?;
        }
        Some(Commands::Solve { puzzle, hint }) => {
            cli::puzzles::solve_command(&load_config()?, puzzle, hint)?;
        }
        Some(Commands::Games) => cli::catalog::games_command(),
        Some(Commands::Stories { query, category }) => {
            cli::catalog::stories_command(query.as_deref(), category.as_deref());
        }
        Some(Commands::Videos { category }) => {
            cli::catalog::videos_command(category.as_deref());
        }
        Some(Commands::Visit { section }) => {
            cli::status::visit_command(&load_config()?, &section)?;
        }
        Some(Commands::Reset { yes }) => {
            cli::status::reset_command(&load_config()?, yes).await?;
        }
    }

    Ok(())
}
