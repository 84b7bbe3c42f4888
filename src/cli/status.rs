//! Progress commands: status, visit, reset

use anyhow::{bail, Result};

use playnest::rewards::Section;
use playnest::Config;

use super::{open_ledger, print_events, Input};

const BAR_WIDTH: usize = 20;

/// Show points, level progress, counters and badges
pub fn status_command(config: &Config) -> Result<()> {
    let ledger = open_ledger(config)?;
    let progress = ledger.level_progress();
    let filled = (progress.fraction() * BAR_WIDTH as f32).round() as usize;

    println!("Level {}  ({} points)", progress.level, ledger.points());
    println!(
        "  [{}{}] {} more to level {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.points_to_next,
        progress.level + 1
    );
    println!();
    println!("  📚 Stories read:  {}", ledger.stories_read());
    println!("  🎮 Games won:     {}", ledger.games_played());
    println!("  🧩 Puzzles solved: {}", ledger.puzzles_solved());
    println!();

    let earned = ledger.earned_badges().count();
    println!("Badges ({}/{}):\n", earned, ledger.badges().len());
    for badge in ledger.badges() {
        let mark = if badge.earned { badge.emoji() } else { "🔒" };
        print!("  {} {} - {}", mark, badge.name(), badge.description());
        if let Some(at) = badge.earned_at {
            print!(" (earned {})", at.format("%Y-%m-%d"));
        }
        println!();
    }

    Ok(())
}

/// Record a visit to one of the site sections
pub fn visit_command(config: &Config, section: &str) -> Result<()> {
    let Some(section) = Section::from_str(section) else {
        let names: Vec<&str> = Section::all().iter().map(|s| s.as_str()).collect();
        bail!("Unknown section: {}\nAvailable: {}", section, names.join(", "));
    };

    let mut ledger = open_ledger(config)?;
    let events = ledger.visit_section(section);
    println!(
        "Visited {} ({}/{} sections)",
        section.as_str(),
        ledger.sections_visited().len(),
        Section::all().len()
    );
    print_events(&events);
    Ok(())
}

/// Erase all stored progress
pub async fn reset_command(config: &Config, yes: bool) -> Result<()> {
    if !yes {
        let answer = Input::new()
            .ask("This erases all points and badges. Type 'yes' to continue: ")
            .await?;
        if answer.as_deref() != Some("yes") {
            println!("Nothing changed.");
            return Ok(());
        }
    }

    let mut ledger = open_ledger(config)?;
    ledger.reset();
    println!("All progress erased.");
    Ok(())
}
