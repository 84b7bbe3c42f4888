//! Catalog listings: games, stories, videos

use playnest::content::catalog::{
    search_stories, search_videos, story_categories, video_category_counts, GAMES,
};

pub fn games_command() {
    println!("Games ({}):\n", GAMES.len());
    for game in GAMES {
        println!(
            "  {} {:<20} [{}] {}",
            game.emoji,
            game.title,
            game.difficulty.as_str(),
            game.id.as_str()
        );
        println!("     {}", game.description);
    }
}

pub fn stories_command(query: Option<&str>, category: Option<&str>) {
    let stories = search_stories(query.unwrap_or(""), category);
    if stories.is_empty() {
        println!("No stories found.");
        println!("Categories: {}", story_categories().join(", "));
        return;
    }

    println!("Stories ({}):\n", stories.len());
    for story in stories {
        println!(
            "  #{} {} {} ({}, {} pages)",
            story.id,
            story.emoji,
            story.title,
            story.category,
            story.paragraphs.len()
        );
    }
}

pub fn videos_command(category: Option<&str>) {
    let counts: Vec<String> = video_category_counts()
        .iter()
        .map(|(c, n)| format!("{} ({})", c, n))
        .collect();
    println!("Categories: {}\n", counts.join(", "));

    let videos = search_videos("", category);
    if videos.is_empty() {
        println!("No videos found.");
        return;
    }
    for video in videos {
        println!(
            "  #{} {} [{}] {} - {}",
            video.id, video.title, video.category, video.duration, video.source
        );
    }
}
