//! Static content catalogs: stories, videos, games and puzzles
//!
//! Read-only data. Lookups by id return [`ContentError::NotFound`] for
//! unknown ids.

use crate::error::{ContentError, ContentKind};
use crate::games::GameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub emoji: &'static str,
    pub paragraphs: &'static [&'static str],
    pub moral: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Video {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    /// Path of the embedded asset, relative to the static asset root
    pub source: &'static str,
}

#[derive(Debug, Clone)]
pub struct GameDescriptor {
    pub id: GameId,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleCategory {
    Riddle,
    Math,
    Words,
    Logic,
}

impl PuzzleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Riddle => "riddle",
            Self::Math => "math",
            Self::Words => "words",
            Self::Logic => "logic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "riddle" => Some(Self::Riddle),
            "math" => Some(Self::Math),
            "words" => Some(Self::Words),
            "logic" => Some(Self::Logic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
    pub category: PuzzleCategory,
    pub difficulty: Difficulty,
    pub points: u64,
}

pub static STORIES: &[Story] = &[
    Story {
        id: 1,
        title: "The Honest Woodcutter",
        category: "Morals",
        emoji: "🪓",
        paragraphs: &[
            "A poor woodcutter was chopping wood by the river when his old axe slipped and fell into the water.",
            "A kind river spirit rose up holding a golden axe. \"Is this yours?\" she asked. \"No,\" said the woodcutter.",
            "She came back with a silver axe. \"Is this yours?\" \"No,\" he said again.",
            "At last she showed him his plain old axe, and he smiled. \"Yes, that one is mine!\"",
            "The spirit was so pleased with his honesty that she gave him all three axes.",
        ],
        moral: Some("Honesty is always the best choice."),
    },
    Story {
        id: 2,
        title: "The Tortoise and the Hare",
        category: "Animals",
        emoji: "🐢",
        paragraphs: &[
            "A fast hare laughed at a slow tortoise, so the tortoise asked for a race.",
            "The hare ran far ahead, then lay down under a tree for a nap.",
            "The tortoise kept walking, one small step after another, and never stopped.",
            "When the hare woke up, the tortoise was already crossing the finish line.",
        ],
        moral: Some("Slow and steady wins the race."),
    },
    Story {
        id: 3,
        title: "The Little Star Who Wanted to Shine",
        category: "Fantasy",
        emoji: "⭐",
        paragraphs: &[
            "In a corner of the sky lived a tiny star who thought her light was too small to matter.",
            "One night a lost little boat on the sea looked up and searched for a way home.",
            "The big stars were hidden by clouds, but the tiny star was shining right in the gap.",
            "The sailors followed her light all the way to the harbour, and the tiny star glowed with joy.",
        ],
        moral: Some("Even a small light can help someone find their way."),
    },
    Story {
        id: 4,
        title: "The Treasure Map",
        category: "Adventure",
        emoji: "🗺️",
        paragraphs: &[
            "Sami found an old map in his grandfather's attic with a big red X on it.",
            "He and his sister followed the map past the old well and over the hill.",
            "Under the big oak tree they dug and found a wooden box.",
            "Inside were photos of their family and a note: \"The real treasure is the people we love.\"",
        ],
        moral: None,
    },
    Story {
        id: 5,
        title: "The Ant and the Dove",
        category: "Animals",
        emoji: "🐜",
        paragraphs: &[
            "An ant fell into a stream and was about to be swept away.",
            "A dove dropped a leaf into the water, and the ant climbed onto it and reached the bank.",
            "Later a hunter aimed at the dove, and the ant bit his foot so the dove could fly away.",
        ],
        moral: Some("One good turn deserves another."),
    },
    Story {
        id: 6,
        title: "The Moon's Lost Shoe",
        category: "Fantasy",
        emoji: "🌙",
        paragraphs: &[
            "One night the Moon lost a silver shoe somewhere in the clouds.",
            "The owls, the bats and the fireflies all helped her look.",
            "A little firefly found it tangled in a cloud and carried it back, glowing proudly.",
        ],
        moral: Some("Friends help each other, big or small."),
    },
];

pub static VIDEOS: &[Video] = &[
    Video {
        id: 1,
        title: "Counting from 1 to 10",
        category: "Learning",
        duration: "3:20",
        source: "videos/counting-1-10.mp4",
    },
    Video {
        id: 2,
        title: "The Alphabet Song",
        category: "Songs",
        duration: "2:45",
        source: "videos/alphabet-song.mp4",
    },
    Video {
        id: 3,
        title: "How Plants Grow",
        category: "Science",
        duration: "4:10",
        source: "videos/how-plants-grow.mp4",
    },
    Video {
        id: 4,
        title: "Colors All Around Us",
        category: "Learning",
        duration: "3:05",
        source: "videos/colors-around-us.mp4",
    },
    Video {
        id: 5,
        title: "Animals of the Farm",
        category: "Science",
        duration: "5:00",
        source: "videos/farm-animals.mp4",
    },
    Video {
        id: 6,
        title: "Wash Your Hands Song",
        category: "Songs",
        duration: "2:10",
        source: "videos/wash-your-hands.mp4",
    },
    Video {
        id: 7,
        title: "The Little Red Hen",
        category: "Stories",
        duration: "6:30",
        source: "videos/little-red-hen.mp4",
    },
];

pub static GAMES: &[GameDescriptor] = &[
    GameDescriptor {
        id: GameId::Memory,
        title: "Memory Match",
        description: "Flip the cards and find the matching pairs",
        emoji: "🃏",
        difficulty: Difficulty::Easy,
    },
    GameDescriptor {
        id: GameId::Math,
        title: "Math Quiz",
        description: "Answer ten quick sums",
        emoji: "➕",
        difficulty: Difficulty::Medium,
    },
    GameDescriptor {
        id: GameId::ColorGame,
        title: "Colors",
        description: "Pick the square with the right color",
        emoji: "🎨",
        difficulty: Difficulty::Easy,
    },
    GameDescriptor {
        id: GameId::WordOrder,
        title: "Word Order",
        description: "Put the words together to make a sentence",
        emoji: "📝",
        difficulty: Difficulty::Medium,
    },
    GameDescriptor {
        id: GameId::CountGame,
        title: "Let's Count",
        description: "Count the pictures",
        emoji: "🔢",
        difficulty: Difficulty::Easy,
    },
    GameDescriptor {
        id: GameId::ShapeMatch,
        title: "Shapes",
        description: "Find the shape with the right name",
        emoji: "🔺",
        difficulty: Difficulty::Easy,
    },
    GameDescriptor {
        id: GameId::LetterFind,
        title: "Letter Hunt",
        description: "Count how often a letter appears",
        emoji: "🔤",
        difficulty: Difficulty::Medium,
    },
    GameDescriptor {
        id: GameId::AnimalSound,
        title: "Animal Sounds",
        description: "Which sound does each animal make?",
        emoji: "🐮",
        difficulty: Difficulty::Easy,
    },
    GameDescriptor {
        id: GameId::FindDiff,
        title: "Spot the Difference",
        description: "Find the picture that changed",
        emoji: "🔍",
        difficulty: Difficulty::Hard,
    },
    GameDescriptor {
        id: GameId::WordMatch,
        title: "Word Match",
        description: "Match each picture with its word",
        emoji: "🖼️",
        difficulty: Difficulty::Easy,
    },
];

pub static PUZZLES: &[Puzzle] = &[
    Puzzle {
        id: 1,
        question: "What has hands but cannot clap?",
        answer: "A clock",
        hint: "It tells you the time.",
        category: PuzzleCategory::Riddle,
        difficulty: Difficulty::Easy,
        points: 10,
    },
    Puzzle {
        id: 2,
        question: "If you have 3 apples and you take away 2, how many apples do you have?",
        answer: "2 - the ones you took",
        hint: "Read the question again carefully.",
        category: PuzzleCategory::Math,
        difficulty: Difficulty::Medium,
        points: 15,
    },
    Puzzle {
        id: 3,
        question: "What word becomes shorter when you add two letters to it?",
        answer: "Short (short + er = shorter)",
        hint: "Look at the question itself.",
        category: PuzzleCategory::Words,
        difficulty: Difficulty::Hard,
        points: 20,
    },
    Puzzle {
        id: 4,
        question: "Tom is taller than Sara. Sara is taller than Ali. Who is the shortest?",
        answer: "Ali",
        hint: "Line them up from tallest to shortest.",
        category: PuzzleCategory::Logic,
        difficulty: Difficulty::Easy,
        points: 10,
    },
    Puzzle {
        id: 5,
        question: "What has keys but cannot open locks?",
        answer: "A piano",
        hint: "It makes music.",
        category: PuzzleCategory::Riddle,
        difficulty: Difficulty::Easy,
        points: 10,
    },
    Puzzle {
        id: 6,
        question: "What number comes next: 2, 4, 6, 8, ...?",
        answer: "10",
        hint: "Count by twos.",
        category: PuzzleCategory::Math,
        difficulty: Difficulty::Easy,
        points: 10,
    },
    Puzzle {
        id: 7,
        question: "I am full of holes but I still hold water. What am I?",
        answer: "A sponge",
        hint: "You use it to wash dishes.",
        category: PuzzleCategory::Riddle,
        difficulty: Difficulty::Medium,
        points: 15,
    },
    Puzzle {
        id: 8,
        question: "Which letter comes next: A, C, E, G, ...?",
        answer: "I",
        hint: "Skip one letter each time.",
        category: PuzzleCategory::Words,
        difficulty: Difficulty::Medium,
        points: 15,
    },
    Puzzle {
        id: 9,
        question: "A farmer has 5 cows and all but 2 run away. How many are left?",
        answer: "2",
        hint: "\"All but 2\" means every one except 2.",
        category: PuzzleCategory::Logic,
        difficulty: Difficulty::Hard,
        points: 20,
    },
    Puzzle {
        id: 10,
        question: "What goes up but never comes down?",
        answer: "Your age",
        hint: "It changes on your birthday.",
        category: PuzzleCategory::Riddle,
        difficulty: Difficulty::Medium,
        points: 15,
    },
    Puzzle {
        id: 11,
        question: "How many legs do 3 cats have in total?",
        answer: "12",
        hint: "Each cat has 4 legs.",
        category: PuzzleCategory::Math,
        difficulty: Difficulty::Easy,
        points: 10,
    },
    Puzzle {
        id: 12,
        question: "If yesterday was Monday, what day is tomorrow?",
        answer: "Wednesday",
        hint: "First work out what today is.",
        category: PuzzleCategory::Logic,
        difficulty: Difficulty::Medium,
        points: 15,
    },
];

pub fn find_story(id: u32) -> Result<&'static Story, ContentError> {
    STORIES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ContentError::not_found(ContentKind::Story, id))
}

pub fn find_video(id: u32) -> Result<&'static Video, ContentError> {
    VIDEOS
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| ContentError::not_found(ContentKind::Video, id))
}

/// Look up a game by its route id (e.g. `wordOrder`)
pub fn find_game(id: &str) -> Result<&'static GameDescriptor, ContentError> {
    GameId::from_str(id)
        .and_then(|game| GAMES.iter().find(|g| g.id == game))
        .ok_or_else(|| ContentError::not_found(ContentKind::Game, id))
}

pub fn find_puzzle(id: u32) -> Result<&'static Puzzle, ContentError> {
    PUZZLES
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ContentError::not_found(ContentKind::Puzzle, id))
}

/// Stories whose title or category contains `query`, optionally limited to a category
pub fn search_stories(query: &str, category: Option<&str>) -> Vec<&'static Story> {
    let query = query.trim().to_lowercase();
    STORIES
        .iter()
        .filter(|s| {
            query.is_empty()
                || s.title.to_lowercase().contains(&query)
                || s.category.to_lowercase().contains(&query)
        })
        .filter(|s| category.is_none_or(|c| s.category.eq_ignore_ascii_case(c)))
        .collect()
}

/// Distinct story categories, in catalog order
pub fn story_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for story in STORIES {
        if !categories.contains(&story.category) {
            categories.push(story.category);
        }
    }
    categories
}

/// Videos whose title contains `query`, optionally limited to a category
pub fn search_videos(query: &str, category: Option<&str>) -> Vec<&'static Video> {
    let query = query.trim().to_lowercase();
    VIDEOS
        .iter()
        .filter(|v| query.is_empty() || v.title.to_lowercase().contains(&query))
        .filter(|v| category.is_none_or(|c| v.category.eq_ignore_ascii_case(c)))
        .collect()
}

/// Number of videos per category, in catalog order
pub fn video_category_counts() -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for video in VIDEOS {
        match counts.iter_mut().find(|(c, _)| *c == video.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((video.category, 1)),
        }
    }
    counts
}
