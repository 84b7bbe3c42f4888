//! Static round tables for the data-driven games

/// Symbols of the card-matching deck (each appears twice)
pub const MEMORY_SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

pub struct ColorRound {
    pub name: &'static str,
    pub swatch: &'static str,
    pub options: [&'static str; 4],
}

const WARM_SET: [&str; 4] = ["🟥", "🟦", "🟩", "🟨"];
const DARK_SET: [&str; 4] = ["🟪", "🟧", "🟫", "⬛"];

pub const COLORS: &[ColorRound] = &[
    ColorRound { name: "red", swatch: "🟥", options: WARM_SET },
    ColorRound { name: "blue", swatch: "🟦", options: WARM_SET },
    ColorRound { name: "green", swatch: "🟩", options: WARM_SET },
    ColorRound { name: "yellow", swatch: "🟨", options: WARM_SET },
    ColorRound { name: "purple", swatch: "🟪", options: DARK_SET },
    ColorRound { name: "orange", swatch: "🟧", options: DARK_SET },
    ColorRound { name: "brown", swatch: "🟫", options: DARK_SET },
    ColorRound { name: "black", swatch: "⬛", options: DARK_SET },
];

/// Sentences for word ordering, already in the right order
pub const SENTENCES: &[&str] = &[
    "the cat drinks milk",
    "birds fly very high",
    "we play in the park",
    "the garden is pretty",
    "I love my family",
];

pub struct CountRound {
    pub emoji: &'static str,
    pub count: usize,
}

pub const COUNT_ROUNDS: &[CountRound] = &[
    CountRound { emoji: "🍎", count: 5 },
    CountRound { emoji: "⭐", count: 8 },
    CountRound { emoji: "🐶", count: 3 },
    CountRound { emoji: "🌸", count: 7 },
    CountRound { emoji: "🎈", count: 6 },
    CountRound { emoji: "🦋", count: 4 },
    CountRound { emoji: "🍕", count: 9 },
    CountRound { emoji: "🚗", count: 2 },
];

pub struct ChoiceRound {
    pub subject: &'static str,
    pub answer: &'static str,
    pub options: [&'static str; 4],
}

const BASIC_SHAPES: [&str; 4] = ["⭕", "🔷", "🔺", "⬛"];
const FANCY_SHAPES: [&str; 4] = ["⭐", "🌙", "❤️", "💎"];

pub const SHAPES: &[ChoiceRound] = &[
    ChoiceRound { subject: "circle", answer: "⭕", options: BASIC_SHAPES },
    ChoiceRound { subject: "square", answer: "⬛", options: BASIC_SHAPES },
    ChoiceRound { subject: "triangle", answer: "🔺", options: BASIC_SHAPES },
    ChoiceRound { subject: "diamond", answer: "🔷", options: BASIC_SHAPES },
    ChoiceRound { subject: "star", answer: "⭐", options: FANCY_SHAPES },
    ChoiceRound { subject: "heart", answer: "❤️", options: FANCY_SHAPES },
];

const FARM_SOUNDS: [&str; 4] = ["meow", "woof", "moo", "quack"];
const WILD_SOUNDS: [&str; 4] = ["roar", "hee-haw", "baa", "cock-a-doodle-doo"];

pub const ANIMALS: &[ChoiceRound] = &[
    ChoiceRound { subject: "🐱 cat", answer: "meow", options: FARM_SOUNDS },
    ChoiceRound { subject: "🐶 dog", answer: "woof", options: FARM_SOUNDS },
    ChoiceRound { subject: "🐮 cow", answer: "moo", options: FARM_SOUNDS },
    ChoiceRound { subject: "🦆 duck", answer: "quack", options: FARM_SOUNDS },
    ChoiceRound { subject: "🦁 lion", answer: "roar", options: WILD_SOUNDS },
    ChoiceRound { subject: "🫏 donkey", answer: "hee-haw", options: WILD_SOUNDS },
];

pub const WORD_MATCHES: &[ChoiceRound] = &[
    ChoiceRound { subject: "🐶", answer: "dog", options: ["cat", "dog", "lion", "horse"] },
    ChoiceRound { subject: "🍎", answer: "apple", options: ["banana", "apple", "orange", "grape"] },
    ChoiceRound { subject: "🏠", answer: "house", options: ["school", "shop", "house", "garden"] },
    ChoiceRound { subject: "📚", answer: "book", options: ["pen", "book", "ruler", "bag"] },
    ChoiceRound { subject: "🌙", answer: "moon", options: ["sun", "star", "moon", "cloud"] },
];

pub struct LetterRound {
    pub sentence: &'static str,
    pub letter: char,
}

pub const LETTER_ROUNDS: &[LetterRound] = &[
    LetterRound { sentence: "the cat sat on the mat", letter: 't' },
    LetterRound { sentence: "a big brown bear", letter: 'b' },
    LetterRound { sentence: "my mom makes muffins", letter: 'm' },
    LetterRound { sentence: "look at the moon", letter: 'o' },
    LetterRound { sentence: "sunny skies smile", letter: 's' },
];

pub struct DiffRound {
    pub title: &'static str,
    pub left: [&'static str; 5],
    pub right: [&'static str; 5],
}

pub const DIFF_ROUNDS: &[DiffRound] = &[
    DiffRound {
        title: "Find the difference between the two rows",
        left: ["🐶", "🐱", "🐭", "🐰", "🦊"],
        right: ["🐶", "🐱", "🐹", "🐰", "🦊"],
    },
    DiffRound {
        title: "Spot the difference",
        left: ["🍎", "🍊", "🍋", "🍇", "🍓"],
        right: ["🍎", "🍊", "🍋", "🍇", "🍑"],
    },
    DiffRound {
        title: "Which one is different?",
        left: ["⭐", "⭐", "⭐", "⭐", "⭐"],
        right: ["⭐", "⭐", "🌟", "⭐", "⭐"],
    },
];
