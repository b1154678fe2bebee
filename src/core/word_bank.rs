// --- File: src/core/word_bank.rs
use crate::core::types::Word;
use crate::random::{pick_random, RandomSource};

/// Built-in practice words, offered before any custom entries are added.
pub const DEFAULT_WORDS: [&str; 80] = [
    "apple", "banana", "orange", "table", "chair", "window", "computer", "phone",
    "water", "family", "school", "teacher", "student", "music", "movie", "paper",
    "pencil", "bottle", "coffee", "chocolate", "morning", "evening", "night", "summer",
    "winter", "spring", "autumn", "travel", "friend", "people", "beautiful", "interesting",
    "difficult", "easy", "quick", "slow", "strong", "weak", "happy", "angry",
    "country", "city", "village", "ocean", "river", "mountain", "forest", "desert",
    "animal", "garden", "read", "write", "listen", "speak", "watch", "play",
    "learn", "work", "sleep", "dream", "yesterday", "today", "tomorrow", "always",
    "never", "sometimes", "often", "rarely", "before", "after", "because", "however",
    "although", "between", "among", "without", "inside", "outside", "above", "below",
];

/// Ordered collection of candidate targets. Custom words go to the front,
/// duplicates are never stored twice.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBank {
    pub fn new() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().filter_map(|w| Word::parse(w)).collect(),
        }
    }

    /// Normalizes `raw` and stores it at the front unless already present.
    /// Returns `None` when nothing survives normalization.
    pub fn add_custom(&mut self, raw: &str) -> Option<Word> {
        let word = Word::parse(raw)?;
        if !self.words.contains(&word) {
            self.words.insert(0, word.clone());
        }
        Some(word)
    }

    pub fn pick(&self, rng: &mut dyn RandomSource) -> Option<&Word> {
        pick_random(rng, &self.words)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
