//! Word counting for vocabulary training.
//!
//! Words are identified by exact string equality. The counter remembers the
//! order in which each distinct word first appeared, which fixes the
//! vocabulary order when training performs no merges.

use ahash::AHashMap;
use compact_str::CompactString;
use unimerge_core::Splitter;

/// Counter for word frequencies.
pub struct WordCounter {
    /// Word -> position in `words`
    index: AHashMap<CompactString, usize>,
    /// Distinct words in first-occurrence order
    words: Vec<CompactString>,
    /// Occurrence count per word
    word_counts: Vec<u64>,
    /// Line splitter
    splitter: Splitter,
}

impl WordCounter {
    /// Create a new word counter using the given splitter.
    pub fn new(splitter: Splitter) -> Self {
        Self {
            index: AHashMap::new(),
            words: Vec::new(),
            word_counts: Vec::new(),
            splitter,
        }
    }

    /// Split a line into words and count each of them.
    pub fn add_text(&mut self, text: &str) {
        for word in self.splitter.split(text) {
            self.add_word(word);
        }
    }

    /// Add a single word to the counter.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.word_counts[pos] += 1;
            return;
        }

        let word = CompactString::new(word);
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.word_counts.push(1);
    }

    /// Get the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.word_counts.iter().sum()
    }

    /// Get the occurrence count of a word.
    pub fn count(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&pos| self.word_counts[pos])
    }

    /// Get a reference to the words.
    pub fn words(&self) -> &[CompactString] {
        &self.words
    }

    /// Get a reference to the word counts.
    pub fn word_counts(&self) -> &[u64] {
        &self.word_counts
    }

    /// Iterate over `(word, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, u64)> {
        self.words.iter().zip(self.word_counts.iter().copied())
    }

    /// Clear all data from the counter.
    pub fn clear(&mut self) {
        self.index.clear();
        self.words.clear();
        self.word_counts.clear();
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(Splitter::default())
    }
}
