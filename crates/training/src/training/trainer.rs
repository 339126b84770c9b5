//! Unigram-merge trainer implementation.
//!
//! Training counts the words of a corpus, turns the counts into a
//! probability distribution and then repeatedly replaces the two least
//! probable pieces with their concatenation, weighted by the mean of the two
//! probabilities. Once the piece count fits the target size (minus one slot
//! reserved for `<unk>`), the fallback piece is appended and IDs are assigned
//! by position.
//!
//! Merged probabilities are not renormalized, so the total mass of a trained
//! vocabulary generally differs from 1.0.

use super::corpus::load_corpus;
use super::counter::WordCounter;
use compact_str::CompactString;
use std::path::Path;
use tracing::{debug, trace, warn};
use unimerge_core::{
    PieceQueue, Result, SplitPattern, Splitter, Vocabulary, UNK_PROBABILITY, UNK_TOKEN,
};

/// Configuration for vocabulary training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Target vocabulary size, including the `<unk>` piece
    pub vocab_size: usize,
    /// How corpus lines are split into words
    pub split: SplitPattern,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 1000,
            split: SplitPattern::SingleSpace,
        }
    }
}

/// Vocabulary trainer.
pub struct UnigramTrainer {
    /// Configuration
    config: TrainingConfig,
    /// Line splitter built from `config.split`
    splitter: Splitter,
}

impl UnigramTrainer {
    /// Create a new trainer with the given configuration.
    ///
    /// Fails only if a custom split pattern does not compile.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        let splitter = Splitter::new(config.split.clone())?;
        Ok(Self { config, splitter })
    }

    /// Create a new trainer with default configuration.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self {
            config: TrainingConfig {
                vocab_size,
                ..Default::default()
            },
            splitter: Splitter::single_space(),
        }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a vocabulary on the given corpus lines.
    pub fn train<S: AsRef<str>>(&self, corpus: &[S]) -> Vocabulary {
        let counter = self.count_words(corpus);
        let reserve = self.effective_vocab_size() - 1;

        let pieces = self.merge_pieces(&counter, reserve);
        let merges = counter.word_count() - pieces.len();

        let vocab = Vocabulary::from_ranked(
            pieces
                .into_iter()
                .chain(std::iter::once((CompactString::new(UNK_TOKEN), UNK_PROBABILITY))),
        );

        debug!(
            lines = corpus.len(),
            distinct_words = counter.word_count(),
            merges,
            vocab_size = vocab.len(),
            total_probability = vocab.total_probability(),
            "vocabulary trained"
        );

        vocab
    }

    /// Load a corpus file and train on its lines.
    pub fn train_from_file(&self, path: impl AsRef<Path>) -> Result<Vocabulary> {
        let corpus = load_corpus(path)?;
        Ok(self.train(&corpus))
    }

    /// Target size with values below 1 clamped to 1.
    fn effective_vocab_size(&self) -> usize {
        if self.config.vocab_size == 0 {
            warn!("vocab_size 0 is below the minimum, using 1");
            return 1;
        }
        self.config.vocab_size
    }

    /// Count every word of the corpus.
    fn count_words<S: AsRef<str>>(&self, corpus: &[S]) -> WordCounter {
        let mut counter = WordCounter::new(self.splitter.clone());
        for line in corpus {
            counter.add_text(line.as_ref());
        }
        counter
    }

    /// Merge the normalized word distribution down to at most `reserve`
    /// pieces (or a single piece, whichever is larger).
    ///
    /// Without merges the pieces keep first-occurrence order. Otherwise the
    /// result is the remaining pieces in ascending rank followed by the most
    /// recent merge, i.e. the order a sort-then-merge loop would leave.
    fn merge_pieces(&self, counter: &WordCounter, reserve: usize) -> Vec<(CompactString, f64)> {
        let total = counter.total_word_occurrences() as f64;
        let mut len = counter.word_count();

        if len <= reserve {
            return counter
                .iter()
                .map(|(word, count)| (word.clone(), count as f64 / total))
                .collect();
        }

        let mut queue = PieceQueue::with_capacity(len);
        for (word, count) in counter.iter() {
            queue.push(word.clone(), count as f64 / total);
        }

        let mut last: Option<(CompactString, f64)> = None;

        while len > reserve && len >= 2 {
            if let Some((piece, probability)) = last.take() {
                queue.push(piece, probability);
            }

            let Some((low, high)) = queue.pop_pair() else {
                break;
            };
            let (piece, probability) = low.merge(&high);

            trace!(
                left = %low.piece,
                right = %high.piece,
                probability,
                "merged pieces"
            );

            last = Some((piece, probability));
            len -= 1;
        }

        let mut pieces: Vec<(CompactString, f64)> = queue
            .into_ascending()
            .into_iter()
            .map(|c| (c.piece, c.probability))
            .collect();
        pieces.extend(last);
        pieces
    }
}
