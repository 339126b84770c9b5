//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that pairs a
//! trained vocabulary with a longest-match strategy.
//!
//! Encoding is greedy: at each position the longest piece that prefixes the
//! remaining text is emitted. When no piece matches, the `<unk>` ID is
//! emitted and exactly one character is consumed. Decoding concatenates the
//! literal piece texts and silently drops IDs the vocabulary does not know,
//! so round trips are lossy wherever `<unk>` was used.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};
use unimerge_core::{
    LongestMatch, Match, PieceTrie, Result, SplitPattern, TokenizerError, Vocabulary, UNK_TOKEN,
};
use unimerge_training::{TrainingConfig, UnigramTrainer};

/// Longest-match strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Scan every piece at every position
    Scan,
    /// Walk a prefix tree built once per tokenizer
    #[default]
    Trie,
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Target vocabulary size, including `<unk>`
    pub vocab_size: usize,
    /// Corpus word splitting
    pub split: SplitPattern,
    /// Longest-match strategy
    pub match_mode: MatchMode,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let training = TrainingConfig::default();
        Self {
            vocab_size: training.vocab_size,
            split: training.split,
            match_mode: MatchMode::default(),
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set how corpus lines are split into words.
    pub fn split(mut self, split: SplitPattern) -> Self {
        self.config.split = split;
        self
    }

    /// Set the longest-match strategy.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.config.match_mode = mode;
        self
    }

    /// Train a vocabulary on the corpus and wrap it in a tokenizer.
    pub fn train<S: AsRef<str>>(self, corpus: &[S]) -> Result<Tokenizer> {
        let trainer = self.trainer()?;
        Ok(Tokenizer::with_mode(trainer.train(corpus), self.config.match_mode))
    }

    /// Load a corpus file, train on it and wrap the result in a tokenizer.
    pub fn train_from_file(self, path: impl AsRef<Path>) -> Result<Tokenizer> {
        let trainer = self.trainer()?;
        let vocab = trainer.train_from_file(path)?;
        Ok(Tokenizer::with_mode(vocab, self.config.match_mode))
    }

    /// Wrap an existing vocabulary, ignoring the training settings.
    pub fn build(self, vocab: Vocabulary) -> Tokenizer {
        Tokenizer::with_mode(vocab, self.config.match_mode)
    }

    fn trainer(&self) -> Result<UnigramTrainer> {
        UnigramTrainer::new(TrainingConfig {
            vocab_size: self.config.vocab_size,
            split: self.config.split.clone(),
        })
    }
}

/// Main tokenizer struct.
///
/// Cloning is cheap: the vocabulary and trie are shared.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Vocabulary, never mutated after construction
    vocab: Arc<Vocabulary>,
    /// Prefix tree, present in `MatchMode::Trie`
    trie: Option<Arc<PieceTrie>>,
    /// Longest-match strategy
    mode: MatchMode,
}

impl Tokenizer {
    /// Create a tokenizer with the default match mode.
    pub fn new(vocab: Vocabulary) -> Self {
        Self::with_mode(vocab, MatchMode::default())
    }

    /// Create a tokenizer with an explicit match mode.
    pub fn with_mode(vocab: impl Into<Arc<Vocabulary>>, mode: MatchMode) -> Self {
        let vocab = vocab.into();
        let trie = match mode {
            MatchMode::Trie => Some(Arc::new(PieceTrie::from_vocab(&vocab))),
            MatchMode::Scan => None,
        };

        debug!(
            vocab_size = vocab.len(),
            unk_id = ?vocab.unk_id(),
            mode = ?mode,
            trie_nodes = trie.as_ref().map_or(0, |t| t.node_count()),
            "tokenizer initialized"
        );

        Self { vocab, trie, mode }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Encode text to token IDs.
    ///
    /// Fails with `MissingUnknownToken` only when some position matches no
    /// piece and the vocabulary has no `<unk>` entry.
    pub fn encode(&self, text: &str) -> Result<Encoding> {
        match &self.trie {
            Some(trie) => encode_with(trie.as_ref(), self.vocab.unk_id(), text),
            None => encode_with(self.vocab.as_ref(), self.vocab.unk_id(), text),
        }
    }

    /// Decode token IDs back to text.
    ///
    /// IDs missing from the vocabulary are skipped.
    pub fn decode(&self, ids: &[u32]) -> String {
        decode_with(&self.vocab, ids)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// ID of the fallback piece, if the vocabulary has one.
    pub fn unk_id(&self) -> Option<u32> {
        self.vocab.unk_id()
    }

    /// Get the ID for a piece string.
    pub fn piece_to_id(&self, piece: &str) -> Option<u32> {
        self.vocab.get_id(piece)
    }

    /// Get the piece string for an ID.
    pub fn id_to_piece(&self, id: u32) -> Option<&str> {
        self.vocab.get_token(id)
    }
}

/// Greedy longest-match encoding with `<unk>` fallback.
pub(crate) fn encode_with<M>(matcher: &M, unk: Option<u32>, text: &str) -> Result<Encoding>
where
    M: LongestMatch + ?Sized,
{
    let mut encoding = Encoding::default();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        let (id, len) = match matcher.longest_match(rest) {
            Some(Match { id, len }) => (id, len),
            None => {
                let unk = unk.ok_or_else(|| TokenizerError::MissingUnknownToken {
                    token: UNK_TOKEN.to_string(),
                })?;
                (unk, rest.chars().next().map_or(1, char::len_utf8))
            }
        };

        encoding.ids.push(id);
        encoding.offsets.push((pos, pos + len));
        pos += len;
    }

    Ok(encoding)
}

/// Concatenate piece texts, dropping unknown IDs.
pub(crate) fn decode_with(vocab: &Vocabulary, ids: &[u32]) -> String {
    let mut text = String::new();
    let mut dropped = 0usize;

    for &id in ids {
        match vocab.get_token(id) {
            Some(piece) => text.push_str(piece),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        trace!(dropped, "skipped token ids missing from vocabulary");
    }

    text
}

/// Result of encoding text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<u32>,
    /// Byte range of the source text consumed by each token
    pub offsets: Vec<(usize, usize)>,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of tokens equal to `unk_id`.
    pub fn unknown_count(&self, unk_id: u32) -> usize {
        self.ids.iter().filter(|&&id| id == unk_id).count()
    }

    /// Source substrings consumed by each token.
    pub fn spans<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.offsets
            .iter()
            .filter_map(|&(start, end)| text.get(start..end))
            .collect()
    }
}
