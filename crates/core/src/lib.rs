//! Unimerge-core - Core data structures for subword vocabularies
//!
//! This crate provides the vocabulary model shared by the trainer and the
//! tokenizer, independent of how a vocabulary is produced or consumed.
//!
//! # Features
//!
//! - Ordered, immutable vocabularies with precomputed piece/ID lookups
//! - Deterministic min-queue for probability-ordered merging
//! - Configurable word splitting for corpus lines
//! - Longest-prefix matching by linear scan or prefix tree
//!
//! # Example
//!
//! ```rust
//! use unimerge_core::{LongestMatch, PieceTrie, Vocabulary, UNK_TOKEN};
//!
//! let vocab = Vocabulary::from_ranked([("ab", 0.5), ("a", 0.25), (UNK_TOKEN, 0.001)]);
//! let trie = PieceTrie::from_vocab(&vocab);
//!
//! assert_eq!(trie.longest_match("abc").map(|m| m.id), Some(0));
//! assert_eq!(vocab.unk_id(), Some(2));
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Vocabulary model and merge queue
pub mod core;
pub use core::{
    MergeCandidate, PieceQueue, Subword, Vocab, VocabR, Vocabulary, UNK_PROBABILITY, UNK_TOKEN,
};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{SplitPattern, Splitter};

// Longest-prefix matching
pub mod encoding;
pub use encoding::{LongestMatch, Match, PieceTrie};
