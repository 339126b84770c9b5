//! Unimerge-tokenizer - High-level tokenizer API
//!
//! This crate ties vocabulary training and greedy longest-match encoding
//! together behind a single, easy-to-use API.
//!
//! # Features
//!
//! - Builder for training a tokenizer straight from corpus lines or a file
//! - Longest-prefix encoding with `<unk>` fallback, by scan or prefix tree
//! - Decoding that concatenates piece texts and skips unknown IDs
//! - Free `train`/`encode`/`decode` functions over a plain `Vocabulary`
//!
//! # Example
//!
//! ```rust
//! use unimerge_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::builder()
//!     .vocab_size(1000)
//!     .train(&["the cat sat", "the cat ran"])?;
//!
//! let encoding = tokenizer.encode("the cat")?;
//! assert_eq!(tokenizer.decode(&encoding.ids), "the<unk>cat");
//! # Ok::<(), unimerge_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use unimerge_core::{
    Result, SplitPattern, Subword, TokenizerError, Vocabulary, UNK_PROBABILITY, UNK_TOKEN,
};
pub use unimerge_training::{load_corpus, TrainingConfig, UnigramTrainer};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, MatchMode, Tokenizer, TokenizerBuilder, TokenizerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Train a vocabulary with the default single-space word splitting.
pub fn train<S: AsRef<str>>(corpus: &[S], vocab_size: usize) -> Vocabulary {
    UnigramTrainer::with_vocab_size(vocab_size).train(corpus)
}

/// Encode text against a vocabulary by linear scan.
///
/// Prefer [`Tokenizer`] when encoding many texts with the same vocabulary.
pub fn encode(text: &str, vocab: &Vocabulary) -> Result<Vec<u32>> {
    tokenizer::encode_with(vocab, vocab.unk_id(), text).map(|encoding| encoding.ids)
}

/// Decode token IDs against a vocabulary, skipping unknown IDs.
pub fn decode(ids: &[u32], vocab: &Vocabulary) -> String {
    tokenizer::decode_with(vocab, ids)
}
