//! Unimerge-training - Vocabulary training infrastructure
//!
//! This crate builds a subword vocabulary from a plain-text corpus by
//! counting words and iteratively merging the two least probable pieces
//! until the target size is reached.
//!
//! # Features
//!
//! - Exact word counting in first-occurrence order
//! - Deterministic probability-ordered merging
//! - A trailing `<unk>` fallback piece in every vocabulary
//! - Corpus loading with path-aware errors
//!
//! # Example
//!
//! ```rust
//! use unimerge_training::{TrainingConfig, UnigramTrainer};
//!
//! let trainer = UnigramTrainer::new(TrainingConfig {
//!     vocab_size: 3,
//!     ..Default::default()
//! })?;
//! let vocab = trainer.train(&["the cat the dog", "the cat"]);
//!
//! assert_eq!(vocab.len(), 3);
//! assert_eq!(vocab.get_token(2), Some("<unk>"));
//! # Ok::<(), unimerge_training::TokenizerError>(())
//! ```

pub use unimerge_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{load_corpus, TrainingConfig, UnigramTrainer, WordCounter};
