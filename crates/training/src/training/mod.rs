//! Training infrastructure for unigram-merge vocabularies.
//!
//! This module provides corpus loading, word counting and the merge-based
//! trainer that turns word frequencies into a vocabulary.

pub mod corpus;
pub mod counter;
pub mod trainer;

pub use corpus::load_corpus;
pub use counter::WordCounter;
pub use trainer::{TrainingConfig, UnigramTrainer};
