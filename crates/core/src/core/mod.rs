//! Core vocabulary data structures.
//!
//! This module contains the vocabulary model and the merge queue used
//! during training, independent of any matching strategy.

pub mod priority;
pub mod vocab;

pub use priority::{MergeCandidate, PieceQueue};
pub use vocab::{Subword, Vocab, VocabR, Vocabulary, UNK_PROBABILITY, UNK_TOKEN};
