//! Longest-prefix matching over a vocabulary.
//!
//! Two strategies share the same contract: the longest piece that is a
//! prefix of the input wins, and among pieces of that length the first one
//! in vocabulary order wins. Empty pieces never match.
//!
//! - [`Vocabulary`](crate::Vocabulary) itself implements [`LongestMatch`] as
//!   a linear scan (O(|vocab|) per position).
//! - [`PieceTrie`] walks a prefix tree (O(longest piece) per position).

pub mod scan;
pub mod trie;

pub use trie::PieceTrie;

/// A matched piece at the start of some input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// ID of the matched piece
    pub id: u32,
    /// Length of the match in bytes
    pub len: usize,
}

/// Longest-prefix lookup.
pub trait LongestMatch {
    /// Find the longest piece that is a prefix of `text`.
    fn longest_match(&self, text: &str) -> Option<Match>;
}
