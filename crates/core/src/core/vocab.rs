//! Vocabulary storage and lookup.
//!
//! A [`Vocabulary`] is an ordered, immutable sequence of [`Subword`] pieces.
//! The forward (piece -> ID) and reverse (ID -> piece) lookups and the
//! unknown-token ID are computed once at construction, so encoders and
//! decoders never rebuild them per call.

use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Serialize, Serializer};
use tracing::trace;

/// Text of the reserved fallback piece.
pub const UNK_TOKEN: &str = "<unk>";

/// Probability assigned to the fallback piece appended after training.
pub const UNK_PROBABILITY: f64 = 0.001;

/// Forward mapping: piece text -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: ID -> piece text
pub type VocabR = AHashMap<u32, CompactString>;

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subword {
    /// Token ID
    pub id: u32,
    /// Literal text of the piece
    pub piece: CompactString,
    /// Weight of the piece; not renormalized after merges
    pub probability: f64,
}

impl Subword {
    /// Create a new piece.
    pub fn new(id: u32, piece: impl Into<CompactString>, probability: f64) -> Self {
        Self {
            id,
            piece: piece.into(),
            probability,
        }
    }

    /// Whether this is the reserved fallback piece.
    #[inline]
    pub fn is_unk(&self) -> bool {
        self.piece == UNK_TOKEN
    }
}

/// Ordered vocabulary with precomputed lookups.
///
/// There is no mutating API: once built, a vocabulary can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Pieces in vocabulary order
    pieces: Vec<Subword>,
    /// Forward mapping; duplicate texts resolve to the last entry
    vocab: Vocab,
    /// Reverse mapping; duplicate IDs resolve to the last entry
    vocab_r: VocabR,
    /// ID of the last `<unk>` piece, if any
    unk: Option<u32>,
}

impl Vocabulary {
    /// Build a vocabulary from pieces that already carry their IDs.
    ///
    /// IDs are taken as given; they need not be dense.
    pub fn from_pieces(pieces: Vec<Subword>) -> Self {
        let mut vocab = Vocab::with_capacity(pieces.len());
        let mut vocab_r = VocabR::with_capacity(pieces.len());
        let mut unk = None;

        for subword in &pieces {
            if let Some(shadowed) = vocab.insert(subword.piece.clone(), subword.id) {
                trace!(piece = %subword.piece, shadowed, id = subword.id, "duplicate piece text");
            }
            if let Some(shadowed) = vocab_r.insert(subword.id, subword.piece.clone()) {
                trace!(id = subword.id, shadowed = %shadowed, "duplicate piece id");
            }
            if subword.is_unk() {
                unk = Some(subword.id);
            }
        }

        Self {
            pieces,
            vocab,
            vocab_r,
            unk,
        }
    }

    /// Build a vocabulary from `(piece, probability)` entries, assigning
    /// `id = position`.
    pub fn from_ranked<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<CompactString>,
    {
        let pieces = entries
            .into_iter()
            .enumerate()
            .map(|(id, (piece, probability))| Subword::new(id as u32, piece, probability))
            .collect();

        Self::from_pieces(pieces)
    }

    /// Get the ID for a piece string.
    #[inline]
    pub fn get_id(&self, piece: &str) -> Option<u32> {
        self.vocab.get(piece).copied()
    }

    /// Get the piece string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(&id).map(|s| s.as_str())
    }

    /// ID of the fallback piece.
    #[inline]
    pub fn unk_id(&self) -> Option<u32> {
        self.unk
    }

    /// Pieces in vocabulary order.
    #[inline]
    pub fn pieces(&self) -> &[Subword] {
        &self.pieces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subword> {
        self.pieces.iter()
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Sum of all piece probabilities.
    ///
    /// Drifts away from 1.0 as merges average probabilities without
    /// renormalizing.
    pub fn total_probability(&self) -> f64 {
        self.pieces.iter().map(|s| s.probability).sum()
    }

    /// Whether the IDs are exactly `0..len` in vocabulary order.
    pub fn has_dense_ids(&self) -> bool {
        self.pieces
            .iter()
            .enumerate()
            .all(|(i, s)| s.id as usize == i)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_pieces(Vec::new())
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Subword;
    type IntoIter = std::slice::Iter<'a, Subword>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.pieces)
    }
}
