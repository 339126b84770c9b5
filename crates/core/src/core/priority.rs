//! Priority queue for merge candidates.
//!
//! Training repeatedly takes the two least probable pieces. The queue keeps
//! them ordered by a total order so that selection is deterministic:
//!
//! 1. ascending probability,
//! 2. then ascending piece text (byte-wise),
//! 3. then insertion order.

use compact_str::CompactString;
use dary_heap::OctonaryHeap;
use std::cmp::{Ordering, Reverse};

/// A piece waiting to be merged.
#[derive(Debug, Clone)]
pub struct MergeCandidate {
    /// Piece text
    pub piece: CompactString,
    /// Current probability
    pub probability: f64,
    /// Insertion sequence number, last-resort tie-break
    seq: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(piece: impl Into<CompactString>, probability: f64, seq: u64) -> Self {
        Self {
            piece: piece.into(),
            probability,
            seq,
        }
    }

    /// Merge with a higher-ranked candidate.
    ///
    /// The text is `self` followed by `other`; the probability is the mean of
    /// both, without renormalization.
    pub fn merge(&self, other: &MergeCandidate) -> (CompactString, f64) {
        let mut piece = self.piece.clone();
        piece.push_str(&other.piece);
        (piece, (self.probability + other.probability) / 2.0)
    }
}

// Lower probability = lower rank = merged first
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| self.piece.cmp(&other.piece))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MergeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MergeCandidate {}

/// Min-queue of pieces keyed by probability.
///
/// Uses an 8-ary heap for better cache locality than a binary heap.
pub struct PieceQueue {
    heap: OctonaryHeap<Reverse<MergeCandidate>>,
    next_seq: u64,
}

impl PieceQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            heap: OctonaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create a new queue with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: OctonaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Push a piece onto the queue.
    pub fn push(&mut self, piece: impl Into<CompactString>, probability: f64) {
        let candidate = MergeCandidate::new(piece, probability, self.next_seq);
        self.next_seq += 1;
        self.heap.push(Reverse(candidate));
    }

    /// Pop the lowest ranked candidate.
    pub fn pop(&mut self) -> Option<MergeCandidate> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    /// Pop the two lowest ranked candidates, lowest first.
    ///
    /// Returns None and leaves the queue untouched when fewer than two
    /// candidates remain.
    pub fn pop_pair(&mut self) -> Option<(MergeCandidate, MergeCandidate)> {
        if self.heap.len() < 2 {
            return None;
        }
        let first = self.pop()?;
        let second = self.pop()?;
        Some((first, second))
    }

    /// Peek at the lowest ranked candidate without removing it.
    pub fn peek(&self) -> Option<&MergeCandidate> {
        self.heap.peek().map(|Reverse(c)| c)
    }

    /// Get the number of candidates in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the queue, returning candidates in ascending rank order.
    pub fn into_ascending(mut self) -> Vec<MergeCandidate> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(candidate) = self.pop() {
            out.push(candidate);
        }
        out
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
