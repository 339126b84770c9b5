//! Pre-tokenization of corpus lines into words.

pub mod split;

pub use split::{SplitPattern, Splitter};
