//! Prefix-tree longest match.

use super::{LongestMatch, Match};
use crate::core::vocab::Vocabulary;
use ahash::AHashMap;

/// Trie node for longest-match tokenization.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes indexed by character
    children: AHashMap<char, TrieNode>,
    /// Token ID if this node ends a piece
    token_id: Option<u32>,
}

/// Prefix tree over the pieces of a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PieceTrie {
    root: TrieNode,
    nodes: usize,
}

impl PieceTrie {
    /// Build a trie from a vocabulary.
    ///
    /// Pieces are inserted in vocabulary order and an existing terminal is
    /// never overwritten, so duplicate texts keep the first ID.
    pub fn from_vocab(vocab: &Vocabulary) -> Self {
        let mut trie = Self::default();

        for subword in vocab {
            trie.insert(&subword.piece, subword.id);
        }

        trie
    }

    fn insert(&mut self, piece: &str, id: u32) {
        if piece.is_empty() {
            return;
        }

        let Self { root, nodes } = self;
        let mut node = root;
        for ch in piece.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                *nodes += 1;
                TrieNode::default()
            });
        }

        node.token_id.get_or_insert(id);
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl LongestMatch for PieceTrie {
    fn longest_match(&self, text: &str) -> Option<Match> {
        let mut node = &self.root;
        let mut best = None;

        for (offset, ch) in text.char_indices() {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    if let Some(id) = node.token_id {
                        best = Some(Match {
                            id,
                            len: offset + ch.len_utf8(),
                        });
                    }
                }
                None => break,
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocab::Subword;

    #[test]
    fn test_longest_wins() {
        let vocab = Vocabulary::from_ranked([("a", 0.1), ("ab", 0.1), ("abc", 0.1), ("b", 0.1)]);
        let trie = PieceTrie::from_vocab(&vocab);

        assert_eq!(trie.longest_match("abcd"), Some(Match { id: 2, len: 3 }));
        assert_eq!(trie.longest_match("abd"), Some(Match { id: 1, len: 2 }));
        assert_eq!(trie.longest_match("zzz"), None);
        assert_eq!(trie.longest_match(""), None);
    }

    #[test]
    fn test_duplicate_text_keeps_first_id() {
        let vocab = Vocabulary::from_pieces(vec![
            Subword::new(0, "ab", 0.1),
            Subword::new(1, "ab", 0.1),
        ]);
        let trie = PieceTrie::from_vocab(&vocab);

        assert_eq!(trie.longest_match("ab"), Some(Match { id: 0, len: 2 }));
    }

    #[test]
    fn test_multibyte_lengths_are_bytes() {
        let vocab = Vocabulary::from_ranked([("né", 0.1), ("n", 0.1)]);
        let trie = PieceTrie::from_vocab(&vocab);

        assert_eq!(trie.longest_match("née"), Some(Match { id: 0, len: 3 }));
    }

    #[test]
    fn test_agrees_with_scan() {
        let vocab = Vocabulary::from_pieces(vec![
            Subword::new(0, "Mar", 0.1),
            Subword::new(1, "Marmee!", 0.1),
            Subword::new(2, "M", 0.1),
            Subword::new(3, "Mar", 0.1),
            Subword::new(4, "", 0.1),
            Subword::new(5, "<unk>", 0.001),
        ]);
        let trie = PieceTrie::from_vocab(&vocab);

        for text in ["Marmee!", "Marmalade", "Mx", "x", "<unk>", ""] {
            assert_eq!(trie.longest_match(text), vocab.longest_match(text), "{text:?}");
        }
    }

    #[test]
    fn test_node_count() {
        let vocab = Vocabulary::from_ranked([("ab", 0.1), ("ac", 0.1)]);
        let trie = PieceTrie::from_vocab(&vocab);
        assert_eq!(trie.node_count(), 3);
    }
}
