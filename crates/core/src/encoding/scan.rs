//! Linear-scan longest match.

use super::{LongestMatch, Match};
use crate::core::vocab::Vocabulary;

impl LongestMatch for Vocabulary {
    fn longest_match(&self, text: &str) -> Option<Match> {
        let mut best: Option<Match> = None;

        for subword in self.iter() {
            let len = subword.piece.len();
            // Strictly longer only: the first piece of a given length is kept
            if len > best.map_or(0, |m| m.len) && text.starts_with(subword.piece.as_str()) {
                best = Some(Match { id: subword.id, len });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocab::{Subword, UNK_TOKEN};

    #[test]
    fn test_longest_wins() {
        let vocab = Vocabulary::from_ranked([("a", 0.1), ("ab", 0.1), ("abc", 0.1), ("b", 0.1)]);

        assert_eq!(vocab.longest_match("abcd"), Some(Match { id: 2, len: 3 }));
        assert_eq!(vocab.longest_match("abd"), Some(Match { id: 1, len: 2 }));
        assert_eq!(vocab.longest_match("b"), Some(Match { id: 3, len: 1 }));
        assert_eq!(vocab.longest_match("zzz"), None);
    }

    #[test]
    fn test_first_in_order_wins_ties() {
        let vocab = Vocabulary::from_pieces(vec![
            Subword::new(0, "x", 0.1),
            Subword::new(1, "ab", 0.1),
            Subword::new(2, "ab", 0.1),
        ]);

        assert_eq!(vocab.longest_match("abab"), Some(Match { id: 1, len: 2 }));
    }

    #[test]
    fn test_unk_text_matches_literally() {
        let vocab = Vocabulary::from_ranked([("<", 0.1), (UNK_TOKEN, 0.001)]);
        assert_eq!(vocab.longest_match("<unk>!"), Some(Match { id: 1, len: 5 }));
    }

    #[test]
    fn test_empty_piece_never_matches() {
        let vocab = Vocabulary::from_ranked([("", 0.5)]);
        assert_eq!(vocab.longest_match("abc"), None);
    }
}
