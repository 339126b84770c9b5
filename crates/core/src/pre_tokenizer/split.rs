//! Splitting corpus lines into words.
//!
//! The default splits on the single ASCII space only: tabs and other
//! whitespace stay inside words. Empty fragments (from empty lines or
//! consecutive separators) are dropped so every word is non-empty.

use crate::error::{Result, TokenizerError};
use regex::Regex;

/// Splitting patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitPattern {
    /// Split on `' '` only
    #[default]
    SingleSpace,
    /// Split on any Unicode whitespace run
    Whitespace,
    /// Split on matches of a regex
    Custom(String),
}

/// Line splitter for word counting.
#[derive(Debug, Clone)]
pub struct Splitter {
    pattern: SplitPattern,
    /// Compiled regex for `SplitPattern::Custom`
    regex: Option<Regex>,
}

impl Splitter {
    /// Create a new splitter.
    ///
    /// Fails with `InvalidConfig` if a custom pattern is not a valid regex.
    pub fn new(pattern: SplitPattern) -> Result<Self> {
        let regex = match &pattern {
            SplitPattern::Custom(src) => Some(Regex::new(src).map_err(|e| {
                TokenizerError::InvalidConfig(format!("Invalid split pattern {:?}: {}", src, e))
            })?),
            _ => None,
        };

        Ok(Self { pattern, regex })
    }

    /// Create a single-space splitter.
    pub fn single_space() -> Self {
        Self {
            pattern: SplitPattern::SingleSpace,
            regex: None,
        }
    }

    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self {
            pattern: SplitPattern::Whitespace,
            regex: None,
        }
    }

    pub fn pattern(&self) -> &SplitPattern {
        &self.pattern
    }

    /// Split a line into non-empty words.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match (&self.pattern, &self.regex) {
            (SplitPattern::Custom(_), Some(re)) => {
                re.split(text).filter(|w| !w.is_empty()).collect()
            }
            (SplitPattern::Whitespace, _) => text.split_whitespace().collect(),
            _ => text.split(' ').filter(|w| !w.is_empty()).collect(),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::single_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_space_split() {
        let splitter = Splitter::default();
        let result = splitter.split("Merry Christmas, Marmee!");
        assert_eq!(result, vec!["Merry", "Christmas,", "Marmee!"]);
    }

    #[test]
    fn test_single_space_keeps_tabs() {
        let splitter = Splitter::single_space();
        let result = splitter.split("a\tb c");
        assert_eq!(result, vec!["a\tb", "c"]);
    }

    #[test]
    fn test_single_space_drops_empty_fragments() {
        let splitter = Splitter::single_space();
        assert_eq!(splitter.split("a  b "), vec!["a", "b"]);
        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   ").is_empty());
    }

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("hello\tworld  test");
        assert_eq!(result, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_custom_split() {
        let splitter = Splitter::new(SplitPattern::Custom(r"[,;]\s*".to_string())).unwrap();
        let result = splitter.split("a, b;c");
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = Splitter::new(SplitPattern::Custom("(".to_string())).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }
}
