//! Error types for the unimerge tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encoding needed a fallback but the vocabulary has no unknown token
    #[error("Vocabulary has no `{token}` entry to fall back on")]
    MissingUnknownToken { token: String },
}

impl TokenizerError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = TokenizerError::io(
            "corpus.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("corpus.txt"));
        assert!(msg.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_unknown_token_message() {
        let err = TokenizerError::MissingUnknownToken {
            token: "<unk>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Vocabulary has no `<unk>` entry to fall back on"
        );
    }
}
