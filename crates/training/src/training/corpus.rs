//! Corpus loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use unimerge_core::{Result, TokenizerError};

/// Read a corpus file, one corpus line per text line.
///
/// Line terminators (`\n` or `\r\n`) are stripped. The whole file is read
/// before returning; any read failure is reported with the file path.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| TokenizerError::io(path, e))?;

    debug!(path = %path.display(), lines = lines.len(), "corpus loaded");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnigramTrainer;

    #[test]
    fn test_load_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "first line\r\nsecond line\n\nlast").unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus, vec!["first line", "second line", "", "last"]);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(load_corpus(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_corpus("/nonexistent/corpus.txt").unwrap_err();
        match err {
            TokenizerError::Io { path, err } => {
                assert_eq!(path, Path::new("/nonexistent/corpus.txt"));
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0x0a]).unwrap();

        assert!(matches!(load_corpus(&path), Err(TokenizerError::Io { .. })));
    }

    #[test]
    fn test_train_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "a a b\n").unwrap();

        let vocab = UnigramTrainer::with_vocab_size(10).train_from_file(&path).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get_id("a"), Some(0));
    }
}
