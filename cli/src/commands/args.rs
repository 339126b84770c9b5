//! Arguments shared by every command.

use anyhow::{Context, Result as AnyhowResult};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use unimerge_tokenizer::{MatchMode, SplitPattern, Tokenizer};

/// Corpus and training options.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Path to the training corpus (one corpus line per text line)
    #[arg(short, long, default_value = "corpus.txt")]
    pub corpus: PathBuf,

    /// Target vocabulary size, including <unk>
    #[arg(short, long, default_value_t = 1000)]
    pub vocab_size: usize,

    /// How corpus lines are split into words
    #[arg(long, value_enum, default_value_t = SplitArg::SingleSpace)]
    pub split: SplitArg,

    /// Regex separator used with `--split custom`
    #[arg(long, required_if_eq("split", "custom"))]
    pub split_pattern: Option<String>,

    /// Longest-match strategy for encoding
    #[arg(long, value_enum, default_value_t = ModeArg::Trie)]
    pub mode: ModeArg,
}

/// Word splitting choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    /// Split on single spaces only
    SingleSpace,
    /// Split on any whitespace run
    Whitespace,
    /// Split on a regex given by --split-pattern
    Custom,
}

/// Match mode choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Scan,
    Trie,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Scan => MatchMode::Scan,
            ModeArg::Trie => MatchMode::Trie,
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CorpusArgs {
    /// Resolve the split pattern.
    pub fn split_pattern(&self) -> SplitPattern {
        match self.split {
            SplitArg::SingleSpace => SplitPattern::SingleSpace,
            SplitArg::Whitespace => SplitPattern::Whitespace,
            SplitArg::Custom => SplitPattern::Custom(self.split_pattern.clone().unwrap_or_default()),
        }
    }

    /// Load the corpus and train a tokenizer on it.
    pub fn train(&self) -> AnyhowResult<Tokenizer> {
        let start = Instant::now();
        let tokenizer = Tokenizer::builder()
            .vocab_size(self.vocab_size)
            .split(self.split_pattern())
            .match_mode(self.mode.into())
            .train_from_file(&self.corpus)
            .with_context(|| format!("Failed to train on {}", self.corpus.display()))?;

        info!(
            corpus = %self.corpus.display(),
            vocab_size = tokenizer.vocab_size(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "training completed"
        );

        Ok(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        corpus: CorpusArgs,
    }

    #[test]
    fn test_defaults() {
        let args = Harness::parse_from(["test"]).corpus;
        assert_eq!(args.corpus, PathBuf::from("corpus.txt"));
        assert_eq!(args.vocab_size, 1000);
        assert_eq!(args.split_pattern(), SplitPattern::SingleSpace);
        assert_eq!(MatchMode::from(args.mode), MatchMode::Trie);
    }

    #[test]
    fn test_custom_split_requires_pattern() {
        assert!(Harness::try_parse_from(["test", "--split", "custom"]).is_err());

        let args = Harness::parse_from(["test", "--split", "custom", "--split-pattern", ",\\s*"]).corpus;
        assert_eq!(args.split_pattern(), SplitPattern::Custom(",\\s*".to_string()));
    }

    #[test]
    fn test_train_from_corpus_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "a a b\n").unwrap();

        let args = Harness::parse_from([
            "test",
            "--corpus",
            path.to_str().unwrap(),
            "--vocab-size",
            "1",
            "--mode",
            "scan",
        ])
        .corpus;
        let tokenizer = args.train().unwrap();

        assert_eq!(tokenizer.vocab_size(), 2);
        assert_eq!(tokenizer.match_mode(), MatchMode::Scan);
    }

    #[test]
    fn test_train_missing_corpus() {
        let args = Harness::parse_from(["test", "--corpus", "/nonexistent/corpus.txt"]).corpus;
        let err = args.train().unwrap_err();
        assert!(err.to_string().contains("Failed to train on"));
    }
}
