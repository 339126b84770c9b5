//! Benchmark command implementation.

use clap::Parser;
use std::path::PathBuf;

use super::args::CorpusArgs;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text file to encode (defaults to the corpus itself)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::{Context, Result as AnyhowResult};
use std::fs;
use std::time::{Duration, Instant};
use tracing::info;
use unimerge_tokenizer::{MatchMode, Tokenizer};

/// Timing of one match mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeTiming {
    pub mode: MatchMode,
    pub tokens: usize,
    pub elapsed: Duration,
    pub iterations: usize,
}

impl ModeTiming {
    /// Average milliseconds per encode call.
    pub fn average_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0 / self.iterations.max(1) as f64
    }

    /// Tokens produced per second across all iterations.
    pub fn tokens_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        (self.tokens * self.iterations) as f64 / secs
    }
}

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let path = cmd.file.as_ref().unwrap_or(&cmd.corpus.corpus);
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let trained = cmd.corpus.train()?;

    println!("Benchmarking encoding...");
    println!("  Text length: {} bytes", text.len());
    println!("  Vocabulary size: {}", trained.vocab_size());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    println!("Results:");
    for mode in [MatchMode::Scan, MatchMode::Trie] {
        let tokenizer = Tokenizer::with_mode(trained.vocab().clone(), mode);
        let timing = time_mode(&tokenizer, &text, cmd.iterations)?;

        info!(
            mode = ?timing.mode,
            elapsed_ms = timing.elapsed.as_millis() as u64,
            "benchmark finished"
        );

        println!("  {:?}:", timing.mode);
        println!("    Tokens: {}", timing.tokens);
        println!("    Total time: {:.2}s", timing.elapsed.as_secs_f64());
        println!("    Average time: {:.3}ms", timing.average_ms());
        println!("    Throughput: {:.0} tokens/s", timing.tokens_per_sec());
    }

    Ok(())
}

/// Encode `text` once to warm up, then `iterations` times under the clock.
pub fn time_mode(tokenizer: &Tokenizer, text: &str, iterations: usize) -> AnyhowResult<ModeTiming> {
    let tokens = tokenizer.encode(text)?.len();

    let start = Instant::now();
    for _ in 0..iterations {
        tokenizer.encode(text)?;
    }

    Ok(ModeTiming {
        mode: tokenizer.match_mode(),
        tokens,
        elapsed: start.elapsed(),
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_mode_counts_tokens() {
        let tokenizer = Tokenizer::builder()
            .vocab_size(10)
            .train(&["a a b"])
            .unwrap();

        let timing = time_mode(&tokenizer, "abab", 3).unwrap();
        assert_eq!(timing.tokens, 4);
        assert_eq!(timing.iterations, 3);
        assert_eq!(timing.mode, MatchMode::Trie);
    }

    #[test]
    fn test_average_and_throughput() {
        let timing = ModeTiming {
            mode: MatchMode::Scan,
            tokens: 50,
            elapsed: Duration::from_millis(200),
            iterations: 4,
        };
        assert!((timing.average_ms() - 50.0).abs() < 1e-9);
        assert!((timing.tokens_per_sec() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_elapsed_throughput() {
        let timing = ModeTiming {
            mode: MatchMode::Trie,
            tokens: 5,
            elapsed: Duration::ZERO,
            iterations: 0,
        };
        assert_eq!(timing.tokens_per_sec(), 0.0);
        assert_eq!(timing.average_ms(), 0.0);
    }
}
