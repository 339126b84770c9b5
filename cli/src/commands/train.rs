//! Train command implementation.

use clap::Parser;

use super::args::{CorpusArgs, OutputFormat};

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

use anyhow::Result as AnyhowResult;
use unimerge_tokenizer::Vocabulary;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.corpus.train()?;

    match cmd.format {
        OutputFormat::Text => print!("{}", render_vocabulary(tokenizer.vocab())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tokenizer.vocab())?),
    }

    Ok(())
}

/// One line per piece in vocabulary order, followed by the probability total.
pub fn render_vocabulary(vocab: &Vocabulary) -> String {
    let mut lines: Vec<String> = vocab
        .iter()
        .map(|subword| {
            format!(
                "{:>6}  {:.6}  {:?}",
                subword.id,
                subword.probability,
                subword.piece.as_str()
            )
        })
        .collect();
    lines.push(format!("Vocabulary size: {}", vocab.len()));
    lines.push(format!("Total probability: {:.6}", vocab.total_probability()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unimerge_tokenizer::{Subword, UNK_PROBABILITY, UNK_TOKEN};

    #[test]
    fn test_render_vocabulary() {
        let vocab = Vocabulary::from_pieces(vec![
            Subword::new(0, "ba", 0.5),
            Subword::new(1, UNK_TOKEN, UNK_PROBABILITY),
        ]);

        let rendered = render_vocabulary(&vocab);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "     0  0.500000  \"ba\"");
        assert_eq!(lines[1], "     1  0.001000  \"<unk>\"");
        assert_eq!(lines[2], "Vocabulary size: 2");
        assert_eq!(lines[3], "Total probability: 0.501000");
    }

    #[test]
    fn test_run_json_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "a a b\n").unwrap();
        let corpus = path.to_str().unwrap();

        for format in ["text", "json"] {
            let cmd = TrainCommand::parse_from(["train", "--corpus", corpus, "--format", format]);
            assert!(run(cmd).is_ok());
        }
    }

    #[test]
    fn test_run_missing_corpus() {
        let cmd = TrainCommand::parse_from(["train", "--corpus", "/nonexistent/corpus.txt", "--format", "json"]);
        assert!(run(cmd).is_err());
    }

    #[test]
    fn test_vocabulary_json_shape() {
        let vocab = Vocabulary::from_ranked([("ba", 0.5), (UNK_TOKEN, UNK_PROBABILITY)]);
        let json = serde_json::to_value(&vocab).unwrap();

        assert_eq!(json[0]["piece"], "ba");
        assert_eq!(json[1]["id"], 1);
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_quotes_whitespace_pieces() {
        let vocab = Vocabulary::from_ranked([("a b", 1.0)]);
        assert!(render_vocabulary(&vocab).contains("\"a b\""));
    }
}
