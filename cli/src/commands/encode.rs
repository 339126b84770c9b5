//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

use super::args::{CorpusArgs, OutputFormat};

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to encode
    #[arg(short, long, conflicts_with_all = ["file", "stdin"])]
    pub input: Option<String>,

    /// Read the text to encode from a file
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the text to encode from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use crate::input::read_input;
use anyhow::{Context, Result as AnyhowResult};
use serde::Serialize;
use tracing::info;
use unimerge_tokenizer::Encoding;

#[derive(Serialize)]
struct EncodeOutput<'a> {
    ids: &'a [u32],
    offsets: &'a [(usize, usize)],
    pieces: Vec<&'a str>,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let text = read_input(cmd.input.as_deref(), cmd.file.as_deref(), cmd.stdin)?;
    let tokenizer = cmd.corpus.train()?;

    let encoding = tokenizer.encode(&text)?;
    if let Some(unk) = tokenizer.unk_id() {
        info!(
            tokens = encoding.len(),
            unknown = encoding.unknown_count(unk),
            "encoded input"
        );
    }

    let output = render(&encoding, &text, cmd.format)?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Encoded {} tokens to {}", encoding.len(), path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn render(encoding: &Encoding, text: &str, format: OutputFormat) -> AnyhowResult<String> {
    Ok(match format {
        OutputFormat::Text => format_ids(&encoding.ids),
        OutputFormat::Json => serde_json::to_string_pretty(&EncodeOutput {
            ids: &encoding.ids,
            offsets: &encoding.offsets,
            pieces: encoding.spans(text),
        })?,
    })
}

/// Comma-separated IDs, the form the decode command accepts.
pub fn format_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
