//! Run command implementation: train, show the vocabulary, round-trip a sentence.

use clap::Parser;

use super::args::CorpusArgs;

/// Sentence encoded when `--input` is not given.
pub const DEFAULT_SENTENCE: &str = "Merry Christmas, Marmee! Many of them! Thank you for our books; we read some, and mean to every day, they cried, in chorus.";

/// Run command arguments.
#[derive(Parser)]
pub struct RunCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Sentence to encode and decode
    #[arg(short, long, default_value = DEFAULT_SENTENCE)]
    pub input: String,
}

use super::encode::format_ids;
use super::train::render_vocabulary;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: RunCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.corpus.train()?;

    print!("{}", render_vocabulary(tokenizer.vocab()));
    println!();

    let encoding = tokenizer.encode(&cmd.input)?;
    println!("Encoded: {}", format_ids(&encoding.ids));
    println!("Decoded: {}", tokenizer.decode(&encoding.ids));

    Ok(())
}
