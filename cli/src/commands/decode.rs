//! Decode command implementation.

use clap::Parser;

use super::args::CorpusArgs;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Comma-separated token IDs (e.g. "0,2,1")
    #[arg(short = 't', long, value_delimiter = ',', num_args = 1..)]
    pub ids: Vec<u32>,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = cmd.corpus.train()?;
    println!("{}", tokenizer.decode(&cmd.ids));
    Ok(())
}
