//! Unimerge CLI - Command-line interface for the unimerge tokenizer.
//!
//! This is the main entry point for the `unimerge` command-line tool. There
//! is no vocabulary file format, so every command trains on its corpus first.

mod commands;
mod input;
mod logging;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, DecodeCommand, EncodeCommand, RunCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "unimerge")]
#[command(about = "A merge-based subword tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Suppress all logging
    #[arg(long, global = true)]
    log_disable: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary and print it
    Train(TrainCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Train, print the vocabulary, then encode and decode a sample sentence
    Run(RunCommand),
    /// Benchmark encoding performance of both match modes
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_disable);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Run(cmd) => commands::run::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
