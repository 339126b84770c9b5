//! CLI commands for the unimerge tokenizer.

pub mod args;
pub mod benchmark;
pub mod decode;
pub mod encode;
pub mod run;
pub mod train;

pub use benchmark::BenchmarkCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use run::RunCommand;
pub use train::TrainCommand;
