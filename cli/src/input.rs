//! Reading text to encode.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Read input text from one of: inline text, file path, or stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>, use_stdin: bool) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()));
    }

    if use_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    bail!("No input provided. Use --input, --file, or --stdin")
}
