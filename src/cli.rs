//! CLI command implementations for mips32dec.

pub(crate) mod decode;
pub(crate) mod file;

mod output;

use clap::ValueEnum;
use mips32dec::{DecodeResult, ParseWordError, default_decoder, parse_word};
use std::error::Error;
use std::fmt;

/// Output format for decoded lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

/// One input line and what became of it.
#[derive(Debug)]
pub(crate) struct Line {
    /// 1-based position in the input.
    pub(crate) number: usize,
    /// Trimmed source text.
    pub(crate) text: String,
    /// Decode outcome, or why the text was not a word.
    pub(crate) outcome: Result<DecodeResult, ParseWordError>,
}

/// Parse and decode numbered input lines, in parallel when `threads` allows.
///
/// A line that fails to parse is kept with its error; it does not stop the
/// rest of the batch.
pub(crate) fn decode_lines<'a, I>(lines: I, threads: Option<usize>) -> Result<Vec<Line>, CliError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let parsed: Vec<(usize, &str, Result<u32, ParseWordError>)> = lines
        .into_iter()
        .map(|(number, text)| (number, text.trim(), parse_word(text)))
        .collect();
    let words: Vec<u32> = parsed
        .iter()
        .filter_map(|(_, _, word)| word.as_ref().ok().copied())
        .collect();

    let decoder = default_decoder();
    let results = match threads {
        Some(num_threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| CliError::new(format!("Failed to build thread pool: {e}")))?
            .install(|| decoder.decode_all(&words)),
        None => decoder.decode_all(&words),
    };

    let mut results = results.into_iter();
    let mut decoded = Vec::with_capacity(parsed.len());
    for (number, text, word) in parsed {
        let outcome = match word {
            Ok(_) => Ok(results
                .next()
                .ok_or_else(|| CliError::new("decoder returned too few results"))?),
            Err(e) => {
                tracing::warn!(line = number, error = %e, "unparsable input line");
                Err(e)
            }
        };
        decoded.push(Line {
            number,
            text: text.to_string(),
            outcome,
        });
    }
    Ok(decoded)
}
