//! Decode command implementation.

use super::output::render;
use super::{CliError, OutputFormat, decode_lines};

/// Execute the decode command over words given as arguments.
///
/// # Errors
///
/// Returns an error if the thread pool or output rendering fails.
pub(crate) fn execute(
    words: &[String],
    format: OutputFormat,
    threads: Option<usize>,
) -> Result<(), CliError> {
    let lines = decode_lines(
        words
            .iter()
            .enumerate()
            .map(|(i, word)| (i + 1, word.as_str())),
        threads,
    )?;
    print!("{}", render(&lines, format)?);
    Ok(())
}
