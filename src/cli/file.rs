//! File command implementation.

use super::output::render;
use super::{CliError, OutputFormat, decode_lines};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Execute the file command: one word per line from `path`, or stdin for `-`.
///
/// Blank lines and `#` comments are skipped but still counted, so reported
/// line numbers match the input.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub(crate) fn execute(
    path: &Path,
    format: OutputFormat,
    threads: Option<usize>,
) -> Result<(), CliError> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::new(format!("Failed to read stdin: {e}")))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?
    };

    let lines = decode_lines(word_lines(&contents), threads)?;
    print!("{}", render(&lines, format)?);
    Ok(())
}

/// Numbered lines that carry a word.
fn word_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lines_skip_blanks_and_comments() {
        let contents = "# header\n0x71014802\n\n   \n  # indented comment\n  42  \n";
        let lines: Vec<_> = word_lines(contents).collect();
        assert_eq!(lines, vec![(2, "0x71014802"), (6, "42")]);
    }
}
