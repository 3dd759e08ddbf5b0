//! Output formatting utilities for CLI.

use super::{CliError, Line, OutputFormat};
use mips32dec::{DecodeResult, ParseWordError};
use serde::Serialize;

/// Render decoded lines in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(super) fn render(lines: &[Line], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format_text(lines)),
        OutputFormat::Json => {
            let rows: Vec<JsonLine> = lines.iter().map(JsonLine::from_line).collect();
            let mut json = serde_json::to_string_pretty(&rows)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(format_csv(lines)),
    }
}

/// Format lines as human-readable text, one row per line.
fn format_text(lines: &[Line]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(&match &line.outcome {
            Ok(result @ DecodeResult::Unidentified(_)) => {
                format!("{} {:08x} {result}\n", line.number, result.word())
            }
            Ok(result) => format!("{} {result}\n", line.number),
            Err(e) => format!("{} invalid input: {e}\n", line.number),
        });
    }
    output
}

/// Outcome category of a line.
fn status(outcome: &Result<DecodeResult, ParseWordError>) -> &'static str {
    match outcome {
        Ok(DecodeResult::Success(_)) => "success",
        Ok(DecodeResult::Partial { .. }) => "partial",
        Ok(DecodeResult::Unidentified(_)) => "unknown",
        Err(_) => "invalid",
    }
}

/// Explanation for anything but success.
fn detail(outcome: &Result<DecodeResult, ParseWordError>) -> Option<String> {
    match outcome {
        Ok(DecodeResult::Success(_)) => None,
        Ok(DecodeResult::Partial { violations, .. }) => Some(
            violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Ok(DecodeResult::Unidentified(unidentified)) => Some(unidentified.to_string()),
        Err(e) => Some(e.to_string()),
    }
}

/// JSON-serializable violation.
#[derive(Debug, Serialize)]
struct JsonViolation {
    /// Field name.
    field: &'static str,
    /// Required value.
    expected: u32,
    /// Value found in the word.
    actual: u32,
}

/// JSON-serializable line.
#[derive(Debug, Serialize)]
struct JsonLine {
    /// 1-based input line.
    line: usize,
    /// Source text.
    input: String,
    /// success, partial, unknown, or invalid.
    status: &'static str,
    /// Word as 8 hex digits (null if the input did not parse).
    word: Option<String>,
    /// Format name (null if unresolved).
    format: Option<String>,
    /// Field values, leftmost first.
    fields: Option<Vec<u32>>,
    /// Rendered instruction (null if unidentified).
    mnemonic: Option<String>,
    /// Failed rules.
    violations: Vec<JsonViolation>,
    /// Reason for an unknown or invalid line.
    error: Option<String>,
}

impl JsonLine {
    /// Create from a decoded line.
    fn from_line(line: &Line) -> Self {
        let result = line.outcome.as_ref().ok();
        Self {
            line: line.number,
            input: line.text.clone(),
            status: status(&line.outcome),
            word: result.map(|r| format!("{:08x}", r.word())),
            format: result.and_then(DecodeResult::format).map(|f| f.to_string()),
            fields: result
                .and_then(DecodeResult::fields)
                .map(|fields| fields.values().to_vec()),
            mnemonic: result
                .and_then(DecodeResult::mnemonic)
                .map(ToString::to_string),
            violations: result
                .map(DecodeResult::violations)
                .unwrap_or_default()
                .iter()
                .map(|v| JsonViolation {
                    field: v.field().name(),
                    expected: v.expected(),
                    actual: v.actual,
                })
                .collect(),
            error: match &line.outcome {
                Ok(DecodeResult::Unidentified(unidentified)) => Some(unidentified.to_string()),
                Err(e) => Some(e.to_string()),
                Ok(_) => None,
            },
        }
    }
}

/// Format lines as CSV with a header row.
fn format_csv(lines: &[Line]) -> String {
    let mut output = String::from("line,input,word,status,format,fields,fields_hex,mnemonic,detail\n");
    for line in lines {
        let result = line.outcome.as_ref().ok();
        let fields = result.and_then(DecodeResult::fields);
        let cells = [
            line.number.to_string(),
            line.text.clone(),
            result.map(|r| format!("{:08x}", r.word())).unwrap_or_default(),
            status(&line.outcome).to_string(),
            result
                .and_then(DecodeResult::format)
                .map(|f| f.to_string())
                .unwrap_or_default(),
            fields.map(|f| f.to_decimal_string()).unwrap_or_default(),
            fields.map(|f| f.to_hex_string()).unwrap_or_default(),
            result
                .and_then(DecodeResult::mnemonic)
                .map(ToString::to_string)
                .unwrap_or_default(),
            detail(&line.outcome).unwrap_or_default(),
        ];
        let row: Vec<String> = cells.iter().map(|cell| csv_field(cell)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }
    output
}

/// Quote a CSV cell if it contains a separator, quote, or newline.
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
