//! Reading instruction words from text.

use std::num::IntErrorKind;

use crate::error::ParseWordError;

/// Parse a word written as `0x`-prefixed hexadecimal or as decimal.
///
/// Negative decimals down to `i32::MIN` are read as their two's complement
/// bit pattern, so `-1` is `0xffffffff`.
///
/// # Errors
///
/// Returns [`ParseWordError::Empty`] for blank input,
/// [`ParseWordError::OutOfRange`] if the value does not fit in 32 bits and
/// [`ParseWordError::Invalid`] otherwise.
pub fn parse_word(text: &str) -> Result<u32, ParseWordError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseWordError::Empty);
    }

    let result = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None if text.starts_with('-') => text.parse::<i32>().map(twos_complement),
        None => text.parse::<u32>(),
    };

    result.map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseWordError::OutOfRange {
            input: text.to_string(),
        },
        _ => ParseWordError::Invalid {
            input: text.to_string(),
        },
    })
}

/// The bit pattern of a signed word.
#[allow(clippy::cast_sign_loss)] // Only the bit pattern is wanted
const fn twos_complement(value: i32) -> u32 {
    value as u32
}
