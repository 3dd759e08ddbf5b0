// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! mips32dec: a stateless MIPS32 instruction word decoder.
//!
//! Each 32-bit word is split into the fields of its format, identified
//! against an immutable instruction catalog, checked against the
//! instruction's structural rules, and rendered as assembly text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (decode / file, rayon)      │
//! ├─────────────────────────────────────┤
//! │  Decoder: identify, validate, render│
//! ├─────────────────────────────────────┤
//! │  Catalog (static MIPS32 table)      │
//! ├─────────────────────────────────────┤
//! │  Formats, bitfields, registers      │
//! └─────────────────────────────────────┘
//! ```
//!
//! ```
//! let result = mips32dec::decode(0x23bd_fff8);
//! assert_eq!(result.mnemonic().unwrap().to_string(), "addi $sp, $sp, -8");
//! ```

pub mod decoder;
pub mod error;
pub mod input;
pub mod isa;

use std::sync::LazyLock;

pub use decoder::{DecodeResult, Decoded, Decoder, Unidentified};
pub use error::{CatalogError, ParseWordError};
pub use input::parse_word;

static DEFAULT_DECODER: LazyLock<Decoder> = LazyLock::new(|| match Decoder::mips32() {
    Ok(decoder) => decoder,
    Err(err) => panic!("built-in instruction table is malformed: {err}"),
});

/// The process-wide decoder over the built-in MIPS32 table.
///
/// # Panics
///
/// Panics on first use if the built-in table is malformed.
#[must_use]
pub fn default_decoder() -> &'static Decoder {
    &DEFAULT_DECODER
}

/// Decode `word` with the [`default_decoder`].
///
/// # Panics
///
/// Panics on first use if the built-in table is malformed.
#[must_use]
pub fn decode(word: u32) -> DecodeResult {
    DEFAULT_DECODER.decode(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decoder_is_shared() {
        assert!(std::ptr::eq(default_decoder(), default_decoder()));
        assert_eq!(decode(0x0c10_0000), default_decoder().decode(0x0c10_0000));
    }
}
