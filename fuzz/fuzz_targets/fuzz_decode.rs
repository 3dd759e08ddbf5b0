#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mips32dec::isa::{Format, compose};
use mips32dec::{DecodeResult, decode, parse_word};

/// Structured input for decoder fuzzing.
#[derive(Arbitrary, Debug)]
struct DecodeInput {
    /// Raw instruction word.
    word: u32,
    /// Text fed to the word parser.
    text: String,
}

fuzz_target!(|input: DecodeInput| {
    let word = input.word;
    let result = decode(word);

    // Deterministic
    assert_eq!(result, decode(word));
    assert_eq!(result.word(), word);

    match &result {
        DecodeResult::Success(decoded) | DecodeResult::Partial { decoded, .. } => {
            let fields = decoded.fields();
            assert_eq!(compose(fields.values(), fields.format().widths()), word);
            assert_eq!(result.is_partial(), !result.violations().is_empty());
        }
        DecodeResult::Unidentified(_) => {
            assert!(result.violations().is_empty());
            assert_eq!(result.format().is_none(), Format::of_word(word).is_none());
        }
    }

    // The parser never panics, and hex text reads back exactly
    let _ = parse_word(&input.text);
    assert_eq!(parse_word(&format!("{word:#x}")), Ok(word));
});
