//! Word decoding: format resolution, identification, validation, rendering.

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::CatalogError;
use crate::isa::{
    Catalog, Decomposition, Format, Key, Mnemonic, Validation, Violation, opcode_of, validate,
};

/// Decodes instruction words against an immutable [`Catalog`].
///
/// A decoder holds no per-call state, so one instance can be shared by
/// reference across threads.
#[derive(Debug, Clone)]
pub struct Decoder {
    catalog: Catalog,
}

impl Decoder {
    /// Create a decoder over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Create a decoder over the built-in MIPS32 table.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the built-in table is malformed.
    pub fn mips32() -> Result<Self, CatalogError> {
        Catalog::mips32().map(Self::new)
    }

    /// The catalog this decoder identifies against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Decode one word. Total: every input yields a [`DecodeResult`].
    #[must_use]
    pub fn decode(&self, word: u32) -> DecodeResult {
        let Some(format) = Format::of_word(word) else {
            let opcode = opcode_of(word);
            trace!(word = format_args!("{word:#010x}"), opcode, "unknown format");
            return DecodeResult::Unidentified(Unidentified::Format { word, opcode });
        };

        let fields = Decomposition::new(word, format);
        let key = Key::of(&fields);
        let Some(definition) = self.catalog.lookup(&key) else {
            trace!(word = format_args!("{word:#010x}"), %key, "no matching instruction");
            return DecodeResult::Unidentified(Unidentified::Instruction { word, fields, key });
        };

        match validate(definition.rules, &fields) {
            Validation::Valid => {
                let mnemonic = definition.render(&fields);
                DecodeResult::Success(Decoded {
                    word,
                    fields,
                    mnemonic,
                })
            }
            Validation::Invalid(violations) => {
                debug!(
                    word = format_args!("{word:#010x}"),
                    instruction = definition.name,
                    violations = violations.len(),
                    "validation failed"
                );
                let mnemonic = definition.render_canonical(&fields);
                DecodeResult::Partial {
                    decoded: Decoded {
                        word,
                        fields,
                        mnemonic,
                    },
                    violations,
                }
            }
        }
    }

    /// Decode a batch in parallel. Results are in input order.
    #[must_use]
    pub fn decode_all(&self, words: &[u32]) -> Vec<DecodeResult> {
        words.par_iter().map(|&word| self.decode(word)).collect()
    }
}

/// An identified word: its fields and rendered mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    word: u32,
    fields: Decomposition,
    mnemonic: Mnemonic,
}

impl Decoded {
    /// The raw word.
    #[must_use]
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// The word's format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.fields.format()
    }

    /// The word split into its format's fields.
    #[must_use]
    pub fn fields(&self) -> &Decomposition {
        &self.fields
    }

    /// The rendered instruction.
    #[must_use]
    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x} {} {} {} {}",
            self.word,
            self.format(),
            self.fields.to_decimal_string(),
            self.fields.to_hex_string(),
            self.mnemonic
        )
    }
}

/// Why a word could not be identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unidentified {
    /// The opcode has no format.
    Format {
        /// The raw word.
        word: u32,
        /// Its opcode.
        opcode: u32,
    },
    /// The format is known but no definition has the word's key.
    Instruction {
        /// The raw word.
        word: u32,
        /// The word split into its format's fields.
        fields: Decomposition,
        /// The key that was looked up.
        key: Key,
    },
}

impl Unidentified {
    /// The raw word.
    #[must_use]
    pub const fn word(&self) -> u32 {
        match self {
            Unidentified::Format { word, .. } | Unidentified::Instruction { word, .. } => *word,
        }
    }

    /// The fields, when the format was resolved.
    #[must_use]
    pub fn fields(&self) -> Option<&Decomposition> {
        match self {
            Unidentified::Format { .. } => None,
            Unidentified::Instruction { fields, .. } => Some(fields),
        }
    }
}

impl fmt::Display for Unidentified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unidentified::Format { opcode, .. } => {
                write!(f, "no format matches opcode={opcode:#x}")
            }
            Unidentified::Instruction { key, .. } => write!(f, "no instruction matches {key}"),
        }
    }
}

/// Outcome of decoding one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    /// Identified and every rule holds.
    Success(Decoded),
    /// Identified, but some rules fail. The mnemonic is rendered anyway.
    Partial {
        /// Best-effort decoding under the canonical name.
        decoded: Decoded,
        /// Every failed rule, in rule order.
        violations: Vec<Violation>,
    },
    /// Not identified.
    Unidentified(Unidentified),
}

impl DecodeResult {
    /// The raw word.
    #[must_use]
    pub const fn word(&self) -> u32 {
        match self {
            DecodeResult::Success(decoded) | DecodeResult::Partial { decoded, .. } => decoded.word,
            DecodeResult::Unidentified(unidentified) => unidentified.word(),
        }
    }

    /// The resolved format, if any.
    #[must_use]
    pub fn format(&self) -> Option<Format> {
        self.fields().map(Decomposition::format)
    }

    /// The fields, if the format was resolved.
    #[must_use]
    pub fn fields(&self) -> Option<&Decomposition> {
        match self {
            DecodeResult::Success(decoded) | DecodeResult::Partial { decoded, .. } => {
                Some(&decoded.fields)
            }
            DecodeResult::Unidentified(unidentified) => unidentified.fields(),
        }
    }

    /// The identified decoding, valid or not.
    #[must_use]
    pub fn decoded(&self) -> Option<&Decoded> {
        match self {
            DecodeResult::Success(decoded) | DecodeResult::Partial { decoded, .. } => {
                Some(decoded)
            }
            DecodeResult::Unidentified(_) => None,
        }
    }

    /// The rendered mnemonic, if identified.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&Mnemonic> {
        self.decoded().map(Decoded::mnemonic)
    }

    /// Failed rules; empty unless partial.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            DecodeResult::Partial { violations, .. } => violations,
            _ => &[],
        }
    }

    /// Whether the word decoded and validated.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, DecodeResult::Success(_))
    }

    /// Whether the word was identified but failed validation.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, DecodeResult::Partial { .. })
    }

    /// Whether the word was not identified.
    #[must_use]
    pub const fn is_unidentified(&self) -> bool {
        matches!(self, DecodeResult::Unidentified(_))
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeResult::Success(decoded) => write!(f, "{decoded}"),
            DecodeResult::Partial {
                decoded,
                violations,
            } => {
                write!(f, "{decoded} violations: ")?;
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
            DecodeResult::Unidentified(unidentified) => {
                write!(f, "unknown instruction: {unidentified}")
            }
        }
    }
}
