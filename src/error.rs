//! Error types for catalog construction and word parsing.
//!
//! Decode outcomes are not errors; see [`DecodeResult`](crate::DecodeResult).

use std::fmt;

use crate::isa::{Field, Format, Key};

/// A defect in an instruction table, detected while building a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// A format's field widths are not all positive or do not sum to 32.
    InvalidLayout {
        /// The offending format.
        format: Format,
        /// Its declared widths.
        widths: &'static [u32],
    },
    /// A definition's format differs from the one its opcode resolves to.
    FormatMismatch {
        /// Instruction name.
        name: &'static str,
        /// Opcode from the definition's key.
        opcode: u32,
        /// Format the definition declares.
        declared: Format,
        /// Format the opcode table gives, if any.
        resolved: Option<Format>,
    },
    /// A definition's key does not follow its format's key scheme.
    KeyMismatch {
        /// Instruction name.
        name: &'static str,
        /// The declared key.
        key: Key,
    },
    /// A pattern, rule, or alias reads a field the format does not have.
    FieldOutsideLayout {
        /// Instruction name.
        name: &'static str,
        /// The missing field.
        field: Field,
        /// The definition's format.
        format: Format,
    },
    /// Two definitions share an identifying key.
    DuplicateKey {
        /// The shared key.
        key: Key,
        /// Name of the definition registered first.
        first: &'static str,
        /// Name of the definition that collided.
        second: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidLayout { format, widths } => {
                write!(f, "format {format} layout {widths:?} does not cover 32 bits")
            }
            CatalogError::FormatMismatch {
                name,
                opcode,
                declared,
                resolved: Some(resolved),
            } => write!(
                f,
                "{name}: declared format {declared} but opcode {opcode:#x} is format {resolved}"
            ),
            CatalogError::FormatMismatch {
                name,
                opcode,
                declared,
                resolved: None,
            } => write!(
                f,
                "{name}: declared format {declared} but opcode {opcode:#x} has no format"
            ),
            CatalogError::KeyMismatch { name, key } => {
                write!(f, "{name}: key ({key}) does not follow its format's key scheme")
            }
            CatalogError::FieldOutsideLayout {
                name,
                field,
                format,
            } => write!(f, "{name}: field {field} is not part of format {format}"),
            CatalogError::DuplicateKey { key, first, second } => {
                write!(f, "{first} and {second} share the key ({key})")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Failure to read an instruction word from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    /// The input was empty or only whitespace.
    Empty,
    /// The input is not a number in the expected base.
    Invalid {
        /// The offending input, trimmed.
        input: String,
    },
    /// The number does not fit in 32 bits.
    OutOfRange {
        /// The offending input, trimmed.
        input: String,
    },
}

impl fmt::Display for ParseWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWordError::Empty => write!(f, "empty instruction word"),
            ParseWordError::Invalid { input } => {
                write!(f, "not a decimal or 0x-prefixed hexadecimal number: {input:?}")
            }
            ParseWordError::OutOfRange { input } => {
                write!(f, "does not fit in 32 bits: {input:?}")
            }
        }
    }
}

impl std::error::Error for ParseWordError {}
