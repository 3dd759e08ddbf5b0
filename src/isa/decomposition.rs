//! The decomposed (per-field) view of an instruction word.

use std::fmt;

use super::bitfield::extract;
use super::format::{Field, Format};

/// An instruction word split into the fields of its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition {
    format: Format,
    values: Vec<u32>,
}

impl Decomposition {
    /// Split `word` according to `format`'s layout.
    #[must_use]
    pub fn new(word: u32, format: Format) -> Self {
        Self {
            format,
            values: extract(word, format.widths()),
        }
    }

    /// The format whose layout produced these fields.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Field values, leftmost first.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Value of `field`, or `None` if the format has no such field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<u32> {
        self.format
            .position(field)
            .and_then(|i| self.values.get(i).copied())
    }

    /// The opcode field.
    #[must_use]
    pub fn opcode(&self) -> u32 {
        self.get(Field::Opcode).unwrap_or_default()
    }

    /// Bracketed decimal form, e.g. `[28 8 1 9 0 2]`.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        bracketed(self.values.iter().map(u32::to_string))
    }

    /// Bracketed hexadecimal form, e.g. `[0x1c 8 1 9 0 2]`.
    ///
    /// Values below 10 read the same in both bases and are left bare.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        bracketed(self.values.iter().map(|&v| {
            if v > 9 {
                format!("{v:#x}")
            } else {
                v.to_string()
            }
        }))
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

fn bracketed(parts: impl Iterator<Item = String>) -> String {
    format!("[{}]", parts.collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_decomposition_strings() {
        let d = Decomposition::new(0x7101_4802, Format::R);
        assert_eq!(d.values(), &[28, 8, 1, 9, 0, 2]);
        assert_eq!(d.to_decimal_string(), "[28 8 1 9 0 2]");
        assert_eq!(d.to_hex_string(), "[0x1c 8 1 9 0 2]");
        assert_eq!(d.to_string(), "[28 8 1 9 0 2]");
    }

    #[test]
    fn test_i_decomposition_strings() {
        let d = Decomposition::new(0x23bd_fff8, Format::I);
        assert_eq!(d.to_decimal_string(), "[8 29 29 65528]");
        assert_eq!(d.to_hex_string(), "[8 0x1d 0x1d 0xfff8]");
    }

    #[test]
    fn test_get_by_field() {
        let d = Decomposition::new(0x7101_4802, Format::R);
        assert_eq!(d.opcode(), 0x1c);
        assert_eq!(d.get(Field::Rd), Some(9));
        assert_eq!(d.get(Field::Funct), Some(2));
        assert_eq!(d.get(Field::Immediate), None);
    }

    #[test]
    fn test_same_word_different_formats() {
        let word = 0x0c10_0000;
        assert_eq!(Decomposition::new(word, Format::J).values(), &[3, 0x10_0000]);
        assert_eq!(Decomposition::new(word, Format::I).values(), &[3, 0, 0x10, 0]);
    }
}
