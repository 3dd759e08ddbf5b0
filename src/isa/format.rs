//! Encoding formats, their field layouts, and the opcode to format table.

use std::fmt;

/// A named bitfield of an instruction word.
///
/// Which fields exist depends on the [`Format`]; see [`Format::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Bits 31..26, present in every format.
    Opcode,
    /// First source register, bits 25..21.
    Rs,
    /// Second source or target register, bits 20..16.
    Rt,
    /// Destination register, bits 15..11 (R format).
    Rd,
    /// Shift amount, bits 10..6 (R format).
    Shamt,
    /// Function code, bits 5..0 (R format).
    Funct,
    /// Immediate, offset, or branch displacement, bits 15..0 (I format).
    Immediate,
    /// Jump target, bits 25..0 (J format).
    Target,
}

impl Field {
    /// Lowercase name used in keys and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Opcode => "opcode",
            Field::Rs => "rs",
            Field::Rt => "rt",
            Field::Rd => "rd",
            Field::Shamt => "shamt",
            Field::Funct => "funct",
            Field::Immediate => "imm",
            Field::Target => "target",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instruction encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format: opcode, rs, rt, rd, shamt, funct.
    R,
    /// Immediate format: opcode, rs, rt, immediate.
    I,
    /// Jump format: opcode, target.
    J,
}

const R_FIELDS: &[Field] = &[
    Field::Opcode,
    Field::Rs,
    Field::Rt,
    Field::Rd,
    Field::Shamt,
    Field::Funct,
];
const R_WIDTHS: &[u32] = &[6, 5, 5, 5, 5, 6];

const I_FIELDS: &[Field] = &[Field::Opcode, Field::Rs, Field::Rt, Field::Immediate];
const I_WIDTHS: &[u32] = &[6, 5, 5, 16];

const J_FIELDS: &[Field] = &[Field::Opcode, Field::Target];
const J_WIDTHS: &[u32] = &[6, 26];

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Format; 3] = [Format::R, Format::I, Format::J];

    /// Field names of this format's layout, leftmost first.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Format::R => R_FIELDS,
            Format::I => I_FIELDS,
            Format::J => J_FIELDS,
        }
    }

    /// Field widths of this format's layout, leftmost first.
    #[must_use]
    pub const fn widths(self) -> &'static [u32] {
        match self {
            Format::R => R_WIDTHS,
            Format::I => I_WIDTHS,
            Format::J => J_WIDTHS,
        }
    }

    /// Index of `field` within this format's layout.
    #[must_use]
    pub fn position(self, field: Field) -> Option<usize> {
        self.fields().iter().position(|&f| f == field)
    }

    /// Resolve the format of a 6-bit opcode.
    ///
    /// Returns `None` for opcodes outside the supported subset.
    #[must_use]
    pub const fn from_opcode(opcode: u32) -> Option<Format> {
        match opcode {
            // SPECIAL, COP0, COP1, SPECIAL2
            0x00 | 0x10 | 0x11 | 0x1c => Some(Format::R),
            0x02 | 0x03 => Some(Format::J),
            // REGIMM, branches and ALU immediates, loads, stores, ll/sc
            0x01 | 0x04..=0x0f | 0x20..=0x26 | 0x28..=0x2b | 0x2e | 0x30 | 0x38 => {
                Some(Format::I)
            }
            _ => None,
        }
    }

    /// Resolve the format of an instruction word from its opcode bits.
    #[must_use]
    pub const fn of_word(word: u32) -> Option<Format> {
        Format::from_opcode(opcode_of(word))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::R => "R",
            Format::I => "I",
            Format::J => "J",
        };
        f.write_str(name)
    }
}

/// The 6 leftmost bits of an instruction word.
#[must_use]
pub const fn opcode_of(word: u32) -> u32 {
    word >> 26
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::bitfield::is_valid_layout;

    #[test]
    fn test_layouts_cover_the_word() {
        for format in Format::ALL {
            assert!(is_valid_layout(format.widths()), "{format}");
            assert_eq!(format.fields().len(), format.widths().len(), "{format}");
            assert_eq!(format.fields()[0], Field::Opcode, "{format}");
        }
    }

    #[test]
    fn test_from_opcode() {
        assert_eq!(Format::from_opcode(0x00), Some(Format::R));
        assert_eq!(Format::from_opcode(0x1c), Some(Format::R));
        assert_eq!(Format::from_opcode(0x11), Some(Format::R));
        assert_eq!(Format::from_opcode(0x01), Some(Format::I));
        assert_eq!(Format::from_opcode(0x2b), Some(Format::I));
        assert_eq!(Format::from_opcode(0x03), Some(Format::J));
        assert_eq!(Format::from_opcode(0x27), None);
        assert_eq!(Format::from_opcode(0x3f), None);
    }

    #[test]
    fn test_of_word_reads_top_bits() {
        assert_eq!(opcode_of(0x7101_4802), 0x1c);
        assert_eq!(Format::of_word(0x0c10_0000), Some(Format::J));
        assert_eq!(Format::of_word(0xfc00_0000), None);
    }

    #[test]
    fn test_position() {
        assert_eq!(Format::R.position(Field::Funct), Some(5));
        assert_eq!(Format::I.position(Field::Immediate), Some(3));
        assert_eq!(Format::J.position(Field::Rs), None);
    }
}
