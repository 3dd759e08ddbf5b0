//! Identifying keys: the field values that select a catalog entry.

use std::fmt;

use super::decomposition::Decomposition;
use super::format::{Field, Format};

/// Upper bound on the number of fields in a [`Key`].
pub const MAX_KEY_FIELDS: usize = 3;

/// An ordered tuple of named field values.
///
/// The first part is always the opcode. Unused slots hold a fixed filler so
/// that derived equality and hashing only depend on the used parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    parts: [(Field, u32); MAX_KEY_FIELDS],
    len: usize,
}

const FILLER: (Field, u32) = (Field::Opcode, 0);

impl Key {
    /// Build a key from explicit parts.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_KEY_FIELDS`] parts are given. In a `static`
    /// table this is a compile-time error.
    #[must_use]
    pub const fn new(parts: &[(Field, u32)]) -> Self {
        assert!(parts.len() <= MAX_KEY_FIELDS, "too many key fields");
        let mut slots = [FILLER; MAX_KEY_FIELDS];
        let mut i = 0;
        while i < parts.len() {
            slots[i] = parts[i];
            i += 1;
        }
        Self {
            parts: slots,
            len: parts.len(),
        }
    }

    /// Build the key for decoded fields following their format's scheme.
    #[must_use]
    pub fn of(fields: &Decomposition) -> Self {
        let scheme = KeyScheme::of(fields.format());
        let mut key = Self::new(&[]);
        for field in scheme.fields(fields.opcode()) {
            if let Some(value) = fields.get(field) {
                key.parts[key.len] = (field, value);
                key.len += 1;
            }
        }
        key
    }

    /// The used parts, in order.
    #[must_use]
    pub fn parts(&self) -> &[(Field, u32)] {
        &self.parts[..self.len]
    }

    /// Value of `field` within this key.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<u32> {
        self.parts()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|&(_, value)| value)
    }

    /// Field names of the used parts, in order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.parts().iter().map(|&(field, _)| field)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, value)) in self.parts().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}={value:#x}")?;
        }
        Ok(())
    }
}

/// Which fields compose the key of a format.
///
/// The opcode always comes first. A refinement adds one more field for a
/// specific opcode whose instructions the base fields cannot tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyScheme {
    base: &'static [Field],
    refinements: &'static [(u32, Field)],
}

impl KeyScheme {
    /// The scheme declared for `format`.
    #[must_use]
    pub const fn of(format: Format) -> Self {
        match format {
            // COP0 and COP1 share funct values between moves to and from
            // the coprocessor; rs carries the direction.
            Format::R => Self {
                base: &[Field::Funct],
                refinements: &[(0x10, Field::Rs), (0x11, Field::Rs)],
            },
            // REGIMM selects the branch or trap through rt.
            Format::I => Self {
                base: &[],
                refinements: &[(0x01, Field::Rt)],
            },
            Format::J => Self {
                base: &[],
                refinements: &[],
            },
        }
    }

    /// Key fields for an instruction with the given opcode, in key order.
    pub fn fields(self, opcode: u32) -> impl Iterator<Item = Field> {
        let base = self.base;
        let refinement = self
            .refinements
            .iter()
            .find(|(op, _)| *op == opcode)
            .map(|&(_, field)| field);
        std::iter::once(Field::Opcode)
            .chain(refinement)
            .chain(base.iter().copied())
    }
}
