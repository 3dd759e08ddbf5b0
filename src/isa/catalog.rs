//! The instruction catalog: definitions indexed by identifying key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use super::bitfield::is_valid_layout;
use super::decomposition::Decomposition;
use super::format::{Field, Format};
use super::key::{Key, KeyScheme};
use super::mnemonic::{Mnemonic, Pattern};
use super::rule::Rule;
use super::table::MIPS32;
use crate::error::CatalogError;

/// An alternative rendering used when extra rules hold, e.g. `nop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    /// Name rendered instead of the definition's.
    pub name: &'static str,
    /// Rules that must all hold for the alias to apply.
    pub when: &'static [Rule],
    /// Operand pattern rendered instead of the definition's.
    pub pattern: Pattern,
}

/// One supported instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Encoding format.
    pub format: Format,
    /// Identifying key; must follow the format's [`KeyScheme`].
    pub key: Key,
    /// Operand ordering of the mnemonic.
    pub pattern: Pattern,
    /// Structural rules every legal encoding satisfies.
    pub rules: &'static [Rule],
    /// Alternative renderings, tried in order.
    pub aliases: &'static [Alias],
}

impl Definition {
    /// Render `fields` with this definition, applying the first matching alias.
    #[must_use]
    pub fn render(&self, fields: &Decomposition) -> Mnemonic {
        match self
            .aliases
            .iter()
            .find(|alias| alias.when.iter().all(|rule| rule.holds(fields)))
        {
            Some(alias) => alias.pattern.render(alias.name, fields),
            None => self.render_canonical(fields),
        }
    }

    /// Render `fields` under the canonical name, ignoring aliases.
    #[must_use]
    pub fn render_canonical(&self, fields: &Decomposition) -> Mnemonic {
        self.pattern.render(self.name, fields)
    }

    fn referenced_fields(&self) -> Vec<Field> {
        let mut fields = self.pattern.fields();
        fields.extend(self.rules.iter().map(|rule| rule.field));
        for alias in self.aliases {
            fields.extend(alias.pattern.fields());
            fields.extend(alias.when.iter().map(|rule| rule.field));
        }
        fields
    }

    fn check(&self) -> Result<(), CatalogError> {
        let Some(opcode) = self.key.get(Field::Opcode) else {
            return Err(CatalogError::KeyMismatch {
                name: self.name,
                key: self.key,
            });
        };

        let resolved = Format::from_opcode(opcode);
        if resolved != Some(self.format) {
            return Err(CatalogError::FormatMismatch {
                name: self.name,
                opcode,
                declared: self.format,
                resolved,
            });
        }

        if !self.key.fields().eq(KeyScheme::of(self.format).fields(opcode)) {
            return Err(CatalogError::KeyMismatch {
                name: self.name,
                key: self.key,
            });
        }

        if let Some(field) = self
            .referenced_fields()
            .into_iter()
            .find(|&field| self.format.position(field).is_none())
        {
            return Err(CatalogError::FieldOutsideLayout {
                name: self.name,
                field,
                format: self.format,
            });
        }

        Ok(())
    }
}

/// Immutable registry of instruction definitions.
///
/// Built once and shared read-only; every check that could make a lookup
/// ambiguous or a rendering ill-defined happens in [`Catalog::build`].
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<Key, Definition>,
}

impl Catalog {
    /// Build a catalog from a table of definitions.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a format layout does not cover 32 bits,
    /// a definition disagrees with the format table or key scheme, a
    /// definition reads a field its format lacks, or two definitions share
    /// a key.
    pub fn build<I>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Definition>,
    {
        for format in Format::ALL {
            if !is_valid_layout(format.widths()) {
                return Err(CatalogError::InvalidLayout {
                    format,
                    widths: format.widths(),
                });
            }
        }

        let mut entries = HashMap::new();
        for definition in definitions {
            definition.check()?;
            match entries.entry(definition.key) {
                Entry::Occupied(existing) => {
                    let existing: &Definition = existing.get();
                    return Err(CatalogError::DuplicateKey {
                        key: definition.key,
                        first: existing.name,
                        second: definition.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(definition);
                }
            }
        }

        debug!(instructions = entries.len(), "instruction catalog built");
        Ok(Self { entries })
    }

    /// The MIPS32 subset shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the built-in table is malformed.
    pub fn mips32() -> Result<Self, CatalogError> {
        Self::build(MIPS32.iter().copied())
    }

    /// Find the definition for `key`.
    #[must_use]
    pub fn lookup(&self, key: &Key) -> Option<&Definition> {
        self.entries.get(key)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All definitions, in no particular order.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::mnemonic::Operand;

    const RD: Pattern = Pattern::List(&[Operand::Gpr(Field::Rd)]);

    fn special(name: &'static str, funct: u32) -> Definition {
        Definition {
            name,
            format: Format::R,
            key: Key::new(&[(Field::Opcode, 0), (Field::Funct, funct)]),
            pattern: RD,
            rules: &[],
            aliases: &[],
        }
    }

    #[test]
    fn test_builtin_table_builds() {
        let catalog = Catalog::mips32().unwrap();
        assert_eq!(catalog.len(), MIPS32.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::mips32().unwrap();
        let key = Key::new(&[(Field::Opcode, 0x1c), (Field::Funct, 0x02)]);
        assert_eq!(catalog.lookup(&key).map(|d| d.name), Some("mul"));
        let key = Key::new(&[(Field::Opcode, 0x1c), (Field::Funct, 0x3f)]);
        assert!(catalog.lookup(&key).is_none());
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let err = Catalog::build([special("mfhi", 0x10), special("mflo", 0x10)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateKey {
                key: Key::new(&[(Field::Opcode, 0), (Field::Funct, 0x10)]),
                first: "mfhi",
                second: "mflo",
            }
        );
    }

    #[test]
    fn test_rejects_key_outside_scheme() {
        let definition = Definition {
            key: Key::new(&[(Field::Opcode, 0)]),
            ..special("bogus", 0)
        };
        assert!(matches!(
            Catalog::build([definition]),
            Err(CatalogError::KeyMismatch { name: "bogus", .. })
        ));
    }

    #[test]
    fn test_rejects_format_disagreement() {
        let definition = Definition {
            key: Key::new(&[(Field::Opcode, 0x08), (Field::Funct, 0)]),
            ..special("addi", 0)
        };
        assert!(matches!(
            Catalog::build([definition]),
            Err(CatalogError::FormatMismatch {
                resolved: Some(Format::I),
                declared: Format::R,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_field_outside_layout() {
        let definition = Definition {
            rules: &[Rule {
                field: Field::Immediate,
                expected: 0,
            }],
            ..special("bogus", 0)
        };
        assert_eq!(
            Catalog::build([definition]).unwrap_err(),
            CatalogError::FieldOutsideLayout {
                name: "bogus",
                field: Field::Immediate,
                format: Format::R,
            }
        );
    }

    #[test]
    fn test_alias_applies_only_when_rules_hold() {
        let catalog = Catalog::mips32().unwrap();
        let sll = catalog
            .lookup(&Key::new(&[(Field::Opcode, 0), (Field::Funct, 0)]))
            .unwrap();
        let zero = Decomposition::new(0, Format::R);
        assert_eq!(sll.render(&zero).to_string(), "nop");
        assert_eq!(sll.render_canonical(&zero).to_string(), "sll $zero, $zero, 0");

        let shift = Decomposition::new(0x0008_4080, Format::R);
        assert_eq!(sll.render(&shift).to_string(), "sll $t0, $t0, 2");
    }
}
