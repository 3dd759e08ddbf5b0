//! Structural validation rules and their evaluation.

use std::fmt;

use super::decomposition::Decomposition;
use super::format::Field;

/// An equality constraint on one field, e.g. `shamt == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Field the rule inspects.
    pub field: Field,
    /// Value the field must hold.
    pub expected: u32,
}

impl Rule {
    /// Require `field` to equal `expected`.
    #[must_use]
    pub const fn new(field: Field, expected: u32) -> Self {
        Self { field, expected }
    }

    /// Require `field` to be zero.
    #[must_use]
    pub const fn zero(field: Field) -> Self {
        Self::new(field, 0)
    }

    /// Whether `fields` satisfies the rule.
    ///
    /// A field the format does not have never satisfies it.
    #[must_use]
    pub fn holds(self, fields: &Decomposition) -> bool {
        fields.get(self.field) == Some(self.expected)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} == {}", self.field, self.expected)
    }
}

/// A rule that did not hold, with the value actually found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    /// The violated rule.
    pub rule: Rule,
    /// The field's actual value.
    pub actual: u32,
}

impl Violation {
    /// The offending field.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.rule.field
    }

    /// The value the rule required.
    #[must_use]
    pub const fn expected(&self) -> u32 {
        self.rule.expected
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (found {})", self.rule, self.actual)
    }
}

/// Outcome of checking a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every rule held.
    Valid,
    /// The rules that failed, in rule order. Never empty.
    Invalid(Vec<Violation>),
}

impl Validation {
    /// Whether every rule held.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Evaluate all `rules` against `fields`, collecting every violation.
///
/// Rules naming a field outside the format's layout are skipped; catalog
/// construction rejects such rules.
#[must_use]
pub fn validate(rules: &[Rule], fields: &Decomposition) -> Validation {
    let violations: Vec<Violation> = rules
        .iter()
        .filter_map(|&rule| {
            let actual = fields.get(rule.field)?;
            (actual != rule.expected).then_some(Violation { rule, actual })
        })
        .collect();

    if violations.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(violations)
    }
}
