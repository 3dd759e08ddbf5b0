//! Operand patterns and mnemonic rendering.

use std::fmt;

use super::decomposition::Decomposition;
use super::format::Field;
use super::register::render_gpr;

/// How one field is rendered as an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// General purpose register, by conventional name.
    Gpr(Field),
    /// Coprocessor 0 register, as `$<n>`.
    Cop0(Field),
    /// Floating point register, as `$f<n>`.
    Fpr(Field),
    /// 16-bit immediate, sign-extended, in decimal.
    Immediate(Field),
    /// 16-bit branch displacement, sign-extended, in decimal.
    Label(Field),
    /// Unsigned amount such as a shift distance, in decimal.
    Amount(Field),
    /// Jump target, in hexadecimal.
    Target(Field),
}

impl Operand {
    /// The field this operand reads.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Operand::Gpr(f)
            | Operand::Cop0(f)
            | Operand::Fpr(f)
            | Operand::Immediate(f)
            | Operand::Label(f)
            | Operand::Amount(f)
            | Operand::Target(f) => f,
        }
    }

    /// Render the operand from decoded fields.
    #[must_use]
    pub fn render(self, fields: &Decomposition) -> String {
        let value = fields.get(self.field()).unwrap_or_default();
        match self {
            Operand::Gpr(_) => render_gpr(value),
            Operand::Cop0(_) => format!("${value}"),
            Operand::Fpr(_) => format!("$f{value}"),
            Operand::Immediate(_) | Operand::Label(_) => sign_extend_16(value).to_string(),
            Operand::Amount(_) => value.to_string(),
            Operand::Target(_) => format!("{value:#x}"),
        }
    }
}

/// The operand layout of an instruction's mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// The name alone, e.g. `syscall`.
    Bare,
    /// Comma-separated operands, e.g. `add $t1, $t0, $at`.
    List(&'static [Operand]),
    /// Base plus offset addressing, e.g. `sw $ra, 4($sp)`.
    Offset {
        /// Register loaded or stored.
        rt: Field,
        /// Signed displacement.
        offset: Field,
        /// Base address register.
        base: Field,
    },
}

impl Pattern {
    /// Every field the pattern reads.
    #[must_use]
    pub fn fields(self) -> Vec<Field> {
        match self {
            Pattern::Bare => Vec::new(),
            Pattern::List(operands) => operands.iter().map(|op| op.field()).collect(),
            Pattern::Offset { rt, offset, base } => vec![rt, offset, base],
        }
    }

    /// Render the operand strings, in mnemonic order.
    #[must_use]
    pub fn operands(self, fields: &Decomposition) -> Vec<String> {
        match self {
            Pattern::Bare => Vec::new(),
            Pattern::List(operands) => operands.iter().map(|op| op.render(fields)).collect(),
            Pattern::Offset { rt, offset, base } => vec![
                Operand::Gpr(rt).render(fields),
                format!(
                    "{}({})",
                    Operand::Immediate(offset).render(fields),
                    Operand::Gpr(base).render(fields)
                ),
            ],
        }
    }

    /// Render a full mnemonic for `name`.
    #[must_use]
    pub fn render(self, name: &'static str, fields: &Decomposition) -> Mnemonic {
        Mnemonic {
            name,
            operands: self.operands(fields),
        }
    }
}

/// A rendered instruction: name plus operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    name: &'static str,
    operands: Vec<String>,
}

impl Mnemonic {
    /// Instruction name, e.g. `addi`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rendered operands, in order.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        &self.operands
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if !self.operands.is_empty() {
            write!(f, " {}", self.operands.join(", "))?;
        }
        Ok(())
    }
}

/// Reinterpret the low 16 bits of `value` as a signed quantity.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // Only the low halfword is wanted
pub fn sign_extend_16(value: u32) -> i32 {
    i32::from(value as u16 as i16)
}
