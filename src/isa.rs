//! MIPS32 instruction set definitions.
//!
//! Leaves first: [`extract`] splits a word into fields, [`Format`] resolves
//! the layout from the opcode, [`Catalog`] maps a [`Key`] to a
//! [`Definition`], [`validate`] checks its [`Rule`]s, and [`Pattern`]
//! renders the [`Mnemonic`].

mod bitfield;
mod catalog;
mod decomposition;
mod format;
mod key;
mod mnemonic;
mod register;
mod rule;
mod table;

pub use bitfield::{WORD_BITS, compose, extract};
pub use catalog::{Alias, Catalog, Definition};
pub use decomposition::Decomposition;
pub use format::{Field, Format, opcode_of};
pub use key::{Key, KeyScheme, MAX_KEY_FIELDS};
pub use mnemonic::{Mnemonic, Operand, Pattern, sign_extend_16};
pub use register::{gpr_name, render_gpr};
pub use rule::{Rule, Validation, Violation, validate};
pub use table::MIPS32;
