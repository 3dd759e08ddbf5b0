//! The supported MIPS32 instruction subset.
//!
//! Encodings follow the MIPS32 Release 2 architecture manual. Keys follow
//! [`KeyScheme`](super::KeyScheme): SPECIAL and SPECIAL2 by funct, COP0 and
//! COP1 by rs and funct, REGIMM by rt, everything else by opcode alone.

use super::catalog::{Alias, Definition};
use super::format::Field::{self, Funct, Opcode, Rd, Rs, Rt, Shamt};
use super::format::Format;
use super::key::Key;
use super::mnemonic::Operand::{Amount, Cop0, Fpr, Gpr, Label};
use super::mnemonic::{Operand, Pattern};
use super::rule::Rule;

// ==================== Operand patterns ====================

const RD_RS_RT: Pattern = Pattern::List(&[Gpr(Rd), Gpr(Rs), Gpr(Rt)]);
const RD_RT_RS: Pattern = Pattern::List(&[Gpr(Rd), Gpr(Rt), Gpr(Rs)]);
const RD_RT_SHAMT: Pattern = Pattern::List(&[Gpr(Rd), Gpr(Rt), Amount(Shamt)]);
const RD_RS: Pattern = Pattern::List(&[Gpr(Rd), Gpr(Rs)]);
const RS_RT: Pattern = Pattern::List(&[Gpr(Rs), Gpr(Rt)]);
const RD: Pattern = Pattern::List(&[Gpr(Rd)]);
const RS: Pattern = Pattern::List(&[Gpr(Rs)]);
const RT_COP0: Pattern = Pattern::List(&[Gpr(Rt), Cop0(Rd)]);
const RT_FPR: Pattern = Pattern::List(&[Gpr(Rt), Fpr(Rd)]);

const RT_RS_IMM: Pattern =
    Pattern::List(&[Gpr(Rt), Gpr(Rs), Operand::Immediate(Field::Immediate)]);
const RT_IMM: Pattern = Pattern::List(&[Gpr(Rt), Operand::Immediate(Field::Immediate)]);
const RS_IMM: Pattern = Pattern::List(&[Gpr(Rs), Operand::Immediate(Field::Immediate)]);
const RS_RT_LABEL: Pattern = Pattern::List(&[Gpr(Rs), Gpr(Rt), Label(Field::Immediate)]);
const RS_LABEL: Pattern = Pattern::List(&[Gpr(Rs), Label(Field::Immediate)]);
const RT_OFFSET_BASE: Pattern = Pattern::Offset {
    rt: Rt,
    offset: Field::Immediate,
    base: Rs,
};

const TARGET: Pattern = Pattern::List(&[Operand::Target(Field::Target)]);

// ==================== Validation rules ====================

const NONE: &[Rule] = &[];
const SHAMT_ZERO: &[Rule] = &[Rule::zero(Shamt)];
const RS_ZERO: &[Rule] = &[Rule::zero(Rs)];
const RT_ZERO: &[Rule] = &[Rule::zero(Rt)];
const RT_SHAMT_ZERO: &[Rule] = &[Rule::zero(Rt), Rule::zero(Shamt)];
const RD_SHAMT_ZERO: &[Rule] = &[Rule::zero(Rd), Rule::zero(Shamt)];
const RS_RT_SHAMT_ZERO: &[Rule] = &[Rule::zero(Rs), Rule::zero(Rt), Rule::zero(Shamt)];
const RT_RD_SHAMT_ZERO: &[Rule] = &[Rule::zero(Rt), Rule::zero(Rd), Rule::zero(Shamt)];

/// `sll $zero, $zero, 0` is the canonical no-op.
const NOP: Alias = Alias {
    name: "nop",
    when: &[Rule::zero(Rd), Rule::zero(Rt), Rule::zero(Shamt)],
    pattern: Pattern::Bare,
};

// ==================== Row constructors ====================

const fn r(
    name: &'static str,
    opcode: u32,
    funct: u32,
    pattern: Pattern,
    rules: &'static [Rule],
) -> Definition {
    Definition {
        name,
        format: Format::R,
        key: Key::new(&[(Opcode, opcode), (Funct, funct)]),
        pattern,
        rules,
        aliases: &[],
    }
}

const fn special(
    name: &'static str,
    funct: u32,
    pattern: Pattern,
    rules: &'static [Rule],
) -> Definition {
    r(name, 0x00, funct, pattern, rules)
}

const fn special2(
    name: &'static str,
    funct: u32,
    pattern: Pattern,
    rules: &'static [Rule],
) -> Definition {
    r(name, 0x1c, funct, pattern, rules)
}

const fn cop(
    name: &'static str,
    opcode: u32,
    rs: u32,
    funct: u32,
    pattern: Pattern,
    rules: &'static [Rule],
) -> Definition {
    Definition {
        name,
        format: Format::R,
        key: Key::new(&[(Opcode, opcode), (Rs, rs), (Funct, funct)]),
        pattern,
        rules,
        aliases: &[],
    }
}

const fn imm(
    name: &'static str,
    opcode: u32,
    pattern: Pattern,
    rules: &'static [Rule],
) -> Definition {
    Definition {
        name,
        format: Format::I,
        key: Key::new(&[(Opcode, opcode)]),
        pattern,
        rules,
        aliases: &[],
    }
}

const fn mem(name: &'static str, opcode: u32) -> Definition {
    imm(name, opcode, RT_OFFSET_BASE, NONE)
}

const fn regimm(name: &'static str, rt: u32, pattern: Pattern) -> Definition {
    Definition {
        name,
        format: Format::I,
        key: Key::new(&[(Opcode, 0x01), (Rt, rt)]),
        pattern,
        rules: NONE,
        aliases: &[],
    }
}

const fn jump(name: &'static str, opcode: u32) -> Definition {
    Definition {
        name,
        format: Format::J,
        key: Key::new(&[(Opcode, opcode)]),
        pattern: TARGET,
        rules: NONE,
        aliases: &[],
    }
}

/// Every instruction the default catalog knows.
pub static MIPS32: &[Definition] = &[
    // ==================== SPECIAL (opcode 0x00) ====================
    Definition {
        aliases: &[NOP],
        ..special("sll", 0x00, RD_RT_SHAMT, RS_ZERO)
    },
    special("srl", 0x02, RD_RT_SHAMT, RS_ZERO),
    special("sra", 0x03, RD_RT_SHAMT, RS_ZERO),
    special("sllv", 0x04, RD_RT_RS, SHAMT_ZERO),
    special("srlv", 0x06, RD_RT_RS, SHAMT_ZERO),
    special("srav", 0x07, RD_RT_RS, SHAMT_ZERO),
    special("jr", 0x08, RS, RT_RD_SHAMT_ZERO),
    special("jalr", 0x09, RD_RS, RT_SHAMT_ZERO),
    special("movz", 0x0a, RD_RS_RT, SHAMT_ZERO),
    special("movn", 0x0b, RD_RS_RT, SHAMT_ZERO),
    // The 20-bit code field is free for software use.
    special("syscall", 0x0c, Pattern::Bare, NONE),
    special("break", 0x0d, Pattern::Bare, NONE),
    special("mfhi", 0x10, RD, RS_RT_SHAMT_ZERO),
    special("mthi", 0x11, RS, RT_RD_SHAMT_ZERO),
    special("mflo", 0x12, RD, RS_RT_SHAMT_ZERO),
    special("mtlo", 0x13, RS, RT_RD_SHAMT_ZERO),
    special("mult", 0x18, RS_RT, RD_SHAMT_ZERO),
    special("multu", 0x19, RS_RT, RD_SHAMT_ZERO),
    special("div", 0x1a, RS_RT, RD_SHAMT_ZERO),
    special("divu", 0x1b, RS_RT, RD_SHAMT_ZERO),
    special("add", 0x20, RD_RS_RT, SHAMT_ZERO),
    special("addu", 0x21, RD_RS_RT, SHAMT_ZERO),
    special("sub", 0x22, RD_RS_RT, SHAMT_ZERO),
    special("subu", 0x23, RD_RS_RT, SHAMT_ZERO),
    special("and", 0x24, RD_RS_RT, SHAMT_ZERO),
    special("or", 0x25, RD_RS_RT, SHAMT_ZERO),
    special("xor", 0x26, RD_RS_RT, SHAMT_ZERO),
    special("nor", 0x27, RD_RS_RT, SHAMT_ZERO),
    special("slt", 0x2a, RD_RS_RT, SHAMT_ZERO),
    special("sltu", 0x2b, RD_RS_RT, SHAMT_ZERO),
    // Traps keep a 10-bit software code in rd and shamt.
    special("tge", 0x30, RS_RT, NONE),
    special("tgeu", 0x31, RS_RT, NONE),
    special("tlt", 0x32, RS_RT, NONE),
    special("tltu", 0x33, RS_RT, NONE),
    special("teq", 0x34, RS_RT, NONE),
    special("tne", 0x36, RS_RT, NONE),
    // ==================== SPECIAL2 (opcode 0x1c) ====================
    special2("madd", 0x00, RS_RT, RD_SHAMT_ZERO),
    special2("maddu", 0x01, RS_RT, RD_SHAMT_ZERO),
    special2("mul", 0x02, RD_RS_RT, SHAMT_ZERO),
    special2("msub", 0x04, RS_RT, RD_SHAMT_ZERO),
    special2("msubu", 0x05, RS_RT, RD_SHAMT_ZERO),
    special2("clz", 0x20, RD_RS, SHAMT_ZERO),
    special2("clo", 0x21, RD_RS, SHAMT_ZERO),
    // ==================== COP0 (0x10) and COP1 (0x11) ====================
    cop("mfc0", 0x10, 0x00, 0x00, RT_COP0, SHAMT_ZERO),
    cop("mtc0", 0x10, 0x04, 0x00, RT_COP0, SHAMT_ZERO),
    cop("eret", 0x10, 0x10, 0x18, Pattern::Bare, RT_RD_SHAMT_ZERO),
    cop("mfc1", 0x11, 0x00, 0x00, RT_FPR, SHAMT_ZERO),
    cop("mtc1", 0x11, 0x04, 0x00, RT_FPR, SHAMT_ZERO),
    // ==================== REGIMM (opcode 0x01) ====================
    regimm("bltz", 0x00, RS_LABEL),
    regimm("bgez", 0x01, RS_LABEL),
    regimm("tgei", 0x08, RS_IMM),
    regimm("tgeiu", 0x09, RS_IMM),
    regimm("tlti", 0x0a, RS_IMM),
    regimm("tltiu", 0x0b, RS_IMM),
    regimm("teqi", 0x0c, RS_IMM),
    regimm("tnei", 0x0e, RS_IMM),
    regimm("bltzal", 0x10, RS_LABEL),
    regimm("bgezal", 0x11, RS_LABEL),
    // ==================== Branches and ALU immediates ====================
    imm("beq", 0x04, RS_RT_LABEL, NONE),
    imm("bne", 0x05, RS_RT_LABEL, NONE),
    imm("blez", 0x06, RS_LABEL, RT_ZERO),
    imm("bgtz", 0x07, RS_LABEL, RT_ZERO),
    imm("addi", 0x08, RT_RS_IMM, NONE),
    imm("addiu", 0x09, RT_RS_IMM, NONE),
    imm("slti", 0x0a, RT_RS_IMM, NONE),
    imm("sltiu", 0x0b, RT_RS_IMM, NONE),
    imm("andi", 0x0c, RT_RS_IMM, NONE),
    imm("ori", 0x0d, RT_RS_IMM, NONE),
    imm("xori", 0x0e, RT_RS_IMM, NONE),
    imm("lui", 0x0f, RT_IMM, RS_ZERO),
    // ==================== Loads and stores ====================
    mem("lb", 0x20),
    mem("lh", 0x21),
    mem("lwl", 0x22),
    mem("lw", 0x23),
    mem("lbu", 0x24),
    mem("lhu", 0x25),
    mem("lwr", 0x26),
    mem("sb", 0x28),
    mem("sh", 0x29),
    mem("swl", 0x2a),
    mem("sw", 0x2b),
    mem("swr", 0x2e),
    mem("ll", 0x30),
    mem("sc", 0x38),
    // ==================== Jumps ====================
    jump("j", 0x02),
    jump("jal", 0x03),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = MIPS32.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), MIPS32.len());
    }

    #[test]
    fn test_every_opcode_row_resolves_to_its_format() {
        for definition in MIPS32 {
            let opcode = definition.key.get(Opcode).unwrap();
            assert_eq!(
                Format::from_opcode(opcode),
                Some(definition.format),
                "{}",
                definition.name
            );
        }
    }

    #[test]
    fn test_memory_rows_use_offset_addressing() {
        for definition in MIPS32.iter().filter(|d| d.key.get(Opcode).unwrap() >= 0x20) {
            assert_eq!(definition.pattern, RT_OFFSET_BASE, "{}", definition.name);
        }
    }
}
