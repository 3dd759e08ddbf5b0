//! End-to-end decoding of known encodings.

#![allow(missing_docs)]
#![allow(clippy::unreadable_literal)] // Instruction encodings are standard hex
#![allow(clippy::unwrap_used)] // Test code can use unwrap

use mips32dec::isa::{Catalog, Field, Format, MIPS32, Rule, Violation, compose};
use mips32dec::{DecodeResult, Decoder, Unidentified, decode};

fn mnemonic(word: u32) -> String {
    decode(word).mnemonic().unwrap().to_string()
}

#[test]
fn test_mul() {
    let result = decode(0x71014802);
    assert!(result.is_success());
    assert_eq!(result.format(), Some(Format::R));
    let fields = result.fields().unwrap();
    assert_eq!(fields.to_decimal_string(), "[28 8 1 9 0 2]");
    assert_eq!(fields.to_hex_string(), "[0x1c 8 1 9 0 2]");
    assert_eq!(mnemonic(0x71014802), "mul $t1, $t0, $at");
}

#[test]
fn test_addi_sign_extends() {
    let result = decode(0x23bdfff8);
    assert_eq!(result.format(), Some(Format::I));
    assert_eq!(result.fields().unwrap().values(), &[8, 29, 29, 65528]);
    assert_eq!(mnemonic(0x23bdfff8), "addi $sp, $sp, -8");
}

#[test]
fn test_store_uses_offset_addressing() {
    let result = decode(0xafbf0004);
    assert_eq!(result.format(), Some(Format::I));
    assert_eq!(mnemonic(0xafbf0004), "sw $ra, 4($sp)");
}

#[test]
fn test_jal() {
    let result = decode(0x0c100000);
    assert_eq!(result.format(), Some(Format::J));
    assert_eq!(result.fields().unwrap().values(), &[3, 0x100000]);
    assert_eq!(mnemonic(0x0c100000), "jal 0x100000");
}

#[test]
fn test_add_with_shamt_is_partial() {
    let result = decode(0x010950e0);
    let DecodeResult::Partial {
        decoded,
        violations,
    } = &result
    else {
        panic!("expected a partial result, got {result:?}");
    };
    assert_eq!(decoded.mnemonic().to_string(), "add $t2, $t0, $t1");
    assert_eq!(
        violations,
        &[Violation {
            rule: Rule::zero(Field::Shamt),
            actual: 3,
        }]
    );
    assert_eq!(violations[0].to_string(), "shamt == 0 (found 3)");
}

#[test]
fn test_unknown_opcode() {
    for opcode in [0x12u32, 0x13, 0x3f] {
        let word = opcode << 26;
        assert_eq!(
            decode(word),
            DecodeResult::Unidentified(Unidentified::Format { word, opcode })
        );
    }
}

#[test]
fn test_unknown_key_names_the_key() {
    let result = decode(0x0000003f);
    assert_eq!(
        result.to_string(),
        "unknown instruction: no instruction matches opcode=0x0, funct=0x3f"
    );

    // REGIMM rt = 0x1f
    let result = decode(0x041f0000);
    assert_eq!(
        result.to_string(),
        "unknown instruction: no instruction matches opcode=0x1, rt=0x1f"
    );
}

#[test]
fn test_register_and_coprocessor_operands() {
    assert_eq!(mnemonic(0x00000000), "nop");
    assert_eq!(mnemonic(0x00084080), "sll $t0, $t0, 2");
    assert_eq!(mnemonic(0x03e00008), "jr $ra");
    assert_eq!(mnemonic(0x3c1c1000), "lui $gp, 4096");
    assert_eq!(mnemonic(0x8fc8fffc), "lw $t0, -4($fp)");
    assert_eq!(mnemonic(0x1000ffff), "beq $zero, $zero, -1");
    assert_eq!(mnemonic(0x0411fffe), "bgezal $zero, -2");
    assert_eq!(mnemonic(0x40086000), "mfc0 $t0, $12");
    assert_eq!(mnemonic(0x44886000), "mtc1 $t0, $f12");
    assert_eq!(mnemonic(0x42000018), "eret");
    assert_eq!(mnemonic(0x0000000c), "syscall");
}

#[test]
fn test_every_definition_decodes_to_itself() {
    let decoder = Decoder::mips32().unwrap();
    for definition in MIPS32 {
        let format = definition.format;
        let mut fields = vec![0; format.fields().len()];
        for &(field, value) in definition.key.parts() {
            fields[format.position(field).unwrap()] = value;
        }
        let word = compose(&fields, format.widths());

        let result = decoder.decode(word);
        assert!(result.is_success(), "{}: {result}", definition.name);
        let expected = if definition.name == "sll" {
            "nop"
        } else {
            definition.name
        };
        assert_eq!(result.mnemonic().unwrap().name(), expected);
    }
}

#[test]
fn test_custom_catalog() {
    let mul = MIPS32.iter().find(|d| d.name == "mul").copied().unwrap();
    let decoder = Decoder::new(Catalog::build([mul]).unwrap());
    assert!(decoder.decode(0x71014802).is_success());
    assert!(decoder.decode(0x23bdfff8).is_unidentified());
}
