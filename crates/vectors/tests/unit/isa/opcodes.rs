//! # Opcode Table Tests

use rstest::rstest;

use mesivec_core::isa::opcodes::{self, OPCODE_TABLE};

#[rstest]
#[case("add", 0)]
#[case("sub", 1)]
#[case("and", 2)]
#[case("or", 3)]
#[case("xor", 4)]
#[case("mul", 5)]
#[case("sll", 6)]
#[case("sra", 7)]
#[case("srl", 8)]
#[case("beq", 9)]
#[case("bne", 10)]
#[case("blt", 11)]
#[case("bgt", 12)]
#[case("ble", 13)]
#[case("bge", 14)]
#[case("jal", 15)]
#[case("lw", 16)]
#[case("sw", 17)]
#[case("halt", 21)]
fn test_lookup(#[case] name: &str, #[case] code: u8) {
    assert_eq!(opcodes::lookup(name), Some(code));
    assert_eq!(opcodes::mnemonic(code), Some(name));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(opcodes::lookup("LW"), None);
    assert_eq!(opcodes::lookup("Halt"), None);
}

#[test]
fn test_unknown_mnemonic() {
    assert_eq!(opcodes::lookup("nop"), None);
    assert_eq!(opcodes::lookup(""), None);
}

#[test]
fn test_reserved_codes_have_no_mnemonic() {
    for code in [18, 19, 20, 22, 0xFF] {
        assert_eq!(opcodes::mnemonic(code), None, "code {code}");
    }
}

#[test]
fn test_table_has_unique_names_and_codes() {
    for (i, (name_a, code_a)) in OPCODE_TABLE.iter().enumerate() {
        for (name_b, code_b) in &OPCODE_TABLE[i + 1..] {
            assert_ne!(name_a, name_b);
            assert_ne!(code_a, code_b);
        }
    }
}
