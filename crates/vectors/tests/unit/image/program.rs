//! # Program Tests

use mesivec_core::Error;
use mesivec_core::image::Program;
use mesivec_core::isa::Instruction;

#[test]
fn test_idle_program_is_single_halt() {
    let program = Program::idle();
    assert_eq!(program.len(), 1);
    assert_eq!(program.encode().unwrap(), vec![0x1500_0000]);
}

#[test]
fn test_builder_preserves_order() {
    let program = Program::new()
        .lw(2, 0, 0, 0)
        .add(5, 2, 2, 0)
        .sw(5, 0, 1, 12)
        .halt();
    assert_eq!(
        program.encode().unwrap(),
        vec![0x1020_0000, 0x0052_2000, 0x1150_100C, 0x1500_0000]
    );
}

#[test]
fn test_op_accepts_raw_code() {
    let program = Program::new().op(5u8, 4, 2, 3, 0);
    assert_eq!(program.encode().unwrap(), vec![0x0542_3000]);
}

#[test]
fn test_empty_program_encodes_to_nothing() {
    let program = Program::new();
    assert!(program.is_empty());
    assert!(program.encode().unwrap().is_empty());
}

#[test]
fn test_unknown_opcode_fails_encode() {
    let program = Program::new().halt().op("nop", 0, 0, 0, 0);
    assert!(matches!(program.encode(), Err(Error::UnknownOpcode(_))));
}

#[test]
fn test_collect_from_instructions() {
    let program: Program = [Instruction::new("mul", 4, 2, 3, 0), Instruction::halt()]
        .into_iter()
        .collect();
    assert_eq!(program.instructions().len(), 2);
    assert_eq!(program.instructions()[1], Instruction::halt());
}
