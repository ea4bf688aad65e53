//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word back into a human-readable line for
//! debug tracing, the `dump` command, and test diagnostics. It only renders
//! fields; nothing is checked or executed.
//!
//! # Usage
//!
//! ```
//! use mesivec_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x1030_1004), "lw r3, r0, r1, 4");
//! assert_eq!(disassemble(0x1500_0000), "halt");
//! ```

use crate::common::constants::{NUM_REGS, OPCODE_MASK, OPCODE_SHIFT};
use crate::isa::instruction::InstructionFields;
use crate::isa::opcodes;

/// Register names for r0–r15.
const REG_NAMES: [&str; NUM_REGS] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "r14",
    "r15",
];

/// Returns the name for a register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r??")
}

/// Disassembles a 32-bit instruction word.
///
/// Returns `"<mnemonic> rd, rs, rt, imm"` with the immediate sign-extended,
/// `"halt"` for a halt with all-zero operands, or `".word 0xXXXXXXXX"` when the
/// opcode has no mnemonic.
pub fn disassemble(word: u32) -> String {
    let code = word.opcode();
    let Some(mn) = opcodes::mnemonic(code) else {
        return format!(".word 0x{word:08X}");
    };

    let operands = word & !(OPCODE_MASK << OPCODE_SHIFT);
    if code == opcodes::OP_HALT && operands == 0 {
        return mn.to_owned();
    }

    format!(
        "{mn} {}, {}, {}, {}",
        reg(word.rd()),
        reg(word.rs()),
        reg(word.rt()),
        word.imm()
    )
}
