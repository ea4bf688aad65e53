//! Instruction Encoder.
//!
//! Packs an opcode and four operand fields into a 32-bit instruction word.
//! Every field is masked to its width before placement: values that do not
//! fit are truncated, never rejected.

use crate::common::Result;
use crate::common::constants::{
    IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Instruction, OpcodeArg};

/// Encodes one instruction into its 32-bit word.
///
/// # Arguments
///
/// * `opcode` - Mnemonic (e.g. `"lw"`) or raw integer code.
/// * `rd` - Destination register; low 4 bits are kept.
/// * `rs` - First source register; low 4 bits are kept.
/// * `rt` - Second source register; low 4 bits are kept.
/// * `imm` - Signed immediate; stored as 12-bit two's complement.
///
/// # Errors
///
/// Returns [`Error::UnknownOpcode`](crate::common::Error::UnknownOpcode) if
/// `opcode` is a mnemonic missing from the opcode table.
///
/// # Examples
///
/// ```
/// use mesivec_core::isa::encode::encode;
///
/// assert_eq!(encode("lw", 2, 0, 0, 0).unwrap(), 0x1020_0000);
/// assert_eq!(encode(21u32, 0, 0, 0, 0).unwrap(), 0x1500_0000);
/// assert_eq!(encode("add", 1, 0, 0, -1).unwrap(), 0x0010_0FFF);
/// ```
pub fn encode(opcode: impl Into<OpcodeArg>, rd: u32, rs: u32, rt: u32, imm: i32) -> Result<u32> {
    let code = opcode.into().resolve()?;
    Ok(pack(code, rd, rs, rt, imm))
}

/// Packs an already-resolved opcode and its operands into a word.
///
/// Negative immediates are first reduced to their 12-bit two's-complement
/// pattern; after that every field goes through the same mask.
#[inline]
pub fn pack(code: u32, rd: u32, rs: u32, rt: u32, imm: i32) -> u32 {
    let imm = if imm < 0 { imm & IMM_MASK as i32 } else { imm };

    ((code & OPCODE_MASK) << OPCODE_SHIFT)
        | ((rd & REG_MASK) << RD_SHIFT)
        | ((rs & REG_MASK) << RS_SHIFT)
        | ((rt & REG_MASK) << RT_SHIFT)
        | ((imm as u32) & IMM_MASK)
}

/// Encodes a sequence of instructions, stopping at the first unknown opcode.
///
/// # Errors
///
/// Returns the first encoding error encountered.
pub fn encode_all<'a, I>(instructions: I) -> Result<Vec<u32>>
where
    I: IntoIterator<Item = &'a Instruction>,
{
    instructions
        .into_iter()
        .map(|inst| {
            let word = inst.encode()?;
            tracing::debug!("encoded {word:08X}: {}", disassemble(word));
            Ok(word)
        })
        .collect()
}
