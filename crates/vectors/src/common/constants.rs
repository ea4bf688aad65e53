//! Global Constants.
//!
//! This module defines constants shared by the encoder and the scenario writer. It includes:
//! 1. **Instruction Constants:** Field masks and shifts for the 32-bit instruction word.
//! 2. **Image Constants:** Word width and file naming for the on-disk images.
//! 3. **Machine Constants:** Core count of the reference simulator.

/// Bit mask for the opcode field (8 bits).
pub const OPCODE_MASK: u32 = 0xFF;

/// Bit position shift for the opcode field (bits 31-24).
pub const OPCODE_SHIFT: u32 = 24;

/// Bit mask for a register index field (4 bits).
pub const REG_MASK: u32 = 0xF;

/// Bit position shift for the destination register (rd) field (bits 23-20).
pub const RD_SHIFT: u32 = 20;

/// Bit position shift for the first source register (rs) field (bits 19-16).
pub const RS_SHIFT: u32 = 16;

/// Bit position shift for the second source register (rt) field (bits 15-12).
pub const RT_SHIFT: u32 = 12;

/// Bit mask for the immediate field (12 bits, bits 11-0).
pub const IMM_MASK: u32 = 0xFFF;

/// Width of the immediate field in bits.
pub const IMM_BITS: u32 = 12;

/// Number of registers addressable by a 4-bit register field.
pub const NUM_REGS: usize = 16;

/// Number of hex digits written per word.
pub const WORD_HEX_DIGITS: usize = 8;

/// Number of cores in the reference simulator.
pub const NUM_CORES: usize = 4;

/// File name of the shared data-memory image.
pub const MEMORY_IMAGE_FILE: &str = "memin.txt";

/// Returns the instruction-memory file name for `core` (`imem<core>.txt`).
pub fn imem_file_name(core: usize) -> String {
    format!("imem{core}.txt")
}
