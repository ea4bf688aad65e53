//! Instruction representation and field extraction.
//!
//! Provides the symbolic [`Instruction`] consumed by the encoder, the
//! [`OpcodeArg`] variant that accepts either a mnemonic or a raw code, and
//! bit extraction for 32-bit instruction words.
//!
//! # Word layout
//!
//! ```text
//!  31      24 23  20 19  16 15  12 11          0
//! +----------+------+------+------+-------------+
//! |  opcode  |  rd  |  rs  |  rt  |     imm     |
//! +----------+------+------+------+-------------+
//! ```

use std::fmt;

use crate::common::constants::{
    IMM_BITS, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
};
use crate::common::{Error, Result};
use crate::isa::{encode, opcodes};

/// Total width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Trait for extracting instruction fields from encoded instruction words.
///
/// This mirrors what the simulator does on decode, so it is the reference for
/// checking that an encoded word carries the intended operands.
pub trait InstructionFields {
    /// Extracts the opcode field (bits 31-24).
    fn opcode(&self) -> u8;

    /// Extracts the destination register field (bits 23-20).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 19-16).
    fn rs(&self) -> usize;

    /// Extracts the second source register field (bits 15-12).
    fn rt(&self) -> usize;

    /// Extracts the raw 12-bit immediate field (bits 11-0) without sign extension.
    fn imm_bits(&self) -> u32;

    /// Extracts the immediate field sign-extended from bit 11.
    ///
    /// # Returns
    ///
    /// A value in `-2048..=2047`.
    fn imm(&self) -> i32;
}

impl InstructionFields for u32 {
    #[inline]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn imm_bits(&self) -> u32 {
        self & IMM_MASK
    }

    /// Shifts the 12-bit field to the top of the word and arithmetic-shifts it
    /// back down, replicating bit 11 into the upper bits.
    #[inline]
    fn imm(&self) -> i32 {
        let shift = INSTRUCTION_WIDTH - IMM_BITS;
        ((self.imm_bits() << shift) as i32) >> shift
    }
}

/// Opcode operand: a mnemonic resolved through the opcode table, or a raw code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpcodeArg {
    /// Symbolic mnemonic such as `"lw"`.
    Named(String),
    /// Integer code; only the low 8 bits reach the word.
    Raw(u32),
}

impl OpcodeArg {
    /// Normalizes the operand to an integer code.
    ///
    /// Raw codes are returned unmasked; masking happens during packing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOpcode`] if a mnemonic is not in the opcode table.
    pub fn resolve(&self) -> Result<u32> {
        match self {
            Self::Named(name) => opcodes::lookup(name)
                .map(u32::from)
                .ok_or_else(|| Error::UnknownOpcode(name.clone())),
            Self::Raw(code) => Ok(*code),
        }
    }
}

impl From<&str> for OpcodeArg {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for OpcodeArg {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<u8> for OpcodeArg {
    fn from(code: u8) -> Self {
        Self::Raw(u32::from(code))
    }
}

impl From<u32> for OpcodeArg {
    fn from(code: u32) -> Self {
        Self::Raw(code)
    }
}

impl fmt::Display for OpcodeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Raw(code) => write!(f, "{code:#04x}"),
        }
    }
}

/// A symbolic instruction prior to encoding.
///
/// Register and immediate values are stored as given; out-of-range values are
/// truncated when the instruction is encoded, never here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Operation, by name or code.
    pub opcode: OpcodeArg,
    /// Destination register index.
    pub rd: u32,
    /// First source register index.
    pub rs: u32,
    /// Second source register index.
    pub rt: u32,
    /// Signed immediate.
    pub imm: i32,
}

impl Instruction {
    /// Creates an instruction from its five operands.
    pub fn new(opcode: impl Into<OpcodeArg>, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        Self {
            opcode: opcode.into(),
            rd,
            rs,
            rt,
            imm,
        }
    }

    /// Creates the `halt` instruction with all operand fields zero.
    pub fn halt() -> Self {
        Self::new("halt", 0, 0, 0, 0)
    }

    /// Encodes this instruction into its 32-bit word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOpcode`] if the opcode mnemonic is not recognized.
    pub fn encode(&self) -> Result<u32> {
        let code = self.opcode.resolve()?;
        Ok(encode::pack(code, self.rd, self.rs, self.rt, self.imm))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} r{}, r{}, r{}, {}",
            self.opcode, self.rd, self.rs, self.rt, self.imm
        )
    }
}
