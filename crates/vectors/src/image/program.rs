//! Per-core instruction programs.
//!
//! A [`Program`] is the ordered instruction list for one core. It is built
//! with the fluent helpers below, encoded once, and written to that core's
//! `imem<N>.txt`.

use crate::common::Result;
use crate::isa::encode::encode_all;
use crate::isa::instruction::{Instruction, OpcodeArg};

/// Ordered instruction sequence for one simulated core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the program for an idle core: a single `halt`.
    pub fn idle() -> Self {
        Self::new().halt()
    }

    /// Appends an arbitrary instruction.
    #[must_use]
    pub fn push(mut self, inst: Instruction) -> Self {
        self.instructions.push(inst);
        self
    }

    /// Appends an instruction given its five operands.
    #[must_use]
    pub fn op(self, opcode: impl Into<OpcodeArg>, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        self.push(Instruction::new(opcode, rd, rs, rt, imm))
    }

    // --- Helpers for Common Instructions ---

    /// `add rd, rs, rt, imm`.
    #[must_use]
    pub fn add(self, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        self.op("add", rd, rs, rt, imm)
    }

    /// `mul rd, rs, rt, imm`.
    #[must_use]
    pub fn mul(self, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        self.op("mul", rd, rs, rt, imm)
    }

    /// `lw rd, rs, rt, imm` (load word).
    #[must_use]
    pub fn lw(self, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        self.op("lw", rd, rs, rt, imm)
    }

    /// `sw rd, rs, rt, imm` (store word).
    #[must_use]
    pub fn sw(self, rd: u32, rs: u32, rt: u32, imm: i32) -> Self {
        self.op("sw", rd, rs, rt, imm)
    }

    /// `halt` with all operands zero.
    #[must_use]
    pub fn halt(self) -> Self {
        self.push(Instruction::halt())
    }

    /// Returns the instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Encodes every instruction, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOpcode`](crate::common::Error::UnknownOpcode)
    /// for the first instruction whose mnemonic is not in the opcode table.
    pub fn encode(&self) -> Result<Vec<u32>> {
        encode_all(&self.instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}
