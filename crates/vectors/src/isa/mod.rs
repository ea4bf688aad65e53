//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the instruction word layout, the encoder, and a
//! diagnostic disassembler for the simulator's fixed 32-bit format.

/// Instruction disassembler for debug tracing and image dumps.
pub mod disasm;

/// Instruction encoder (symbolic instruction to 32-bit word).
pub mod encode;

/// Instruction representation and bit extraction utilities.
pub mod instruction;

/// Opcode table (mnemonic to 8-bit code).
pub mod opcodes;

pub use encode::encode;
pub use instruction::{Instruction, InstructionFields, OpcodeArg};
