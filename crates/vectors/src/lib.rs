//! Test-vector generator for a multi-core processor simulator.
//!
//! This crate produces the input files the simulator harness loads for one
//! test scenario:
//! 1. **ISA:** Opcode table and the fixed 32-bit instruction encoder.
//! 2. **Images:** Per-core programs, the data-memory image, and their hex-word file format.
//! 3. **Scenarios:** Named test cases and the generator that writes them to disk.
//! 4. **Configuration:** Core count, output location, and scenario selection.
//!
//! ```no_run
//! // Writes imem0.txt..imem3.txt and memin.txt.
//! mesivec_core::generate("tests/mulserial")?;
//! # Ok::<(), mesivec_core::Error>(())
//! ```

/// Common types and constants (field layout, file names, errors).
pub mod common;
/// Generator configuration (defaults, JSON loading, validation).
pub mod config;
/// Image representation and the hex-word file format.
pub mod image;
/// Instruction set (opcode table, encoding, disassembly).
pub mod isa;
/// Scenario registry and generation.
pub mod scenario;

/// Crate error type and result alias.
pub use crate::common::{Error, Result};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Instruction encoder entry point.
pub use crate::isa::encode::encode;
/// Reference-scenario entry point and the general form.
pub use crate::scenario::{generate, generate_scenario};
