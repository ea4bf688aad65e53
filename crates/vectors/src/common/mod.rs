//! Common types and constants used throughout the generator.
//!
//! This module provides the building blocks shared by the encoder and the scenario writer:
//! 1. **Constants:** Instruction field layout, image file naming, and core count.
//! 2. **Error Handling:** The crate error type and its `Result` alias.

/// Instruction layout and image naming constants.
pub mod constants;

/// Error type for encoding and generation.
pub mod error;

pub use constants::{MEMORY_IMAGE_FILE, NUM_CORES, imem_file_name};
pub use error::{Error, Result};
