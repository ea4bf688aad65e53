//! Memory images.
//!
//! This module holds the in-memory artifacts of a scenario and their on-disk
//! format:
//! 1. **Programs:** Per-core instruction sequences, encoded on write.
//! 2. **Memory Image:** Initial data words, indexed by word address.
//! 3. **I/O:** The shared hex-word text format used by both.

/// Image file reading and writing.
pub mod io;

/// Data-memory image.
pub mod memory;

/// Per-core programs.
pub mod program;

pub use io::{read_words, write_words};
pub use memory::MemoryImage;
pub use program::Program;
