//! Error definitions.
//!
//! A single error type covers every way a generation run can fail. It provides:
//! 1. **Encoding errors:** Mnemonics missing from the opcode table.
//! 2. **Lookup errors:** Scenario names missing from the registry.
//! 3. **I/O errors:** Filesystem failures, tagged with the path involved.
//! 4. **Format errors:** Image lines and config files that do not parse.
//!
//! Field overflow is never an error: the encoder truncates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while encoding instructions or writing scenario artifacts.
#[derive(Debug, Error)]
pub enum Error {
    /// The mnemonic is not present in the opcode table.
    #[error("unknown opcode mnemonic '{0}'")]
    UnknownOpcode(String),

    /// No scenario is registered under this name.
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    /// A filesystem operation failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path of the file or directory being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A line of an image file is not an 8-digit hex word.
    #[error("malformed word at {}:{line}: '{content}'", path.display())]
    MalformedWord {
        /// Image file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending line content.
        content: String,
    },

    /// A configuration file could not be parsed.
    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
