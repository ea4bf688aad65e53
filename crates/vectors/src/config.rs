//! Configuration for the generator.
//!
//! This module defines the settings that parameterize a generation run. It provides:
//! 1. **Defaults:** Core count, output location, and scenario of the reference setup.
//! 2. **Loading:** JSON deserialization with every field optional.
//! 3. **Validation:** Range checks applied before anything is written.
//!
//! Use `Config::default()` for the reference setup, or load a JSON file whose
//! fields override the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{Error, Result};

/// Default configuration constants for the generator.
mod defaults {
    use crate::common::constants::NUM_CORES;

    /// Number of cores, one `imem<N>.txt` each.
    pub const CORE_COUNT: usize = NUM_CORES;

    /// Directory under which scenario directories are created.
    pub const OUTPUT_ROOT: &str = "tests";

    /// Scenario generated when none is named.
    pub const SCENARIO: &str = "mulserial";
}

/// Generator configuration.
///
/// # Examples
///
/// ```
/// use mesivec_core::config::Config;
///
/// let json = r#"{ "core_count": 2 }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.core_count, 2);
/// assert_eq!(config.scenario, "mulserial");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of simulated cores; one instruction image is written per core.
    #[serde(default = "Config::default_core_count")]
    pub core_count: usize,

    /// Directory under which `<scenario>/` is created.
    #[serde(default = "Config::default_output_root")]
    pub output_root: PathBuf,

    /// Name of the scenario to generate.
    #[serde(default = "Config::default_scenario")]
    pub scenario: String,

    /// Exact output directory; replaces `<output_root>/<scenario>` when set.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    fn default_core_count() -> usize {
        defaults::CORE_COUNT
    }

    fn default_output_root() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_ROOT)
    }

    fn default_scenario() -> String {
        defaults::SCENARIO.to_owned()
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Config {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Config`] if
    /// it does not parse, or [`Error::InvalidConfig`] if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `core_count` is zero or the
    /// scenario name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.core_count == 0 {
            return Err(Error::InvalidConfig("core_count must be at least 1".into()));
        }
        if self.scenario.is_empty() {
            return Err(Error::InvalidConfig("scenario must not be empty".into()));
        }
        Ok(())
    }

    /// Directory the configured scenario is written to: `output_dir` if set,
    /// otherwise `<output_root>/<scenario>`.
    pub fn scenario_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.output_root.join(&self.scenario))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core_count: defaults::CORE_COUNT,
            output_root: PathBuf::from(defaults::OUTPUT_ROOT),
            scenario: defaults::SCENARIO.to_owned(),
            output_dir: None,
        }
    }
}
