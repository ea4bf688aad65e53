//! Scenario generation.
//!
//! A scenario is a named test case: one program per core plus the initial
//! data memory. Generating it writes, into one directory:
//! 1. **Instruction images:** `imem0.txt` .. `imem<N-1>.txt`, one per core.
//! 2. **Data image:** `memin.txt`.
//!
//! Everything is encoded in memory before the directory is touched, so an
//! unknown opcode never leaves a half-written scenario behind. Filesystem
//! errors abort the run and leave whatever was already written in place.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::common::{Error, MEMORY_IMAGE_FILE, NUM_CORES, Result, imem_file_name};
use crate::config::Config;
use crate::image::{MemoryImage, Program, write_words};

/// The reference scenario.
pub mod mulserial;

/// Constructor for a registered scenario, given the core count.
type Builder = fn(usize) -> Scenario;

/// Registered scenarios, by name.
static REGISTRY: [(&str, Builder); 1] = [(mulserial::NAME, mulserial::build)];

/// A named test case: one program per core and one data-memory image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    programs: Vec<Program>,
    memory: MemoryImage,
}

impl Scenario {
    /// Creates a scenario. `programs[i]` runs on core `i`.
    pub fn new(name: impl Into<String>, programs: Vec<Program>, memory: MemoryImage) -> Self {
        Self {
            name: name.into(),
            programs,
            memory,
        }
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-core programs, indexed by core.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Initial data memory.
    pub fn memory(&self) -> &MemoryImage {
        &self.memory
    }

    /// Number of cores, i.e. instruction images written.
    pub fn core_count(&self) -> usize {
        self.programs.len()
    }

    /// Writes every artifact of the scenario into `dir`, creating it if needed.
    ///
    /// Existing files with the same names are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOpcode`] before any file is written if a program
    /// uses an unknown mnemonic, or [`Error::Io`] if the directory or a file
    /// cannot be written.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<GenerationReport> {
        let dir = dir.as_ref();

        let images = self
            .programs
            .iter()
            .map(Program::encode)
            .collect::<Result<Vec<_>>>()?;

        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

        let mut files = Vec::with_capacity(images.len() + 1);
        for (core, words) in images.iter().enumerate() {
            let path = dir.join(imem_file_name(core));
            write_words(&path, words)?;
            files.push(WrittenFile {
                path,
                words: words.len(),
            });
        }

        let path = dir.join(MEMORY_IMAGE_FILE);
        write_words(&path, self.memory.words())?;
        files.push(WrittenFile {
            path,
            words: self.memory.len(),
        });

        tracing::info!(
            scenario = %self.name,
            dir = %dir.display(),
            cores = self.core_count(),
            "scenario written"
        );

        Ok(GenerationReport {
            scenario: self.name.clone(),
            dir: dir.to_path_buf(),
            files,
        })
    }
}

/// One file written during generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Number of words (lines) written.
    pub words: usize,
}

/// Summary of a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Name of the generated scenario.
    pub scenario: String,
    /// Directory the files were written to.
    pub dir: PathBuf,
    /// Files written, instruction images first, then the data image.
    pub files: Vec<WrittenFile>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated {} in {}", self.scenario, self.dir.display())
    }
}

/// Names of all registered scenarios.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|&(name, _)| name)
}

/// Builds a registered scenario for `core_count` cores.
///
/// # Errors
///
/// Returns [`Error::UnknownScenario`] if no scenario has this name, or
/// [`Error::InvalidConfig`] if `core_count` is zero.
pub fn build(name: &str, core_count: usize) -> Result<Scenario> {
    let &(_, builder) = REGISTRY
        .iter()
        .find(|&&(n, _)| n == name)
        .ok_or_else(|| Error::UnknownScenario(name.to_owned()))?;
    if core_count == 0 {
        return Err(Error::InvalidConfig("core_count must be at least 1".into()));
    }
    Ok(builder(core_count))
}

/// Generates a registered scenario into `output_dir` and prints a confirmation
/// on stdout.
///
/// # Errors
///
/// Same as [`generate_scenario_to`].
pub fn generate_scenario(
    name: &str,
    output_dir: impl AsRef<Path>,
    core_count: usize,
) -> Result<GenerationReport> {
    generate_scenario_to(name, output_dir, core_count, &mut io::stdout().lock())
}

/// Generates a registered scenario into `output_dir` and writes the
/// `Generated <name> in <dir>` confirmation line to `out`.
///
/// # Errors
///
/// Returns [`Error::UnknownScenario`] for an unregistered name,
/// [`Error::InvalidConfig`] for a zero core count, any error from
/// [`Scenario::write`], or [`Error::Io`] if the confirmation cannot be written.
pub fn generate_scenario_to(
    name: &str,
    output_dir: impl AsRef<Path>,
    core_count: usize,
    out: &mut impl Write,
) -> Result<GenerationReport> {
    let report = build(name, core_count)?.write(output_dir)?;
    writeln!(out, "{report}").map_err(|e| Error::io("<output>", e))?;
    Ok(report)
}

/// Generates the reference scenario (`mulserial`, four cores) into `output_dir`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or a file cannot be written.
pub fn generate(output_dir: impl AsRef<Path>) -> Result<GenerationReport> {
    generate_scenario(mulserial::NAME, output_dir, NUM_CORES)
}

/// Generates the scenario named by `config` into [`Config::scenario_dir`].
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the configuration does not validate,
/// and otherwise any error from [`generate_scenario`].
pub fn generate_from_config(config: &Config) -> Result<GenerationReport> {
    config.validate()?;
    generate_scenario(&config.scenario, config.scenario_dir(), config.core_count)
}
