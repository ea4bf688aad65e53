//! Test-vector generator CLI.
//!
//! This binary is the entry point for generating and inspecting simulator inputs. It performs:
//! 1. **Generate:** Write a named scenario's `imem<N>.txt` and `memin.txt` files (default command).
//! 2. **List:** Print the registered scenario names.
//! 3. **Encode:** Encode one instruction and print its word.
//! 4. **Dump:** Read an image file and print each word with its disassembly.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mesivec_core::config::Config;
use mesivec_core::image::read_words;
use mesivec_core::isa::OpcodeArg;
use mesivec_core::isa::disasm::disassemble;
use mesivec_core::{Result, encode, scenario};

#[derive(Parser, Debug)]
#[command(
    name = "mesivec",
    author,
    version,
    about = "Test-vector generator for the multi-core MESI simulator",
    long_about = "Generate per-core instruction images and the initial memory image for a named scenario.\n\nWith no subcommand, generates the default scenario (mulserial) into tests/mulserial.\n\nExamples:\n  mesivec\n  mesivec generate mulserial -o out/mulserial\n  mesivec encode lw 2 0 0 0\n  mesivec dump tests/mulserial/imem0.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Generate a scenario's image files.
    Generate {
        /// Scenario name (defaults to the configured scenario, `mulserial`).
        scenario: Option<String>,

        /// Output directory (defaults to the configured `output_dir`, else `<output_root>/<scenario>`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of cores; one instruction image is written per core.
        #[arg(long)]
        cores: Option<usize>,

        /// JSON configuration file; command-line flags take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List registered scenarios.
    List,

    /// Encode one instruction and print the word as 8 hex digits.
    Encode {
        /// Mnemonic (e.g. `lw`) or integer code (`21`, `0x15`).
        opcode: String,
        /// Destination register.
        rd: u32,
        /// First source register.
        rs: u32,
        /// Second source register.
        rt: u32,
        /// Signed immediate.
        #[arg(allow_negative_numbers = true)]
        imm: i32,
    },

    /// Print the words of an image file with their disassembly.
    Dump {
        /// Image file (`imem<N>.txt` or `memin.txt`).
        file: PathBuf,

        /// Print words only, without disassembly (for data images).
        #[arg(long)]
        raw: bool,
    },
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the global tracing subscriber.
///
/// The default level is `WARN`; override it with `RUST_LOG`.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches a subcommand; no subcommand means `generate` with defaults.
fn run(command: Option<Commands>) -> Result<()> {
    match command.unwrap_or(Commands::Generate {
        scenario: None,
        output: None,
        cores: None,
        config: None,
    }) {
        Commands::Generate {
            scenario,
            output,
            cores,
            config,
        } => cmd_generate(scenario, output, cores, config),
        Commands::List => {
            for name in scenario::names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Encode {
            opcode,
            rd,
            rs,
            rt,
            imm,
        } => {
            let word = encode(parse_opcode(&opcode), rd, rs, rt, imm)?;
            println!("{word:08X}");
            Ok(())
        }
        Commands::Dump { file, raw } => cmd_dump(&file, raw),
    }
}

/// Resolves configuration from file and flags, then writes the scenario.
fn cmd_generate(
    scenario: Option<String>,
    output: Option<PathBuf>,
    cores: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(name) = scenario {
        config.scenario = name;
    }
    if let Some(n) = cores {
        config.core_count = n;
    }
    if output.is_some() {
        config.output_dir = output;
    }
    tracing::debug!(?config, "resolved configuration");

    let report = scenario::generate_from_config(&config)?;
    for file in &report.files {
        tracing::info!(path = %file.path.display(), words = file.words, "written");
    }
    Ok(())
}

/// Prints `address: word  disassembly` for every word in `file`.
fn cmd_dump(file: &std::path::Path, raw: bool) -> Result<()> {
    for (addr, word) in read_words(file)?.into_iter().enumerate() {
        if raw {
            println!("{addr:4}: {word:08X}");
        } else {
            println!("{addr:4}: {word:08X}  {}", disassemble(word));
        }
    }
    Ok(())
}

/// Interprets a command-line opcode as an integer code if it parses as one
/// (decimal or `0x` hex), otherwise as a mnemonic.
fn parse_opcode(text: &str) -> OpcodeArg {
    let code = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .map_or_else(|| text.parse::<u32>(), |hex| u32::from_str_radix(hex, 16));
    code.map_or_else(|_| OpcodeArg::from(text), OpcodeArg::Raw)
}
