//! # Error Tests
//!
//! Display formatting and source chaining for the crate error type.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use mesivec_core::Error;

#[test]
fn test_unknown_opcode_display() {
    let err = Error::UnknownOpcode("frob".into());
    assert_eq!(err.to_string(), "unknown opcode mnemonic 'frob'");
}

#[test]
fn test_unknown_scenario_display() {
    let err = Error::UnknownScenario("nope".into());
    assert_eq!(err.to_string(), "unknown scenario 'nope'");
}

#[test]
fn test_io_error_names_path_and_keeps_source() {
    let err = Error::io(
        "out/imem0.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    let text = err.to_string();
    assert!(text.contains("out/imem0.txt"), "got '{text}'");
    assert!(text.contains("denied"), "got '{text}'");
    assert!(err.source().is_some());
}

#[test]
fn test_malformed_word_display() {
    let err = Error::MalformedWord {
        path: PathBuf::from("memin.txt"),
        line: 3,
        content: "xyz".into(),
    };
    assert_eq!(err.to_string(), "malformed word at memin.txt:3: 'xyz'");
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("core_count must be at least 1".into());
    assert!(err.to_string().contains("core_count"));
}
