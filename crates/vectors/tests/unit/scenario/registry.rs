//! # Scenario Registry Tests

use mesivec_core::config::Config;
use mesivec_core::image::{MemoryImage, Program};
use mesivec_core::scenario::{self, Scenario, generate_from_config, generate_scenario_to};
use mesivec_core::{Error, generate_scenario};

use crate::common::{read_lines, scratch_dir};

#[test]
fn test_names_lists_mulserial() {
    let names: Vec<&str> = scenario::names().collect();
    assert_eq!(names, ["mulserial"]);
}

#[test]
fn test_unknown_scenario() {
    assert!(matches!(
        scenario::build("matmul", 4),
        Err(Error::UnknownScenario(ref n)) if n == "matmul"
    ));
}

#[test]
fn test_zero_cores_is_rejected() {
    assert!(matches!(
        scenario::build("mulserial", 0),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_zero_cores_writes_nothing() {
    let root = scratch_dir();
    let dir = root.path().join("z");
    assert!(matches!(
        generate_scenario("mulserial", &dir, 0),
        Err(Error::InvalidConfig(_))
    ));
    assert!(!dir.exists());
}

#[test]
fn test_unknown_scenario_writes_nothing() {
    let root = scratch_dir();
    let dir = root.path().join("matmul");
    assert!(generate_scenario("matmul", &dir, 4).is_err());
    assert!(!dir.exists());
}

#[test]
fn test_unknown_opcode_writes_nothing() {
    let root = scratch_dir();
    let dir = root.path().join("bad");
    let scenario = Scenario::new(
        "bad",
        vec![Program::new().op("frob", 0, 0, 0, 0), Program::idle()],
        MemoryImage::new(),
    );

    assert!(matches!(scenario.write(&dir), Err(Error::UnknownOpcode(_))));
    assert!(!dir.exists());
}

#[test]
fn test_custom_scenario_write() {
    let root = scratch_dir();
    let dir = root.path().join("custom");
    let scenario = Scenario::new(
        "custom",
        vec![Program::new().add(1, 0, 0, -1).halt(), Program::idle()],
        MemoryImage::from_words(vec![0xCAFE_F00D]),
    );

    let report = scenario.write(&dir).unwrap();
    assert_eq!(report.files.len(), 3);
    assert_eq!(read_lines(dir.join("imem0.txt")), ["00100FFF", "15000000"]);
    assert_eq!(read_lines(dir.join("imem1.txt")), ["15000000"]);
    assert_eq!(read_lines(dir.join("memin.txt")), ["CAFEF00D"]);
}

#[test]
fn test_empty_memory_image_writes_empty_file() {
    let root = scratch_dir();
    let dir = root.path().join("nomem");
    let scenario = Scenario::new("nomem", vec![Program::idle()], MemoryImage::new());

    let _ = scenario.write(&dir).unwrap();
    assert!(read_lines(dir.join("memin.txt")).is_empty());
}

#[test]
fn test_generate_from_config() {
    let root = scratch_dir();
    let config = Config {
        core_count: 2,
        output_root: root.path().to_path_buf(),
        ..Config::default()
    };

    let report = generate_from_config(&config).unwrap();
    assert_eq!(report.dir, root.path().join("mulserial"));
    assert_eq!(report.files.len(), 3);
}

#[test]
fn test_generate_from_config_validates() {
    let root = scratch_dir();
    let config = Config {
        core_count: 0,
        output_root: root.path().to_path_buf(),
        ..Config::default()
    };
    assert!(matches!(
        generate_from_config(&config),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_generate_from_config_output_dir_overrides_root() {
    let root = scratch_dir();
    let dir = root.path().join("exact");
    let config = Config {
        core_count: 1,
        output_root: root.path().join("unused"),
        output_dir: Some(dir.clone()),
        ..Config::default()
    };

    let report = generate_from_config(&config).unwrap();
    assert_eq!(report.dir, dir);
    assert!(dir.join("imem0.txt").is_file());
    assert!(!root.path().join("unused").exists());
}

#[test]
fn test_generation_prints_confirmation() {
    let root = scratch_dir();
    let dir = root.path().join("mulserial");
    let mut out = Vec::new();

    let _ = generate_scenario_to("mulserial", &dir, 4, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Generated mulserial in {}\n", dir.display())
    );
}

#[test]
fn test_failed_generation_prints_nothing() {
    let root = scratch_dir();
    let mut out = Vec::new();

    assert!(generate_scenario_to("matmul", root.path(), 4, &mut out).is_err());
    assert!(out.is_empty());
}
