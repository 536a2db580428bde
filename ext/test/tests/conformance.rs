//! Conformance tests that run YAML fixtures against sniff
//!
//! Run with: cargo test -p sniff-test --test conformance --features sniff-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use sniff_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixture directory of this crate
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run one fixture file
fn run_fixture_file(name: &str) {
    let path = fixtures_dir().join(name);
    println!("Running fixture: {}", path.display());

    let yaml = fs::read_to_string(&path).expect("read yaml");

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} has no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_resolution() {
    run_fixture_file("01_resolution.yaml");
}

#[test]
fn test_order() {
    run_fixture_file("02_order.yaml");
}

#[test]
fn test_domain() {
    run_fixture_file("03_domain.yaml");
}

#[test]
fn test_every_fixture_file_is_listed() {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["01_resolution.yaml", "02_order.yaml", "03_domain.yaml"]
    );
}
