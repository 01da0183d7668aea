//! Integration tests for fixture loading and drift reporting.
//!
//! All tests use temporary directories for isolation.

use std::fs;
use std::path::PathBuf;

use transform_kernel::drift::{compare, verify_determinism};
use transform_kernel::fixtures::{evaluate_cases, format_bits, load_cases, FixtureError};

/// Create a temp directory for a test.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("transform_kernel_tests")
        .join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = temp_dir(name).join("cases.json");
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn load_missing_file_is_io_error() {
    let path = temp_dir("missing").join("absent.json");
    match load_cases(&path) {
        Err(FixtureError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn load_malformed_json_is_json_error() {
    let path = write_fixture("malformed", "[{\"a\": 1, \"b\": }]");
    assert!(matches!(load_cases(&path), Err(FixtureError::Json { .. })));
}

#[test]
fn load_rejects_bad_bit_pattern() {
    let path = write_fixture(
        "bad_bits",
        r#"[{"a": 0, "b": 0, "expected_bits": "408dc121fb54442"}]"#,
    );
    match load_cases(&path) {
        Err(FixtureError::BadBits { a, b, bits }) => {
            assert_eq!((a, b), (0, 0));
            assert_eq!(bits, "408dc121fb54442");
        }
        other => panic!("expected BadBits error, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_file() {
    let path = write_fixture("message", "not json");
    let err = load_cases(&path).unwrap_err();
    assert!(err.to_string().contains("cases.json"), "{}", err);
}

#[test]
fn tampered_fixture_is_reported_as_drift() {
    let path = write_fixture(
        "tampered",
        r#"[
            {"a": 0, "b": 0, "expected_bits": "408dc121fb54442d"},
            {"a": 1, "b": 1, "expected_bits": "408dc121fb54442d"}
        ]"#,
    );
    let cases = load_cases(&path).expect("fixture is well formed");
    let results = evaluate_cases(&cases);
    let report = compare(&cases, &results).expect("bits are well formed");

    assert_eq!(report.total, 2);
    assert_eq!(report.matched, 1);
    assert_eq!(report.mismatches.len(), 1);
    let d = &report.mismatches[0];
    assert_eq!((d.a, d.b), (1, 1));
    assert_eq!(format_bits(d.actual_bits), "404a121fb54442d2");
    assert_eq!(format_bits(d.expected_bits), "408dc121fb54442d");
}

#[test]
fn determinism_check_over_loaded_fixture() {
    let path = write_fixture(
        "determinism",
        r#"[{"a": -1000, "b": 0, "expected_bits": "c08f1ede04abbbd3"}]"#,
    );
    let cases = load_cases(&path).expect("fixture is well formed");
    let h = verify_determinism(&cases, 2);
    assert_eq!(h.len(), 64);
    assert!(compare(&cases, &evaluate_cases(&cases)).unwrap().is_clean());
}
