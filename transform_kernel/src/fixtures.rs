/// Transform kernel v1 — Golden Fixtures
///
/// A fixture file is a JSON array of `{a, b, expected_bits}` records.
/// `expected_bits` is the IEEE-754 bit pattern of the expected f64,
/// as 16 lowercase hex digits, so comparisons are exact.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::kernel;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("case ({a}, {b}): malformed bit pattern {bits:?}, expected 16 hex digits")]
    BadBits { a: i32, b: i32, bits: String },
}

/// One recorded input pair and the reference build's output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoldenCase {
    pub a: i32,
    pub b: i32,
    pub expected_bits: String,
}

impl GoldenCase {
    /// Decode `expected_bits` into the f64 it encodes.
    pub fn expected_value(&self) -> Result<f64, FixtureError> {
        parse_bits(&self.expected_bits)
            .map(f64::from_bits)
            .ok_or_else(|| FixtureError::BadBits {
                a: self.a,
                b: self.b,
                bits: self.expected_bits.clone(),
            })
    }
}

/// Kernel output for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    pub a: i32,
    pub b: i32,
    pub bits: u64,
}

impl CaseResult {
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits)
    }
}

/// Lowercase, zero-padded hex of an f64 bit pattern.
pub fn format_bits(bits: u64) -> String {
    format!("{:016x}", bits)
}

fn parse_bits(s: &str) -> Option<u64> {
    if s.len() != 16 || !s.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(s, 16).ok()
}

/// Read and validate a fixture file.
pub fn load_cases(path: &Path) -> Result<Vec<GoldenCase>, FixtureError> {
    let data = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases: Vec<GoldenCase> =
        serde_json::from_str(&data).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    for case in &cases {
        case.expected_value()?;
    }
    debug!(path = %path.display(), cases = cases.len(), "loaded golden cases");
    Ok(cases)
}

/// Evaluate every case through the kernel, in fixture order.
pub fn evaluate_cases(cases: &[GoldenCase]) -> Vec<CaseResult> {
    cases
        .iter()
        .map(|c| CaseResult {
            a: c.a,
            b: c.b,
            bits: kernel::evaluate(c.a, c.b).to_bits(),
        })
        .collect()
}
