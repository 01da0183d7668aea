//! Drift detection — determinism verification and golden comparison.
//!
//! All comparisons are on f64 bit patterns, never on tolerances.

use tracing::warn;

use crate::fixtures::{evaluate_cases, format_bits, CaseResult, FixtureError, GoldenCase};
use crate::hashing::canonical_hash;

/// Evaluate the cases `runs` times and assert every run fingerprints
/// identically. Panics on failure; returns the shared fingerprint.
pub fn verify_determinism(cases: &[GoldenCase], runs: usize) -> String {
    let first = canonical_hash(&evaluate_cases(cases));
    for run in 1..runs {
        let again = canonical_hash(&evaluate_cases(cases));
        if again != first {
            panic!(
                "DETERMINISM FAILURE: run {} produced a different fingerprint.\n\
                 Run 0: {}\n\
                 Run {}: {}",
                run, first, run, again
            );
        }
    }
    first
}

/// Compare kernel results against the golden expectations, case by case.
///
/// `results` must be in the same order as `cases`.
pub fn compare(cases: &[GoldenCase], results: &[CaseResult]) -> Result<DriftReport, FixtureError> {
    assert_eq!(
        cases.len(),
        results.len(),
        "compare: {} cases but {} results",
        cases.len(),
        results.len()
    );

    let mut mismatches = Vec::new();
    for (case, result) in cases.iter().zip(results) {
        let expected = case.expected_value()?;
        if expected.to_bits() != result.bits {
            warn!(
                a = case.a,
                b = case.b,
                expected = %case.expected_bits,
                actual = %format_bits(result.bits),
                "kernel output drifted from golden value"
            );
            mismatches.push(CaseDrift {
                a: case.a,
                b: case.b,
                expected_bits: expected.to_bits(),
                actual_bits: result.bits,
                expected_value: expected,
                actual_value: result.value(),
            });
        }
    }

    Ok(DriftReport {
        total: cases.len(),
        matched: cases.len() - mismatches.len(),
        mismatches,
    })
}

/// One case whose output differs from its golden value.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDrift {
    pub a: i32,
    pub b: i32,
    pub expected_bits: u64,
    pub actual_bits: u64,
    pub expected_value: f64,
    pub actual_value: f64,
}

/// Outcome of comparing a batch against its golden values.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftReport {
    pub total: usize,
    pub matched: usize,
    pub mismatches: Vec<CaseDrift>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}
