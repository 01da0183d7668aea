/// Transform kernel v1 — Golden Replay Harness
///
/// Loads golden cases recorded from the reference build, evaluates
/// them through the Rust kernel, checks determinism, and compares
/// bit patterns (and optionally the batch fingerprint).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transform_kernel::drift::{compare, verify_determinism};
use transform_kernel::fixtures::{evaluate_cases, format_bits, load_cases, FixtureError};
use transform_kernel::kernel;
use transform_kernel::KERNEL_VERSION;

#[derive(Debug, Parser)]
#[command(name = "transform_harness", about = "Replay golden cases through the transform kernel")]
struct Args {
    /// Fixture file (JSON array of {a, b, expected_bits}).
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// File holding the expected SHA-256 fingerprint of the batch.
    #[arg(long)]
    expected_hash: Option<PathBuf>,

    /// Evaluations of the whole batch for the determinism check.
    #[arg(long, default_value_t = 2)]
    runs: usize,
}

const FIXTURE_CANDIDATES: [&str; 3] = [
    "tests/golden/cases.json",
    "transform_kernel/tests/golden/cases.json",
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/golden/cases.json"),
];

fn find_fixtures() -> Option<PathBuf> {
    FIXTURE_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool, FixtureError> {
    let Some(path) = args.fixtures.clone().or_else(find_fixtures) else {
        error!("no fixture file given and none found at the default locations");
        return Ok(false);
    };
    info!(path = %path.display(), kernel_version = KERNEL_VERSION, "replaying golden cases");

    let cases = load_cases(&path)?;
    let fingerprint = verify_determinism(&cases, args.runs.max(1));
    let results = evaluate_cases(&cases);
    let report = compare(&cases, &results)?;

    for result in &results {
        let t = kernel::trace(result.a, result.b);
        match report
            .mismatches
            .iter()
            .find(|d| d.a == result.a && d.b == result.b)
        {
            None => println!(
                "[PASS] a={}, b={}: value={} bits={} (acc={}, xx={}, r={})",
                result.a,
                result.b,
                result.value(),
                format_bits(result.bits),
                t.accumulator,
                t.truncated,
                t.remainder
            ),
            Some(d) => println!(
                "[FAIL] a={}, b={}: rust={} ({}) expected={} ({})",
                d.a,
                d.b,
                d.actual_value,
                format_bits(d.actual_bits),
                d.expected_value,
                format_bits(d.expected_bits)
            ),
        }
    }

    let mut all_passed = report.is_clean();

    if let Some(hash_path) = &args.expected_hash {
        let expected = fs::read_to_string(hash_path).map_err(|source| FixtureError::Io {
            path: hash_path.clone(),
            source,
        })?;
        let expected = expected.trim();
        if fingerprint == expected {
            println!("[PASS] fingerprint={}", fingerprint);
        } else {
            println!("[FAIL] fingerprint: rust={} expected={}", fingerprint, expected);
            all_passed = false;
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", report.matched, report.total);
    if all_passed {
        println!("[OK] All golden checks PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
    }
    Ok(all_passed)
}
