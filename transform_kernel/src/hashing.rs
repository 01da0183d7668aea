/// Transform kernel v1 — Canonical Fingerprint
///
/// Deterministic serialization of a batch of kernel results + SHA-256.
///
/// Rules:
///   - kernel_version first, then cases in fixture order
///   - per case: a, b, bits (16 lowercase hex digits)
///   - UTF-8 JSON, no whitespace, no float

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::fixtures::{format_bits, CaseResult};
use crate::KERNEL_VERSION;

/// Canonical serialization of results to UTF-8 JSON bytes.
pub fn canonical_serialize(results: &[CaseResult]) -> Vec<u8> {
    build_canonical_value(results).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(results: &[CaseResult]) -> String {
    let digest = Sha256::digest(canonical_serialize(results));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn build_canonical_value(results: &[CaseResult]) -> Value {
    let cases: Vec<Value> = results
        .iter()
        .map(|r| {
            let mut m = Map::new();
            m.insert("a".to_string(), Value::Number(r.a.into()));
            m.insert("b".to_string(), Value::Number(r.b.into()));
            m.insert("bits".to_string(), Value::String(format_bits(r.bits)));
            Value::Object(m)
        })
        .collect();

    let mut root = Map::new();
    root.insert(
        "kernel_version".to_string(),
        Value::Number(KERNEL_VERSION.into()),
    );
    root.insert("cases".to_string(), Value::Array(cases));
    Value::Object(root)
}
