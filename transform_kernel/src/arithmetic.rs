/// Transform kernel v1 — Arithmetic Primitives
///
/// Every step the kernel takes, with the reference build's numeric
/// conventions spelled out:
///   - products formed in i64 (no i32 overflow for any input)
///   - single-precision accumulator, each sum rounded from f64
///   - truncation toward zero, remainder follows the dividend's sign

/// Iterations of each loop (outer `n`, inner `m`).
pub const ITERATIONS: i64 = 1000;

/// Every product is divided by ten million.
pub const DIVISOR: f64 = 10e6;

/// Modulus applied to the truncated accumulator.
pub const MODULUS: i64 = 1000;

/// `(a + m) * (b + n)` in 64-bit integer arithmetic.
///
/// Both factors stay within `i32 ± ITERATIONS`, so the product is bounded
/// by roughly `2^62` and never wraps.
pub fn widened_product(a: i32, b: i32, m: i64, n: i64) -> i64 {
    (i64::from(a) + m) * (i64::from(b) + n)
}

/// One accumulation step: `x + term` in f64, rounded back to f32.
pub fn accumulate_step(x: f32, term: f64) -> f32 {
    (f64::from(x) + term) as f32
}

/// Drop the fractional part. Saturates on non-finite input.
pub fn truncate_toward_zero(x: f32) -> i64 {
    x as i64
}

/// Integer remainder modulo `MODULUS`; the result carries the sign of `xx`.
pub fn signed_remainder(xx: i64) -> i64 {
    xx % MODULUS
}
