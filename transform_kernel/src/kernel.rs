/// Transform kernel v1 — Evaluation
///
/// Pure functions only. No I/O, no shared state, no allocation.
/// Loop order is outer `n`, inner `m`; the f32 accumulator makes the
/// result depend on that order, so it must not be reshaped.

use std::f64::consts::PI;

use crate::arithmetic::{
    accumulate_step, signed_remainder, truncate_toward_zero, widened_product, DIVISOR,
    ITERATIONS,
};

/// Intermediate values of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTrace {
    pub a: i32,
    pub b: i32,
    /// Accumulator after all 1_000_000 steps.
    pub accumulator: f32,
    /// Accumulator truncated toward zero.
    pub truncated: i64,
    /// `truncated % 1000`, sign-following.
    pub remainder: i64,
    /// `remainder + π`
    pub value: f64,
}

/// Run the double loop and return the raw accumulator.
pub fn accumulate(a: i32, b: i32) -> f32 {
    let mut x = 0.0_f32;
    for n in 0..ITERATIONS {
        for m in 0..ITERATIONS {
            let term = widened_product(a, b, m, n) as f64 / DIVISOR;
            x = accumulate_step(x, term);
        }
    }
    x
}

/// Evaluate the kernel and keep every intermediate value.
pub fn trace(a: i32, b: i32) -> KernelTrace {
    let accumulator = accumulate(a, b);
    let truncated = truncate_toward_zero(accumulator);
    let remainder = signed_remainder(truncated);
    KernelTrace {
        a,
        b,
        accumulator,
        truncated,
        remainder,
        value: remainder as f64 + PI,
    }
}

/// `transform(a, b)` as a plain Rust function.
pub fn evaluate(a: i32, b: i32) -> f64 {
    trace(a, b).value
}
