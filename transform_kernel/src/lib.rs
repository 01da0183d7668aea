#![deny(unsafe_code)]

/// Kernel v1 — Immutable. Behavioral changes require kernel_v2.
pub const KERNEL_VERSION: u32 = 1;

pub mod arithmetic;
pub mod kernel;
pub mod ffi;
pub mod fixtures;
pub mod hashing;
pub mod drift;

pub use ffi::transform;
