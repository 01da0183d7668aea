//! C ABI export of the transform kernel.
//!
//! Hosts locate `transform` by name after loading the shared library;
//! the declaration lives in `include/transform_kernel.h`.

use std::os::raw::{c_double, c_int};

use crate::kernel;

/// `double transform(int a, int b)`
///
/// Never fails and touches no state outside the call.
#[allow(unsafe_code)]
#[no_mangle]
pub extern "C" fn transform(a: c_int, b: c_int) -> c_double {
    kernel::evaluate(a, b)
}
