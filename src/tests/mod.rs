//! Runtime-level tests.
//!
//! The C interface is exercised end to end by the integration tests under
//! `tests/`; the modules here cover the runtime and the standard types
//! directly.

pub mod filter;
pub mod kernel_introspect;
pub mod signature_scan;

use crate::standard::{Device, FilterSelector};

/// The canonical two-kernel test source.
pub const CL_PROGRAM_SRC: &str = r#"
    kernel void add(global int* a, global int* b, global int* c) {
        size_t index = get_global_id(0);
        c[index] = a[index] + b[index];
    }

    kernel void axpy(global int* a, global int* b, global int* c, int d) {
        size_t index = get_global_id(0);
        c[index] = a[index] + d*b[index];
    }
"#;

pub const COMPILE_OPTS: &str = "-cl-fast-relaxed-math";

/// Returns the host CPU device. Present on every host by construction.
pub fn cpu_device() -> Device {
    FilterSelector::new("opencl:cpu:0")
        .expect("parse cpu filter")
        .select_first()
        .expect("no cpu device in the host registry")
}
