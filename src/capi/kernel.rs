//! Kernel entry points.

use libc::ssize_t;

use crate::capi::drop_handle;
use crate::standard::Kernel;

/// Returns the number of formal parameters declared on `kernel`, or `-1`
/// on a null handle.
///
/// Total over the input domain {null, valid}: it never dereferences null,
/// never raises, and has no side effects.
///
/// # Safety
///
/// `kernel` must be null or a live handle from `KernelBundle_GetKernel`.
#[no_mangle]
pub unsafe extern "C" fn Kernel_GetNumArgs(kernel: *mut Kernel) -> ssize_t {
    match kernel.as_ref() {
        Some(kernel) => match kernel.num_args() {
            Ok(num) => num as ssize_t,
            Err(_) => -1,
        },
        None => -1,
    }
}

/// Releases a kernel handle. Safe on null.
///
/// # Safety
///
/// `kernel` must be null or a live handle from `KernelBundle_GetKernel`.
#[no_mangle]
pub unsafe extern "C" fn Kernel_Delete(kernel: *mut Kernel) {
    drop_handle(kernel);
}
