//! Context entry points.

use crate::capi::drop_handle;
use crate::standard::Context;

/// Returns the number of devices bound to `context`, or zero on a null
/// handle.
///
/// # Safety
///
/// `context` must be null or a live handle from `Queue_GetContext`.
#[no_mangle]
pub unsafe extern "C" fn Context_DeviceCount(context: *mut Context) -> usize {
    match context.as_ref() {
        Some(context) => context.device_count(),
        None => 0,
    }
}

/// Releases a context handle. Safe on null.
///
/// # Safety
///
/// `context` must be null or a live handle from `Queue_GetContext`.
#[no_mangle]
pub unsafe extern "C" fn Context_Delete(context: *mut Context) {
    drop_handle(context);
}
