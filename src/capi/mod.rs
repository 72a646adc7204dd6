//! C-callable entry points.
//!
//! Each entry point operates on opaque handles: a handle is a raw pointer
//! to a boxed `standard` type. Ownership discipline is strict:
//!
//! * every successful factory call transfers ownership of exactly one
//!   handle to the caller;
//! * each handle must be passed to its matching `_Delete` exactly once;
//! * every `_Delete` accepts null and does nothing;
//! * introspection on a null handle returns a sentinel (`-1` for
//!   `Kernel_GetNumArgs`), never a fault.
//!
//! Failure is reported through two channels only: factories yield null and
//! introspection yields sentinels. Nothing here panics, raises, or logs.
//!
//! Strings returned by the interface (`Device_GetName`,
//! `Device_GetVendor`) are owned C strings; release them with
//! [`CString_Delete`].

use std::ffi::CStr;
use libc::c_char;

mod context;
mod device;
mod device_selector;
mod kernel;
mod kernel_bundle;
mod queue;
mod utils;

pub use self::context::{Context_Delete, Context_DeviceCount};
pub use self::device::{Device_CreateFromSelector, Device_Delete, Device_GetName,
    Device_GetVendor};
pub use self::device_selector::{DeviceSelector_Delete, FilterSelector_Create};
pub use self::kernel::{Kernel_Delete, Kernel_GetNumArgs};
pub use self::kernel_bundle::{KernelBundle_CreateFromOCLSource, KernelBundle_Delete,
    KernelBundle_GetKernel, KernelBundle_HasKernel};
pub use self::queue::{Queue_CreateForDevice, Queue_Delete, Queue_GetContext, Queue_GetDevice};
pub use self::utils::CString_Delete;

/// Boxes `val` and leaks it as an owned handle.
pub(crate) fn box_handle<T>(val: T) -> *mut T {
    Box::into_raw(Box::new(val))
}

/// Reclaims and drops a handle minted by [`box_handle`]. Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a handle that has not already been deleted.
pub(crate) unsafe fn drop_handle<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Borrows a C string as `&str`. Returns `None` for null or non-UTF-8
/// input.
///
/// # Safety
///
/// `ptr` must be null or a valid nul-terminated string.
pub(crate) unsafe fn c_str_opt<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}
