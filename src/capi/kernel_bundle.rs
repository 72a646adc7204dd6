//! Kernel bundle entry points.

use std::ptr;
use libc::c_char;

use crate::capi::{box_handle, c_str_opt, drop_handle};
use crate::standard::{Context, Device, Kernel, KernelBundle};

/// Builds a kernel bundle for `device` from an OpenCL-C source string.
///
/// `compile_options` is passed through verbatim; a null options pointer is
/// treated as the empty string. Returns null on a null context, device, or
/// source, and on any build failure (device outside the context, device
/// without OpenCL-C interop, malformed source).
///
/// # Safety
///
/// `context` and `device` must be null or live handles; `source` and
/// `compile_options` must be null or valid nul-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn KernelBundle_CreateFromOCLSource(context: *mut Context,
        device: *mut Device, source: *const c_char, compile_options: *const c_char)
        -> *mut KernelBundle {
    let context = match context.as_ref() {
        Some(context) => context,
        None => return ptr::null_mut(),
    };
    let device = match device.as_ref() {
        Some(device) => *device,
        None => return ptr::null_mut(),
    };
    let source = match c_str_opt(source) {
        Some(source) => source,
        None => return ptr::null_mut(),
    };
    let compile_options = c_str_opt(compile_options).unwrap_or("");

    match KernelBundle::from_ocl_source(context, device, source, compile_options) {
        Ok(bundle) => box_handle(bundle),
        Err(_) => ptr::null_mut(),
    }
}

/// Extracts the kernel named `name` from `bundle`.
///
/// Returns null on a null bundle, a null name, or an unknown kernel name.
///
/// # Safety
///
/// `bundle` must be null or a live handle; `name` must be null or a valid
/// nul-terminated string.
#[no_mangle]
pub unsafe extern "C" fn KernelBundle_GetKernel(bundle: *mut KernelBundle,
        name: *const c_char) -> *mut Kernel {
    let bundle = match bundle.as_ref() {
        Some(bundle) => bundle,
        None => return ptr::null_mut(),
    };
    let name = match c_str_opt(name) {
        Some(name) => name,
        None => return ptr::null_mut(),
    };
    match bundle.kernel(name) {
        Ok(kernel) => box_handle(kernel),
        Err(_) => ptr::null_mut(),
    }
}

/// Returns `true` if `bundle` contains a kernel named `name`; `false` on
/// null input.
///
/// # Safety
///
/// `bundle` must be null or a live handle; `name` must be null or a valid
/// nul-terminated string.
#[no_mangle]
pub unsafe extern "C" fn KernelBundle_HasKernel(bundle: *mut KernelBundle,
        name: *const c_char) -> bool {
    match (bundle.as_ref(), c_str_opt(name)) {
        (Some(bundle), Some(name)) => bundle.has_kernel(name),
        _ => false,
    }
}

/// Releases a kernel bundle handle. Safe on null.
///
/// Kernels already extracted from the bundle stay valid: each kernel holds
/// its own reference to the underlying program.
///
/// # Safety
///
/// `bundle` must be null or a live handle from
/// [`KernelBundle_CreateFromOCLSource`].
#[no_mangle]
pub unsafe extern "C" fn KernelBundle_Delete(bundle: *mut KernelBundle) {
    drop_handle(bundle);
}
