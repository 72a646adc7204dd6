//! Device entry points.

use std::ffi::CString;
use std::ptr;
use libc::c_char;

use crate::capi::{box_handle, drop_handle};
use crate::standard::{Device, FilterSelector};

/// Attempts to materialize the device named by `selector`.
///
/// Absence is a first-class outcome: when no device of the requested class
/// exists on the host this returns null without raising. A null selector
/// also yields null.
///
/// # Safety
///
/// `selector` must be null or a live handle from `FilterSelector_Create`.
#[no_mangle]
pub unsafe extern "C" fn Device_CreateFromSelector(selector: *mut FilterSelector) -> *mut Device {
    match selector.as_ref() {
        Some(selector) => match selector.select_first() {
            Some(device) => box_handle(device),
            None => ptr::null_mut(),
        },
        None => ptr::null_mut(),
    }
}

/// Returns the device name as an owned C string, or null on a null handle.
/// Release the string with `CString_Delete`.
///
/// # Safety
///
/// `device` must be null or a live handle from `Device_CreateFromSelector`.
#[no_mangle]
pub unsafe extern "C" fn Device_GetName(device: *mut Device) -> *mut c_char {
    device_string(device, Device::name)
}

/// Returns the device vendor as an owned C string, or null on a null
/// handle. Release the string with `CString_Delete`.
///
/// # Safety
///
/// `device` must be null or a live handle from `Device_CreateFromSelector`.
#[no_mangle]
pub unsafe extern "C" fn Device_GetVendor(device: *mut Device) -> *mut c_char {
    device_string(device, Device::vendor)
}

/// Releases a device handle. Safe on null.
///
/// # Safety
///
/// `device` must be null or a live handle from `Device_CreateFromSelector`.
#[no_mangle]
pub unsafe extern "C" fn Device_Delete(device: *mut Device) {
    drop_handle(device);
}

unsafe fn device_string<F>(device: *mut Device, get: F) -> *mut c_char
        where F: Fn(&Device) -> crate::Result<String> {
    let device = match device.as_ref() {
        Some(device) => device,
        None => return ptr::null_mut(),
    };
    match get(device).ok().and_then(|s| CString::new(s).ok()) {
        Some(s) => s.into_raw(),
        None => ptr::null_mut(),
    }
}
