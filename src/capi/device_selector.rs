//! Device selector entry points.

use std::ptr;
use libc::c_char;

use crate::capi::{box_handle, c_str_opt, drop_handle};
use crate::standard::FilterSelector;

/// Parses `filter_str` into a device selector handle.
///
/// Returns null if `filter_str` is null or does not parse.
///
/// # Safety
///
/// `filter_str` must be null or a valid nul-terminated string.
#[no_mangle]
pub unsafe extern "C" fn FilterSelector_Create(filter_str: *const c_char)
        -> *mut FilterSelector {
    let filter = match c_str_opt(filter_str) {
        Some(filter) => filter,
        None => return ptr::null_mut(),
    };
    match FilterSelector::new(filter) {
        Ok(selector) => box_handle(selector),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a device selector handle. Safe on null.
///
/// # Safety
///
/// `selector` must be null or a live handle from [`FilterSelector_Create`].
#[no_mangle]
pub unsafe extern "C" fn DeviceSelector_Delete(selector: *mut FilterSelector) {
    drop_handle(selector);
}
