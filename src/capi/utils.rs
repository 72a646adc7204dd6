//! Interface utility entry points.

use std::ffi::CString;
use libc::c_char;

/// Releases a C string returned by this interface (`Device_GetName`,
/// `Device_GetVendor`). Safe on null.
///
/// # Safety
///
/// `str_ref` must be null or an owned string returned by this interface
/// that has not already been deleted.
#[no_mangle]
pub unsafe extern "C" fn CString_Delete(str_ref: *mut c_char) {
    if !str_ref.is_null() {
        drop(CString::from_raw(str_ref));
    }
}
