//! Command queue entry points.

use std::ptr;
use std::slice;

use enum_primitive::FromPrimitive;

use crate::capi::{box_handle, drop_handle};
use crate::core::{QueueProperties, QueuePropertyCode};
use crate::standard::{Context, Device, Queue};

/// Creates a queue bound to `device`.
///
/// `properties` is an optional array of `num_properties` property codes
/// (see `QueuePropertyCode`); null with a count of zero is valid and means
/// default properties. Returns null on a null device or an unrecognized
/// property code.
///
/// # Safety
///
/// `device` must be null or a live device handle; `properties` must be
/// null or valid for reads of `num_properties` elements.
#[no_mangle]
pub unsafe extern "C" fn Queue_CreateForDevice(device: *mut Device, properties: *const u64,
        num_properties: usize) -> *mut Queue {
    let device = match device.as_ref() {
        Some(device) => *device,
        None => return ptr::null_mut(),
    };

    let properties = if properties.is_null() || num_properties == 0 {
        None
    } else {
        let mut flags = QueueProperties::empty();
        for &code in slice::from_raw_parts(properties, num_properties) {
            match QueuePropertyCode::from_u64(code) {
                Some(code) => flags |= code.to_flag(),
                None => return ptr::null_mut(),
            }
        }
        Some(flags)
    };

    match Queue::new(device, properties) {
        Ok(queue) => box_handle(queue),
        Err(_) => ptr::null_mut(),
    }
}

/// Returns an independently-owned handle to the context of `queue`, or
/// null on a null queue.
///
/// # Safety
///
/// `queue` must be null or a live handle from [`Queue_CreateForDevice`].
#[no_mangle]
pub unsafe extern "C" fn Queue_GetContext(queue: *mut Queue) -> *mut Context {
    match queue.as_ref() {
        Some(queue) => box_handle(queue.context()),
        None => ptr::null_mut(),
    }
}

/// Returns a handle to the device of `queue`, or null on a null queue.
///
/// # Safety
///
/// `queue` must be null or a live handle from [`Queue_CreateForDevice`].
#[no_mangle]
pub unsafe extern "C" fn Queue_GetDevice(queue: *mut Queue) -> *mut Device {
    match queue.as_ref() {
        Some(queue) => box_handle(queue.device()),
        None => ptr::null_mut(),
    }
}

/// Releases a queue handle. Safe on null.
///
/// # Safety
///
/// `queue` must be null or a live handle from [`Queue_CreateForDevice`].
#[no_mangle]
pub unsafe extern "C" fn Queue_Delete(queue: *mut Queue) {
    drop_handle(queue);
}
