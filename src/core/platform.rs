//! The host device registry.
//!
//! The portable runtime enumerates a fixed set of devices on the host: the
//! host processor exposed through the `opencl` backend (with OpenCL-C
//! interop) and the host device itself (without it). Device handles index
//! into this table for as long as the process lives.

use crate::core::{Backend, DeviceClass, DeviceId};

/// A registry entry describing one enumerable device.
#[derive(Debug)]
pub(crate) struct DeviceRecord {
    pub backend: Backend,
    pub class: DeviceClass,
    pub name: &'static str,
    pub vendor: &'static str,
    pub available: bool,
    pub opencl_c_interop: bool,
}

lazy_static! {
    static ref HOST_DEVICES: Vec<DeviceRecord> = enumerate_host_devices();
}

fn enumerate_host_devices() -> Vec<DeviceRecord> {
    vec![
        DeviceRecord {
            backend: Backend::OpenCl,
            class: DeviceClass::Cpu,
            name: "Portable host CPU",
            vendor: "syclif",
            available: true,
            opencl_c_interop: true,
        },
        DeviceRecord {
            backend: Backend::Host,
            class: DeviceClass::Host,
            name: "Host device",
            vendor: "syclif",
            available: true,
            opencl_c_interop: false,
        },
    ]
}

/// Returns the full registry, in enumeration order.
pub(crate) fn device_records() -> &'static [DeviceRecord] {
    &HOST_DEVICES
}

/// Returns the registry entry for `device`, if the id is in range.
pub(crate) fn record(device: DeviceId) -> Option<&'static DeviceRecord> {
    HOST_DEVICES.get(device.as_index())
}
