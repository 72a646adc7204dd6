//! A materialized compute device.

use std::fmt;

use crate::core::{self, Backend, DeviceClass, DeviceId as DeviceIdCore, DeviceInfo,
    DeviceInfoResult};
use crate::error::Result as SyclResult;

/// A device identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Device(DeviceIdCore);

impl Device {
    /// Creates a new `Device` from a core device id.
    pub fn from_core(id_core: DeviceIdCore) -> Device {
        Device(id_core)
    }

    /// Returns the underlying core device id.
    pub fn as_core(&self) -> DeviceIdCore {
        self.0
    }

    /// Returns the device name.
    pub fn name(&self) -> SyclResult<String> {
        match core::get_device_info(self.0, DeviceInfo::Name)? {
            DeviceInfoResult::Name(name) => Ok(name),
            info => unreachable!("unexpected device info result: {:?}", info),
        }
    }

    /// Returns the device vendor.
    pub fn vendor(&self) -> SyclResult<String> {
        match core::get_device_info(self.0, DeviceInfo::Vendor)? {
            DeviceInfoResult::Vendor(vendor) => Ok(vendor),
            info => unreachable!("unexpected device info result: {:?}", info),
        }
    }

    /// Returns the device class.
    pub fn device_class(&self) -> SyclResult<DeviceClass> {
        match core::get_device_info(self.0, DeviceInfo::Type)? {
            DeviceInfoResult::Type(class) => Ok(class),
            info => unreachable!("unexpected device info result: {:?}", info),
        }
    }

    /// Returns the backend the device is enumerated through.
    pub fn backend(&self) -> SyclResult<Backend> {
        match core::get_device_info(self.0, DeviceInfo::Backend)? {
            DeviceInfoResult::Backend(backend) => Ok(backend),
            info => unreachable!("unexpected device info result: {:?}", info),
        }
    }

    /// Returns `true` if the device can build kernel bundles from OpenCL-C
    /// source.
    pub fn supports_ocl_source(&self) -> SyclResult<bool> {
        match core::get_device_info(self.0, DeviceInfo::OpenclCInterop)? {
            DeviceInfoResult::OpenclCInterop(supported) => Ok(supported),
            info => unreachable!("unexpected device info result: {:?}", info),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.backend(), self.device_class(), self.name()) {
            (Ok(backend), Ok(class), Ok(name)) => {
                write!(f, "{}:{} ({})", backend, class, name)
            }
            _ => write!(f, "<invalid device>"),
        }
    }
}
