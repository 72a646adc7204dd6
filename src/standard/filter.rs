//! Device selection from a filter string.

use std::str::FromStr;

use crate::core::{self, Backend, DeviceClass};
use crate::error::Result as SyclResult;
use crate::standard::Device;

/// A filter string parse error.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("empty device filter")]
    Empty,
    #[error("unrecognized filter segment '{0}'")]
    UnrecognizedSegment(String),
}

/// A device selector parsed from a colon-delimited filter string of the
/// form `backend:class:index`.
///
/// Every segment is optional but segments must appear in that order:
/// `"opencl:gpu:0"`, `"opencl:cpu"`, `"gpu"`, and `"1"` are all valid.
/// Recognized backends are `opencl`, `level_zero`, `cuda`, and `host`;
/// recognized classes are `cpu`, `gpu`, `accelerator`, and `host`. The
/// index selects among the devices matching the other segments and
/// defaults to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSelector {
    backend: Option<Backend>,
    class: Option<DeviceClass>,
    index: Option<usize>,
}

impl FilterSelector {
    /// Parses `filter` into a selector.
    pub fn new(filter: &str) -> SyclResult<FilterSelector> {
        if filter.trim().is_empty() {
            return Err(FilterParseError::Empty.into());
        }

        let mut backend = None;
        let mut class = None;
        let mut index = None;

        for segment in filter.split(':') {
            let segment = segment.trim();
            if backend.is_none() && class.is_none() && index.is_none() {
                if let Some(b) = backend_from_str(segment) {
                    backend = Some(b);
                    continue;
                }
            }
            if class.is_none() && index.is_none() {
                if let Some(c) = class_from_str(segment) {
                    class = Some(c);
                    continue;
                }
            }
            if index.is_none() {
                if let Ok(n) = segment.parse::<usize>() {
                    index = Some(n);
                    continue;
                }
            }
            return Err(FilterParseError::UnrecognizedSegment(segment.to_string()).into());
        }

        Ok(FilterSelector { backend, class, index })
    }

    /// Returns the backend constraint, if any.
    pub fn backend(&self) -> Option<Backend> {
        self.backend
    }

    /// Returns the device class constraint, if any.
    pub fn device_class(&self) -> Option<DeviceClass> {
        self.class
    }

    /// Returns the device index constraint, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Attempts to materialize the device this selector names.
    ///
    /// Absence is a first-class outcome: when no device of the requested
    /// backend and class exists on the host, or the index is out of range,
    /// this returns `None` rather than an error.
    pub fn select_first(&self) -> Option<Device> {
        let ids = core::get_device_ids(self.backend, self.class).ok()?;
        ids.get(self.index.unwrap_or(0)).map(|&id| Device::from_core(id))
    }
}

impl FromStr for FilterSelector {
    type Err = crate::error::Error;

    fn from_str(filter: &str) -> SyclResult<FilterSelector> {
        FilterSelector::new(filter)
    }
}

fn backend_from_str(segment: &str) -> Option<Backend> {
    match segment {
        "opencl" => Some(Backend::OpenCl),
        "level_zero" => Some(Backend::LevelZero),
        "cuda" => Some(Backend::Cuda),
        "host" => Some(Backend::Host),
        _ => None,
    }
}

fn class_from_str(segment: &str) -> Option<DeviceClass> {
    match segment {
        "cpu" => Some(DeviceClass::Cpu),
        "gpu" => Some(DeviceClass::Gpu),
        "accelerator" => Some(DeviceClass::Accelerator),
        "host" => Some(DeviceClass::Host),
        _ => None,
    }
}
