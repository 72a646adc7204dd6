//! Enumerators and bit fields used throughout the runtime.

use std::fmt;

enum_from_primitive! {
    /// Runtime call status codes.
    ///
    /// Values mirror the OpenCL status codes for the subset of failures
    /// this runtime can actually produce.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Status {
        Success = 0,
        DeviceNotFound = -1,
        BuildProgramFailure = -11,
        InvalidValue = -30,
        InvalidDevice = -33,
        InvalidContext = -34,
        InvalidQueueProperties = -35,
        InvalidProgram = -44,
        InvalidKernelName = -46,
        InvalidKernel = -48,
        InvalidOperation = -59,
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ({})", self, *self as i32)
    }
}

/// A runtime backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    OpenCl,
    LevelZero,
    Cuda,
    Host,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Backend::OpenCl => "opencl",
            Backend::LevelZero => "level_zero",
            Backend::Cuda => "cuda",
            Backend::Host => "host",
        };
        f.write_str(name)
    }
}

/// A device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Cpu,
    Gpu,
    Accelerator,
    Host,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            DeviceClass::Cpu => "cpu",
            DeviceClass::Gpu => "gpu",
            DeviceClass::Accelerator => "accelerator",
            DeviceClass::Host => "host",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Command queue properties.
    pub struct QueueProperties: u64 {
        const OUT_OF_ORDER_EXEC_MODE_ENABLE = 1 << 0;
        const PROFILING_ENABLE = 1 << 1;
    }
}

enum_from_primitive! {
    /// Property codes accepted in the property list of
    /// `Queue_CreateForDevice`.
    ///
    /// Each decoded code maps onto one [`QueueProperties`] flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum QueuePropertyCode {
        OutOfOrderExecModeEnable = 1,
        ProfilingEnable = 2,
    }
}

impl QueuePropertyCode {
    /// Returns the queue property flag this code stands for.
    pub fn to_flag(self) -> QueueProperties {
        match self {
            QueuePropertyCode::OutOfOrderExecModeEnable => {
                QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE
            }
            QueuePropertyCode::ProfilingEnable => QueueProperties::PROFILING_ENABLE,
        }
    }
}

/// A device info request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceInfo {
    Name,
    Vendor,
    Type,
    Backend,
    Available,
    OpenclCInterop,
}

/// A device info result.
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceInfoResult {
    Name(String),
    Vendor(String),
    Type(DeviceClass),
    Backend(Backend),
    Available(bool),
    OpenclCInterop(bool),
}

/// A kernel info request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelInfo {
    FunctionName,
    NumArgs,
}

/// A kernel info result.
#[derive(Clone, Debug, PartialEq)]
pub enum KernelInfoResult {
    FunctionName(String),
    NumArgs(u32),
}

/// A program info request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramInfo {
    NumKernels,
    KernelNames,
    CompileOptions,
}

/// A program info result.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgramInfoResult {
    NumKernels(usize),
    KernelNames(Vec<String>),
    CompileOptions(String),
}
