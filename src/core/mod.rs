//! The portable runtime.
//!
//! Contains the host device registry, reference-counted runtime object
//! wrappers, the OpenCL-C kernel-signature scanner, and thin safe wrapper
//! functions over all of it.
//!
//! The `standard` types at the crate root are built on top of this module
//! and are what most Rust callers want; the C entry points in [`crate::capi`]
//! go through `standard` as well.

pub mod clc;
pub mod functions;
pub(crate) mod platform;
mod types;

pub use self::clc::{scan_kernels, ClcError, KernelSignature};
pub use self::functions::{
    build_program_from_source, create_command_queue, create_context, create_kernel,
    get_device_ids, get_device_info, get_kernel_info, get_program_info, ApiError,
    ProgramBuildError,
};
pub use self::types::abs::{CommandQueue, Context, DeviceId, Kernel, Program};
pub use self::types::enums::{
    Backend, DeviceClass, DeviceInfo, DeviceInfoResult, KernelInfo, KernelInfoResult,
    ProgramInfo, ProgramInfoResult, QueueProperties, QueuePropertyCode, Status,
};
