//! Thin and safe wrapper functions over the portable runtime.
//!
//! Every function validates its inputs and returns a `Result`; nothing at
//! this layer panics on bad input. Device absence is not an error here
//! either: `get_device_ids` returns an empty list when nothing matches,
//! and callers decide what that means.

use crate::core::clc::{self, KernelSignature};
use crate::core::platform::{self, DeviceRecord};
use crate::core::{
    Backend, CommandQueue, Context, DeviceClass, DeviceId, DeviceInfo, DeviceInfoResult,
    Kernel, KernelInfo, KernelInfoResult, Program, ProgramInfo, ProgramInfoResult,
    QueueProperties, Status,
};
use crate::error::Result as SyclResult;

/// An error representing a failed runtime call.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{fn_name}: {status}")]
pub struct ApiError {
    status: Status,
    fn_name: &'static str,
}

impl ApiError {
    pub fn new(status: Status, fn_name: &'static str) -> ApiError {
        ApiError { status, fn_name }
    }

    /// Returns the status code of the failed call.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the name of the function that failed.
    pub fn fn_name(&self) -> &'static str {
        self.fn_name
    }
}

/// An error raised while tabulating the kernels of an OpenCL-C source
/// string.
#[derive(Clone, Debug, thiserror::Error)]
#[error("unable to build program for device '{device_name}': {log}")]
pub struct ProgramBuildError {
    device_name: String,
    log: String,
}

impl ProgramBuildError {
    /// Returns the name of the device the build was bound to.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns the build log.
    pub fn log(&self) -> &str {
        &self.log
    }
}

fn record_for(device: DeviceId, fn_name: &'static str) -> Result<&'static DeviceRecord, ApiError> {
    platform::record(device).ok_or_else(|| ApiError::new(Status::InvalidDevice, fn_name))
}

/// Returns the ids of every available device matching `backend` and
/// `class`, in enumeration order. `None` matches everything. Absence of a
/// match is an empty list, not an error.
pub fn get_device_ids(backend: Option<Backend>, class: Option<DeviceClass>)
        -> SyclResult<Vec<DeviceId>> {
    let ids: Vec<DeviceId> = platform::device_records()
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record.available
                && backend.map_or(true, |b| record.backend == b)
                && class.map_or(true, |c| record.class == c)
        })
        .map(|(index, _)| DeviceId::new(index))
        .collect();
    trace!("get_device_ids: backend: {:?}, class: {:?} -> {} device(s)",
        backend, class, ids.len());
    Ok(ids)
}

/// Returns information about a device.
pub fn get_device_info(device: DeviceId, request: DeviceInfo) -> SyclResult<DeviceInfoResult> {
    let record = record_for(device, "get_device_info")?;
    let result = match request {
        DeviceInfo::Name => DeviceInfoResult::Name(record.name.to_string()),
        DeviceInfo::Vendor => DeviceInfoResult::Vendor(record.vendor.to_string()),
        DeviceInfo::Type => DeviceInfoResult::Type(record.class),
        DeviceInfo::Backend => DeviceInfoResult::Backend(record.backend),
        DeviceInfo::Available => DeviceInfoResult::Available(record.available),
        DeviceInfo::OpenclCInterop => DeviceInfoResult::OpenclCInterop(record.opencl_c_interop),
    };
    Ok(result)
}

/// Creates a context spanning `device_ids`.
pub fn create_context(device_ids: &[DeviceId]) -> SyclResult<Context> {
    if device_ids.is_empty() {
        return Err(ApiError::new(Status::InvalidValue, "create_context").into());
    }
    for &device in device_ids {
        record_for(device, "create_context")?;
    }
    Ok(Context::new(device_ids.to_vec()))
}

/// Creates a command queue bound to `device`, together with a fresh
/// context for that device.
pub fn create_command_queue(device: DeviceId, properties: Option<QueueProperties>)
        -> SyclResult<CommandQueue> {
    let record = record_for(device, "create_command_queue")?;
    let context = create_context(&[device])?;
    debug!("create_command_queue: device: '{}', properties: {:?}", record.name, properties);
    Ok(CommandQueue::new(context, device, properties.unwrap_or_else(QueueProperties::empty)))
}

/// Builds a program for `device` from an OpenCL-C source string,
/// tabulating the kernels the source declares. `compile_options` is stored
/// verbatim.
pub fn build_program_from_source(context: &Context, device: DeviceId, src: &str,
        compile_options: &str) -> SyclResult<Program> {
    let record = record_for(device, "build_program_from_source")?;
    if !context.contains_device(device) {
        return Err(ApiError::new(Status::InvalidDevice, "build_program_from_source").into());
    }
    if !record.opencl_c_interop {
        return Err(ApiError::new(Status::InvalidOperation, "build_program_from_source").into());
    }

    let kernels = clc::scan_kernels(src).map_err(|err| ProgramBuildError {
        device_name: record.name.to_string(),
        log: err.to_string(),
    })?;

    debug!("build_program_from_source: device: '{}', options: {:?}, {} kernel(s): [{}]",
        record.name, compile_options, kernels.len(),
        kernels.iter().map(KernelSignature::name).collect::<Vec<_>>().join(", "));

    Ok(Program::new(context.clone(), device, kernels, compile_options.to_string()))
}

/// Extracts the kernel named `name` from `program`.
pub fn create_kernel<S: AsRef<str>>(program: &Program, name: S) -> SyclResult<Kernel> {
    let name = name.as_ref();
    let index = program
        .kernels()
        .iter()
        .position(|sig| sig.name() == name)
        .ok_or_else(|| ApiError::new(Status::InvalidKernelName, "create_kernel"))?;
    Ok(Kernel::new(program.clone(), index))
}

/// Returns information about a kernel.
pub fn get_kernel_info(kernel: &Kernel, request: KernelInfo) -> SyclResult<KernelInfoResult> {
    let result = match request {
        KernelInfo::FunctionName => {
            KernelInfoResult::FunctionName(kernel.signature().name().to_string())
        }
        KernelInfo::NumArgs => KernelInfoResult::NumArgs(kernel.signature().num_args()),
    };
    Ok(result)
}

/// Returns information about a program.
pub fn get_program_info(program: &Program, request: ProgramInfo) -> SyclResult<ProgramInfoResult> {
    let result = match request {
        ProgramInfo::NumKernels => ProgramInfoResult::NumKernels(program.kernels().len()),
        ProgramInfo::KernelNames => ProgramInfoResult::KernelNames(
            program.kernels().iter().map(|sig| sig.name().to_string()).collect(),
        ),
        ProgramInfo::CompileOptions => {
            ProgramInfoResult::CompileOptions(program.compile_options().to_string())
        }
    };
    Ok(result)
}
