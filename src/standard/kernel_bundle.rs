//! A compiled collection of named kernel entry points.

use crate::core::{self, Program as ProgramCore, ProgramInfo, ProgramInfoResult};
use crate::error::Result as SyclResult;
use crate::standard::{Context, Device, Kernel};

/// A kernel bundle: the named entry points of one OpenCL-C source string,
/// bound to a (context, device) pair.
///
/// The binding is immutable; the bundle contains zero or more kernels and
/// each is extractable by its declared name for the bundle's lifetime.
#[derive(Clone, Debug)]
pub struct KernelBundle {
    obj_core: ProgramCore,
}

impl KernelBundle {
    /// Builds a bundle for `device` from an OpenCL-C source string.
    ///
    /// `compile_options` is passed through verbatim. Fails if `device` is
    /// not a member of `context` or does not support building from
    /// OpenCL-C source.
    pub fn from_ocl_source(context: &Context, device: Device, src: &str,
            compile_options: &str) -> SyclResult<KernelBundle> {
        let obj_core = core::build_program_from_source(context.core(), device.as_core(), src,
            compile_options)?;
        Ok(KernelBundle { obj_core })
    }

    /// Returns a reference to the core program.
    pub fn core(&self) -> &ProgramCore {
        &self.obj_core
    }

    /// Extracts the kernel named `name`.
    pub fn kernel(&self, name: &str) -> SyclResult<Kernel> {
        core::create_kernel(&self.obj_core, name).map(Kernel::from_core)
    }

    /// Returns `true` if the bundle contains a kernel named `name`.
    pub fn has_kernel(&self, name: &str) -> bool {
        self.obj_core.signature(name).is_some()
    }

    /// Returns the names of every kernel in the bundle, in declaration
    /// order.
    pub fn kernel_names(&self) -> SyclResult<Vec<String>> {
        match core::get_program_info(&self.obj_core, ProgramInfo::KernelNames)? {
            ProgramInfoResult::KernelNames(names) => Ok(names),
            info => unreachable!("unexpected program info result: {:?}", info),
        }
    }

    /// Returns the compile options the bundle was built with, verbatim.
    pub fn compile_options(&self) -> SyclResult<String> {
        match core::get_program_info(&self.obj_core, ProgramInfo::CompileOptions)? {
            ProgramInfoResult::CompileOptions(options) => Ok(options),
            info => unreachable!("unexpected program info result: {:?}", info),
        }
    }

    /// Returns the device the bundle is bound to.
    pub fn device(&self) -> Device {
        Device::from_core(self.obj_core.device())
    }

    /// Returns a copy of the context the bundle is bound to.
    pub fn context(&self) -> Context {
        Context::from_core(self.obj_core.context().clone())
    }
}
