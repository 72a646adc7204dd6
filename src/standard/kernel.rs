//! A kernel entry point.

use crate::core::{self, Kernel as KernelCore, KernelInfo, KernelInfoResult};
use crate::error::Result as SyclResult;

/// A single named entry point extracted from a kernel bundle.
///
/// A kernel retains the bundle it came from, so releasing the bundle
/// first leaves the kernel fully usable.
#[derive(Clone, Debug)]
pub struct Kernel {
    obj_core: KernelCore,
}

impl Kernel {
    /// Creates a new `Kernel` from a core kernel.
    pub fn from_core(obj_core: KernelCore) -> Kernel {
        Kernel { obj_core }
    }

    /// Returns a reference to the core kernel.
    pub fn core(&self) -> &KernelCore {
        &self.obj_core
    }

    /// Returns the number of formal parameters the kernel declares.
    pub fn num_args(&self) -> SyclResult<u32> {
        match core::get_kernel_info(&self.obj_core, KernelInfo::NumArgs)? {
            KernelInfoResult::NumArgs(num) => Ok(num),
            info => unreachable!("unexpected kernel info result: {:?}", info),
        }
    }

    /// Returns the kernel's declared name.
    pub fn name(&self) -> SyclResult<String> {
        match core::get_kernel_info(&self.obj_core, KernelInfo::FunctionName)? {
            KernelInfoResult::FunctionName(name) => Ok(name),
            info => unreachable!("unexpected kernel info result: {:?}", info),
        }
    }
}
