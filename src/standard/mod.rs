//! `syclif` standard types.

mod context;
mod device;
mod filter;
mod kernel;
mod kernel_bundle;
mod queue;

pub use self::context::Context;
pub use self::device::Device;
pub use self::filter::{FilterParseError, FilterSelector};
pub use self::kernel::Kernel;
pub use self::kernel_bundle::KernelBundle;
pub use self::queue::Queue;
