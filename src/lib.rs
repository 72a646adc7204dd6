//! A C-callable interface for a SYCL-style device, queue, and kernel
//! runtime.
//!
//! The crate is split into three layers:
//!
//! * [`core`]: the portable runtime itself. A static host device registry,
//!   reference-counted runtime objects (contexts, command queues, programs,
//!   kernels), an OpenCL-C kernel-signature scanner, and thin safe wrapper
//!   functions over all of it.
//! * `standard` (re-exported at the crate root): safe Rust types layered
//!   over `core`: [`FilterSelector`], [`Device`], [`Queue`], [`Context`],
//!   [`KernelBundle`], and [`Kernel`].
//! * [`capi`]: `extern "C"` entry points over boxed handles. Every factory
//!   transfers ownership of one handle to the caller; every release accepts
//!   null; introspection on a null kernel returns the `-1` sentinel.
//!
//! The runtime does not execute kernels. Building a bundle from OpenCL-C
//! source tabulates the kernels the source declares, by name and arity, so
//! that named entry points can be extracted and introspected afterwards.
//!
//! ## Example
//!
//! ```
//! use syclif::{FilterSelector, Queue, KernelBundle};
//!
//! let src = r#"
//!     kernel void add(global int* a, global int* b, global int* c) {
//!         size_t index = get_global_id(0);
//!         c[index] = a[index] + b[index];
//!     }
//! "#;
//!
//! let selector = FilterSelector::new("opencl:cpu:0").unwrap();
//! let device = selector.select_first().expect("no cpu device");
//! let queue = Queue::new(device, None).unwrap();
//! let bundle = KernelBundle::from_ocl_source(&queue.context(), device,
//!     src, "-cl-fast-relaxed-math").unwrap();
//! assert_eq!(bundle.kernel("add").unwrap().num_args().unwrap(), 3);
//! ```

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate enum_primitive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod error;
mod standard;
pub mod capi;
pub mod core;
#[cfg(test)]
mod tests;

pub use crate::error::{Error, Result};
pub use crate::standard::{Context, Device, FilterSelector, Kernel, KernelBundle, Queue};
pub use crate::core::{Backend, DeviceClass, QueueProperties, QueuePropertyCode, Status};
