//! A runtime context.

use crate::core::Context as ContextCore;
use crate::standard::Device;

/// A context: a set of devices runtime state is shared across.
///
/// Contexts are reference counted; cloning retains the underlying runtime
/// context and every clone has an independent lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    obj_core: ContextCore,
}

impl Context {
    /// Creates a new `Context` from a core context.
    pub fn from_core(obj_core: ContextCore) -> Context {
        Context { obj_core }
    }

    /// Returns a reference to the core context.
    pub fn core(&self) -> &ContextCore {
        &self.obj_core
    }

    /// Returns the devices bound to this context.
    pub fn devices(&self) -> Vec<Device> {
        self.obj_core.devices().iter().map(|&id| Device::from_core(id)).collect()
    }

    /// Returns the number of devices bound to this context.
    pub fn device_count(&self) -> usize {
        self.obj_core.devices().len()
    }
}
