//! A command queue.

use crate::core::{self, CommandQueue as CommandQueueCore, QueueProperties};
use crate::error::Result as SyclResult;
use crate::standard::{Context, Device};

/// A command queue bound to exactly one device.
///
/// Creating a queue also creates the context the queue operates within;
/// [`Queue::context`] hands out independently-owned references to it.
#[derive(Clone, Debug)]
pub struct Queue {
    obj_core: CommandQueueCore,
}

impl Queue {
    /// Returns a new queue on the device specified by `device`.
    pub fn new(device: Device, properties: Option<QueueProperties>) -> SyclResult<Queue> {
        let obj_core = core::create_command_queue(device.as_core(), properties)?;
        Ok(Queue { obj_core })
    }

    /// Returns a reference to the core command queue.
    pub fn core(&self) -> &CommandQueueCore {
        &self.obj_core
    }

    /// Returns a copy of the context associated with this queue.
    pub fn context(&self) -> Context {
        Context::from_core(self.obj_core.context().clone())
    }

    /// Returns the device associated with this queue.
    pub fn device(&self) -> Device {
        Device::from_core(self.obj_core.device())
    }

    /// Returns the properties this queue was created with.
    pub fn properties(&self) -> QueueProperties {
        self.obj_core.properties()
    }
}
