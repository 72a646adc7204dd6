//! Runtime object wrappers.
//!
//! Each wrapper holds a reference-counted record owning the underlying
//! runtime state. Cloning a wrapper retains the record; dropping the last
//! clone releases it. This is what makes release order across the C
//! interface unconstrained: a kernel keeps its program alive, a queue keeps
//! its context alive, and so on, regardless of the order in which handles
//! are deleted.

use std::sync::Arc;

use crate::core::clc::KernelSignature;
use crate::core::QueueProperties;

/// The ID of a device in the host registry.
///
/// Unlike the other runtime objects a device is never released; the
/// registry lives for the duration of the process and ids stay valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeviceId(usize);

impl DeviceId {
    pub(crate) fn new(index: usize) -> DeviceId {
        DeviceId(index)
    }

    pub(crate) fn as_index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct ContextInner {
    devices: Vec<DeviceId>,
}

/// A runtime context: a set of devices state is shared across.
#[derive(Clone, Debug)]
pub struct Context(Arc<ContextInner>);

impl Context {
    pub(crate) fn new(devices: Vec<DeviceId>) -> Context {
        Context(Arc::new(ContextInner { devices }))
    }

    /// Returns the devices bound to this context.
    pub fn devices(&self) -> &[DeviceId] {
        &self.0.devices
    }

    /// Returns `true` if `device` is a member of this context.
    pub fn contains_device(&self, device: DeviceId) -> bool {
        self.0.devices.contains(&device)
    }
}

impl PartialEq for Context {
    /// Contexts compare by identity, not by member devices.
    fn eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Context {}

#[derive(Debug)]
struct CommandQueueInner {
    context: Context,
    device: DeviceId,
    properties: QueueProperties,
}

/// A command queue bound to exactly one device.
#[derive(Clone, Debug)]
pub struct CommandQueue(Arc<CommandQueueInner>);

impl CommandQueue {
    pub(crate) fn new(context: Context, device: DeviceId, properties: QueueProperties)
            -> CommandQueue {
        CommandQueue(Arc::new(CommandQueueInner { context, device, properties }))
    }

    /// Returns the context this queue was created within.
    pub fn context(&self) -> &Context {
        &self.0.context
    }

    /// Returns the device this queue is bound to.
    pub fn device(&self) -> DeviceId {
        self.0.device
    }

    /// Returns the properties this queue was created with.
    pub fn properties(&self) -> QueueProperties {
        self.0.properties
    }
}

#[derive(Debug)]
struct ProgramInner {
    context: Context,
    device: DeviceId,
    kernels: Vec<KernelSignature>,
    compile_options: String,
}

/// A program: the named entry points tabulated from one OpenCL-C source
/// string, bound to a (context, device) pair.
#[derive(Clone, Debug)]
pub struct Program(Arc<ProgramInner>);

impl Program {
    pub(crate) fn new(context: Context, device: DeviceId, kernels: Vec<KernelSignature>,
            compile_options: String) -> Program {
        Program(Arc::new(ProgramInner { context, device, kernels, compile_options }))
    }

    /// Returns the context this program is bound to.
    pub fn context(&self) -> &Context {
        &self.0.context
    }

    /// Returns the device this program is bound to.
    pub fn device(&self) -> DeviceId {
        self.0.device
    }

    /// Returns the tabulated kernel signatures, in declaration order.
    pub fn kernels(&self) -> &[KernelSignature] {
        &self.0.kernels
    }

    /// Returns the signature of the kernel named `name`, if declared.
    pub fn signature(&self, name: &str) -> Option<&KernelSignature> {
        self.0.kernels.iter().find(|sig| sig.name() == name)
    }

    /// Returns the compile options the program was built with, verbatim.
    pub fn compile_options(&self) -> &str {
        &self.0.compile_options
    }
}

#[derive(Debug)]
struct KernelInner {
    program: Program,
    index: usize,
}

/// A single named entry point within a program.
///
/// Holds a strong reference to its program, so a kernel outlives the
/// handle of the program it was extracted from.
#[derive(Clone, Debug)]
pub struct Kernel(Arc<KernelInner>);

impl Kernel {
    pub(crate) fn new(program: Program, index: usize) -> Kernel {
        debug_assert!(index < program.kernels().len());
        Kernel(Arc::new(KernelInner { program, index }))
    }

    /// Returns the program this kernel was extracted from.
    pub fn program(&self) -> &Program {
        &self.0.program
    }

    /// Returns this kernel's source-level signature.
    pub fn signature(&self) -> &KernelSignature {
        &self.0.program.kernels()[self.0.index]
    }
}
