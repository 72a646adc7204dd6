use crate::core::{QueueProperties, Status};
use crate::standard::{FilterSelector, KernelBundle, Queue};
use crate::tests::{cpu_device, CL_PROGRAM_SRC, COMPILE_OPTS};

#[test]
fn num_args_matches_declared_arity() {
    let device = cpu_device();
    let queue = Queue::new(device, None).unwrap();
    let context = queue.context();
    let bundle = KernelBundle::from_ocl_source(&context, device, CL_PROGRAM_SRC, COMPILE_OPTS)
        .unwrap();

    let add = bundle.kernel("add").unwrap();
    let axpy = bundle.kernel("axpy").unwrap();
    assert_eq!(add.num_args().unwrap(), 3);
    assert_eq!(axpy.num_args().unwrap(), 4);
    assert_eq!(add.name().unwrap(), "add");
    assert_eq!(axpy.name().unwrap(), "axpy");
}

#[test]
fn kernels_outlive_their_bundle() {
    let device = cpu_device();
    let queue = Queue::new(device, None).unwrap();
    let bundle = KernelBundle::from_ocl_source(&queue.context(), device, CL_PROGRAM_SRC,
        COMPILE_OPTS).unwrap();

    let add = bundle.kernel("add").unwrap();
    drop(bundle);
    assert_eq!(add.num_args().unwrap(), 3);
}

#[test]
fn unknown_kernel_name_is_an_api_error() {
    let device = cpu_device();
    let queue = Queue::new(device, None).unwrap();
    let bundle = KernelBundle::from_ocl_source(&queue.context(), device, CL_PROGRAM_SRC,
        COMPILE_OPTS).unwrap();

    assert!(bundle.has_kernel("add"));
    assert!(!bundle.has_kernel("missing"));
    let err = bundle.kernel("missing").unwrap_err();
    assert_eq!(err.api_status(), Some(Status::InvalidKernelName));
}

#[test]
fn bundle_reports_names_and_options() {
    let device = cpu_device();
    let queue = Queue::new(device, None).unwrap();
    let bundle = KernelBundle::from_ocl_source(&queue.context(), device, CL_PROGRAM_SRC,
        COMPILE_OPTS).unwrap();

    assert_eq!(bundle.kernel_names().unwrap(), vec!["add".to_string(), "axpy".to_string()]);
    assert_eq!(bundle.compile_options().unwrap(), COMPILE_OPTS);
    assert_eq!(bundle.device(), device);
}

#[test]
fn queue_context_and_device_are_consistent() {
    let device = cpu_device();
    let queue = Queue::new(device, Some(QueueProperties::PROFILING_ENABLE)).unwrap();

    assert_eq!(queue.device(), device);
    assert_eq!(queue.properties(), QueueProperties::PROFILING_ENABLE);
    // Repeated lookups hand out clones of the same underlying context.
    assert_eq!(queue.context(), queue.context());
    assert_eq!(queue.context().device_count(), 1);
}

#[test]
fn build_fails_without_ocl_interop() {
    let device = FilterSelector::new("host:host:0").unwrap().select_first().unwrap();
    let queue = Queue::new(device, None).unwrap();
    let err = KernelBundle::from_ocl_source(&queue.context(), device, CL_PROGRAM_SRC,
        COMPILE_OPTS).unwrap_err();
    assert_eq!(err.api_status(), Some(Status::InvalidOperation));
}

#[test]
fn build_fails_for_a_device_outside_the_context() {
    let cpu = cpu_device();
    let host = FilterSelector::new("host:host:0").unwrap().select_first().unwrap();
    let queue = Queue::new(host, None).unwrap();
    let err = KernelBundle::from_ocl_source(&queue.context(), cpu, CL_PROGRAM_SRC, COMPILE_OPTS)
        .unwrap_err();
    assert_eq!(err.api_status(), Some(Status::InvalidDevice));
}

#[test]
fn build_fails_on_malformed_source() {
    let device = cpu_device();
    let queue = Queue::new(device, None).unwrap();
    let err = KernelBundle::from_ocl_source(&queue.context(), device,
        "kernel void broken(int a", COMPILE_OPTS).unwrap_err();
    assert!(err.to_string().contains("unable to build program"));
}
