use crate::core::{Backend, DeviceClass};
use crate::standard::{FilterParseError, FilterSelector};
use crate::Error;

#[test]
fn parses_full_filter() {
    let selector = FilterSelector::new("opencl:gpu:0").unwrap();
    assert_eq!(selector.backend(), Some(Backend::OpenCl));
    assert_eq!(selector.device_class(), Some(DeviceClass::Gpu));
    assert_eq!(selector.index(), Some(0));
}

#[test]
fn parses_partial_filters() {
    let selector = FilterSelector::new("cpu").unwrap();
    assert_eq!(selector.backend(), None);
    assert_eq!(selector.device_class(), Some(DeviceClass::Cpu));
    assert_eq!(selector.index(), None);

    let selector = FilterSelector::new("opencl:cpu").unwrap();
    assert_eq!(selector.backend(), Some(Backend::OpenCl));
    assert_eq!(selector.device_class(), Some(DeviceClass::Cpu));

    let selector = FilterSelector::new("1").unwrap();
    assert_eq!(selector.index(), Some(1));
}

#[test]
fn leading_host_segment_is_a_backend() {
    let selector = FilterSelector::new("host").unwrap();
    assert_eq!(selector.backend(), Some(Backend::Host));
    assert_eq!(selector.device_class(), None);

    let selector = FilterSelector::new("host:host").unwrap();
    assert_eq!(selector.backend(), Some(Backend::Host));
    assert_eq!(selector.device_class(), Some(DeviceClass::Host));
}

#[test]
fn rejects_empty_and_unrecognized_filters() {
    match FilterSelector::new("") {
        Err(Error::FilterParse(FilterParseError::Empty)) => {}
        other => panic!("expected empty filter error, got: {:?}", other),
    }
    match FilterSelector::new("opencl:fpga:0") {
        Err(Error::FilterParse(FilterParseError::UnrecognizedSegment(seg))) => {
            assert_eq!(seg, "fpga");
        }
        other => panic!("expected unrecognized segment error, got: {:?}", other),
    }
}

#[test]
fn rejects_out_of_order_segments() {
    assert!(FilterSelector::new("gpu:opencl").is_err());
    assert!(FilterSelector::new("0:cpu").is_err());
}

#[test]
fn selects_the_host_cpu() {
    let device = FilterSelector::new("opencl:cpu:0").unwrap().select_first().unwrap();
    assert_eq!(device.device_class().unwrap(), DeviceClass::Cpu);
    assert_eq!(device.backend().unwrap(), Backend::OpenCl);
    assert!(device.supports_ocl_source().unwrap());
}

#[test]
fn absence_is_a_value_not_an_error() {
    // No GPU exists in the portable registry.
    assert!(FilterSelector::new("opencl:gpu:0").unwrap().select_first().is_none());
    // Index beyond the matching devices.
    assert!(FilterSelector::new("opencl:cpu:1").unwrap().select_first().is_none());
}

#[test]
fn host_device_has_no_ocl_interop() {
    let device = FilterSelector::new("host:host:0").unwrap().select_first().unwrap();
    assert_eq!(device.device_class().unwrap(), DeviceClass::Host);
    assert!(!device.supports_ocl_source().unwrap());
}
