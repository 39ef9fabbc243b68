#![cfg(test)]

use super::_tests_support::{context, context_with};
use super::error::{status_of, BindingError, ViolationKind};
use super::host::{CufftHandle, Pointer, StreamRef};
use super::native::{DeviceAddress, StreamAddress};
use super::recording::{NativeCall, RecordingCufft};
use super::status::CufftStatus;
use super::transform::LibraryProperty;

#[test]
fn create_stores_new_plan() {
    let ctx = context_with(RecordingCufft::new().with_next_plan(31));
    let mut handle = CufftHandle::new();

    let status = ctx.create(Some(&mut handle)).unwrap();

    assert_eq!(status, CufftStatus::SUCCESS);
    assert_eq!(handle.plan(), 31);
    assert_eq!(ctx.native().calls(), vec![NativeCall::Create { plan: 0 }]);
}

#[test]
fn plan_counter_wraps_at_i32_max() {
    let ctx = context_with(RecordingCufft::new().with_next_plan(i32::MAX));
    let mut first = CufftHandle::new();
    let mut second = CufftHandle::new();

    ctx.create(Some(&mut first)).unwrap();
    ctx.create(Some(&mut second)).unwrap();

    assert_eq!(first.plan(), i32::MAX);
    assert_eq!(second.plan(), i32::MIN);
}

#[test]
fn create_writes_back_even_on_alloc_failure() {
    let native = RecordingCufft::new()
        .with_next_plan(12)
        .with_result(CufftStatus::ALLOC_FAILED);
    let ctx = context_with(native);
    let mut handle = CufftHandle::new();

    let status = ctx.create(Some(&mut handle)).unwrap();

    assert_eq!(status, CufftStatus::ALLOC_FAILED);
    assert_eq!(handle.plan(), 12);
}

#[test]
fn destroy_passes_plan_and_leaves_handle() {
    let ctx = context();
    let handle = CufftHandle::from_raw(5);

    ctx.destroy(Some(&handle)).unwrap();
    // Reuse after destroy is not tracked; the native side decides.
    ctx.destroy(Some(&handle)).unwrap();

    assert_eq!(handle.plan(), 5);
    assert_eq!(
        ctx.native().calls(),
        vec![NativeCall::Destroy { plan: 5 }, NativeCall::Destroy { plan: 5 }]
    );
}

#[test]
fn work_area_and_auto_allocation() {
    let ctx = context();
    let handle = CufftHandle::from_raw(2);
    let area = Pointer::to_address(0xdead_0000);

    ctx.set_auto_allocation(Some(&handle), 0).unwrap();
    ctx.set_work_area(Some(&handle), Some(&area)).unwrap();

    assert_eq!(
        ctx.native().calls(),
        vec![
            NativeCall::SetAutoAllocation {
                plan: 2,
                auto_allocate: 0
            },
            NativeCall::SetWorkArea {
                plan: 2,
                work_area: DeviceAddress(0xdead_0000)
            },
        ]
    );
}

#[test]
fn set_stream_extracts_stream_address() {
    let ctx = context();
    let handle = CufftHandle::from_raw(2);

    ctx.set_stream(Some(&handle), Some(&StreamRef::from_raw(0x55))).unwrap();
    ctx.set_stream(Some(&handle), Some(&StreamRef::default_stream()))
        .unwrap();

    assert_eq!(
        ctx.native().calls(),
        vec![
            NativeCall::SetStream {
                plan: 2,
                stream: StreamAddress(0x55)
            },
            NativeCall::SetStream {
                plan: 2,
                stream: StreamAddress::DEFAULT
            },
        ]
    );
}

#[test]
fn configuration_null_checks() {
    let ctx = context();
    let handle = CufftHandle::new();

    let err = ctx.set_work_area(Some(&handle), None).unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "workArea",
            function: "cufftSetWorkArea"
        }
    );
    let err = ctx.set_stream(Some(&handle), None).unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "stream",
            function: "cufftSetStream"
        }
    );
    assert!(ctx.set_auto_allocation(None, 1).is_err());
    assert!(ctx.create(None).is_err());
    assert!(ctx.destroy(None).is_err());
    assert_eq!(ctx.native().call_count(), 0);
}

#[test]
fn version_and_properties() {
    let ctx = context_with(
        RecordingCufft::new()
            .with_version(11_305)
            .with_properties(11, 3, 5),
    );
    let mut version = [0];
    let mut values = [[0]; 3];

    ctx.get_version(Some(&mut version)).unwrap();
    for (property, value) in LibraryProperty::ALL.into_iter().zip(values.iter_mut()) {
        ctx.get_property(property.raw(), Some(value)).unwrap();
    }

    assert_eq!(version, [11_305]);
    assert_eq!(values, [[11], [3], [5]]);
    assert_eq!(ctx.native().call_count(), 4);
}

#[test]
fn version_and_property_require_out_arrays() {
    let ctx = context();

    let err = ctx.get_version(None).unwrap_err();
    assert_eq!(err.to_string(), "Parameter 'version' is null for cufftGetVersion");
    let err = ctx.get_property(0, Some(&mut [0i32; 0])).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::IndexOutOfBounds);
    assert_eq!(ctx.native().call_count(), 0);
}

#[test]
fn compatibility_mode_is_unsupported() {
    let ctx = context();
    let handle = CufftHandle::from_raw(1);

    for (plan, mode) in [(Some(&handle), 0), (None, 1), (Some(&handle), -5)] {
        let result = ctx.set_compatibility_mode(plan, mode);
        let err = result.clone().unwrap_err();
        assert_eq!(err.kind(), ViolationKind::UnsupportedOperation);
        assert_eq!(
            err.to_string(),
            "Function cufftSetCompatibilityMode was removed in CUDA version 9.1."
        );
        assert_eq!(status_of(&result), CufftStatus::BRIDGE_INTERNAL_ERROR);
    }
    assert_eq!(ctx.native().call_count(), 0);
}

#[test]
fn set_log_level_applies_to_log_facade() {
    let ctx = context();

    ctx.set_log_level(5);

    assert_eq!(log::max_level(), log::LevelFilter::Trace);
}
