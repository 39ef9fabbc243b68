#![cfg(test)]

use super::_tests_support::context;
use super::error::{BindingError, ViolationKind};
use super::host::{CufftHandle, Pointer, StreamRef};
use super::status::CufftStatus;

/// Every required reference argument of every routine, passed as `None` with
/// all other arguments valid.
#[test]
fn every_required_argument_is_null_checked() {
    let ctx = context();
    let mut handle = CufftHandle::from_raw(5);
    let area = Pointer::to_address(0x7200_0000);
    let stream = StreamRef::from_raw(0x40);
    let n = [8i32, 8];
    let n64 = [8i64, 8];

    let cases = [
        (ctx.get_version(None), "version", "cufftGetVersion"),
        (ctx.get_property(0, None), "value", "cufftGetProperty"),
        (ctx.plan_1d(None, 8, 0x29, 1), "handle", "cufftPlan1d"),
        (ctx.plan_2d(None, 8, 8, 0x29), "handle", "cufftPlan2d"),
        (ctx.plan_3d(None, 8, 8, 8, 0x29), "handle", "cufftPlan3d"),
        (
            ctx.plan_many(None, 2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1),
            "handle",
            "cufftPlanMany",
        ),
        (
            ctx.plan_many(Some(&mut handle), 2, None, None, 1, 64, None, 1, 64, 0x29, 1),
            "n",
            "cufftPlanMany",
        ),
        (ctx.create(None), "handle", "cufftCreate"),
        (ctx.destroy(None), "handle", "cufftDestroy"),
        (
            ctx.make_plan_1d(None, 8, 0x29, 1, Some(&mut [0i64])),
            "plan",
            "cufftMakePlan1d",
        ),
        (
            ctx.make_plan_1d(Some(&mut handle), 8, 0x29, 1, None),
            "workSize",
            "cufftMakePlan1d",
        ),
        (
            ctx.make_plan_2d(None, 8, 8, 0x29, Some(&mut [0i64])),
            "plan",
            "cufftMakePlan2d",
        ),
        (
            ctx.make_plan_2d(Some(&mut handle), 8, 8, 0x29, None),
            "workSize",
            "cufftMakePlan2d",
        ),
        (
            ctx.make_plan_3d(None, 8, 8, 8, 0x29, Some(&mut [0i64])),
            "plan",
            "cufftMakePlan3d",
        ),
        (
            ctx.make_plan_3d(Some(&mut handle), 8, 8, 8, 0x29, None),
            "workSize",
            "cufftMakePlan3d",
        ),
        (
            ctx.make_plan_many(None, 2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "plan",
            "cufftMakePlanMany",
        ),
        (
            ctx.make_plan_many(Some(&mut handle), 2, None, None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "n",
            "cufftMakePlanMany",
        ),
        (
            ctx.make_plan_many(Some(&mut handle), 2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1, None),
            "workSize",
            "cufftMakePlanMany",
        ),
        (
            ctx.make_plan_many64(None, 2, Some(&n64), None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "plan",
            "cufftMakePlanMany64",
        ),
        (
            ctx.make_plan_many64(Some(&mut handle), 2, None, None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "n",
            "cufftMakePlanMany64",
        ),
        (
            ctx.make_plan_many64(Some(&mut handle), 2, Some(&n64), None, 1, 64, None, 1, 64, 0x29, 1, None),
            "workSize",
            "cufftMakePlanMany64",
        ),
        (ctx.estimate_1d(8, 0x29, 1, None), "workSize", "cufftEstimate1d"),
        (ctx.estimate_2d(8, 8, 0x29, None), "workSize", "cufftEstimate2d"),
        (ctx.estimate_3d(8, 8, 8, 0x29, None), "workSize", "cufftEstimate3d"),
        (
            ctx.estimate_many(2, None, None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "n",
            "cufftEstimateMany",
        ),
        (
            ctx.estimate_many(2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1, None),
            "workSize",
            "cufftEstimateMany",
        ),
        (
            ctx.get_size_1d(None, 8, 0x29, 1, Some(&mut [0i64])),
            "handle",
            "cufftGetSize1d",
        ),
        (
            ctx.get_size_1d(Some(&handle), 8, 0x29, 1, None),
            "workSize",
            "cufftGetSize1d",
        ),
        (
            ctx.get_size_2d(None, 8, 8, 0x29, Some(&mut [0i64])),
            "handle",
            "cufftGetSize2d",
        ),
        (
            ctx.get_size_2d(Some(&handle), 8, 8, 0x29, None),
            "workSize",
            "cufftGetSize2d",
        ),
        (
            ctx.get_size_3d(None, 8, 8, 8, 0x29, Some(&mut [0i64])),
            "handle",
            "cufftGetSize3d",
        ),
        (
            ctx.get_size_3d(Some(&handle), 8, 8, 8, 0x29, None),
            "workSize",
            "cufftGetSize3d",
        ),
        (
            ctx.get_size_many(None, 2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "plan",
            "cufftGetSizeMany",
        ),
        (
            ctx.get_size_many(Some(&handle), 2, None, None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "n",
            "cufftGetSizeMany",
        ),
        (
            ctx.get_size_many(Some(&handle), 2, Some(&n), None, 1, 64, None, 1, 64, 0x29, 1, None),
            "workSize",
            "cufftGetSizeMany",
        ),
        (
            ctx.get_size_many64(None, 2, Some(&n64), None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "plan",
            "cufftGetSizeMany64",
        ),
        (
            ctx.get_size_many64(Some(&mut handle), 2, None, None, 1, 64, None, 1, 64, 0x29, 1, Some(&mut [0i64])),
            "n",
            "cufftGetSizeMany64",
        ),
        (
            ctx.get_size_many64(Some(&mut handle), 2, Some(&n64), None, 1, 64, None, 1, 64, 0x29, 1, None),
            "workSize",
            "cufftGetSizeMany64",
        ),
        (ctx.get_size(None, Some(&mut [0i64])), "plan", "cufftGetSize"),
        (ctx.get_size(Some(&handle), None), "workSize", "cufftGetSize"),
        (ctx.set_work_area(None, Some(&area)), "plan", "cufftSetWorkArea"),
        (ctx.set_work_area(Some(&handle), None), "workArea", "cufftSetWorkArea"),
        (ctx.set_auto_allocation(None, 1), "plan", "cufftSetAutoAllocation"),
        (ctx.set_stream(None, Some(&stream)), "handle", "cufftSetStream"),
        (ctx.set_stream(Some(&handle), None), "stream", "cufftSetStream"),
    ];

    for (result, parameter, function) in cases {
        let err = result.unwrap_err();
        assert_eq!(
            err,
            BindingError::NullArgument {
                parameter,
                function
            },
            "{} {}",
            function,
            parameter
        );
        assert_eq!(err.kind(), ViolationKind::NullPointer);
        assert_eq!(err.status(), CufftStatus::BRIDGE_INTERNAL_ERROR);
    }
    assert_eq!(ctx.native().call_count(), 0);
    assert_eq!(handle.plan(), 5);
}
