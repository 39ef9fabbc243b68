#![cfg(test)]

use super::_tests_support::{capture_logs, context, context_with, errors};
use super::error::BindingError;
use super::host::CufftHandle;
use super::recording::{NativeCall, RecordedLayout, RecordingCufft};
use super::status::CufftStatus;
use super::transform::CufftType;

#[test]
fn estimates_report_native_work_size() {
    let ctx = context_with(RecordingCufft::new().with_work_size(4096));
    let mut ws = [[0i64]; 4];
    let n = [32, 32];

    ctx.estimate_1d(1024, 0x29, 2, Some(&mut ws[0])).unwrap();
    ctx.estimate_2d(64, 64, 0x2a, Some(&mut ws[1])).unwrap();
    ctx.estimate_3d(16, 16, 16, 0x6a, Some(&mut ws[2])).unwrap();
    ctx.estimate_many(2, Some(&n), None, 1, 1024, None, 1, 1024, 0x69, 8, Some(&mut ws[3]))
        .unwrap();

    assert_eq!(ws, [[4096]; 4]);
    let calls = ctx.native().calls();
    assert_eq!(
        calls[..3],
        [
            NativeCall::Estimate1d {
                nx: 1024,
                ty: CufftType::C2C,
                batch: 2
            },
            NativeCall::Estimate2d {
                nx: 64,
                ny: 64,
                ty: CufftType::R2C
            },
            NativeCall::Estimate3d {
                nx: 16,
                ny: 16,
                nz: 16,
                ty: CufftType::D2Z
            },
        ]
    );
    assert_eq!(
        calls[3],
        NativeCall::EstimateMany {
            layout: RecordedLayout {
                rank: 2,
                n: vec![32, 32],
                inembed: None,
                istride: 1,
                idist: 1024,
                onembed: None,
                ostride: 1,
                odist: 1024,
                batch: 8,
            },
            ty: CufftType::Z2Z,
        }
    );
}

#[test]
fn estimate_requires_work_size() {
    let ctx = context();

    let err = ctx.estimate_1d(8, 0x29, 1, None).unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "workSize",
            function: "cufftEstimate1d"
        }
    );
    assert!(ctx.estimate_2d(8, 8, 0x29, None).is_err());
    assert!(ctx.estimate_3d(8, 8, 8, 0x29, None).is_err());

    let err = ctx
        .estimate_many(1, None, None, 1, 8, None, 1, 8, 0x29, 1, Some(&mut [0i64]))
        .unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "n",
            function: "cufftEstimateMany"
        }
    );
    assert_eq!(ctx.native().call_count(), 0);
}

#[test]
fn work_size_written_even_when_native_fails() {
    let native = RecordingCufft::new()
        .with_work_size(12)
        .with_result(CufftStatus::INVALID_VALUE);
    let ctx = context_with(native);
    let mut ws = [99i64];

    let status = ctx.estimate_1d(-1, 0x29, 1, Some(&mut ws)).unwrap();

    assert_eq!(status, CufftStatus::INVALID_VALUE);
    assert_eq!(ws, [12]);
}

#[test]
fn get_size_queries_use_current_plan() {
    let ctx = context_with(RecordingCufft::new().with_work_size(2048));
    let handle = CufftHandle::from_raw(7);
    let mut ws = [[0i64]; 5];
    let n = [100];

    ctx.get_size_1d(Some(&handle), 100, 0x29, 1, Some(&mut ws[0])).unwrap();
    ctx.get_size_2d(Some(&handle), 10, 10, 0x2c, Some(&mut ws[1])).unwrap();
    ctx.get_size_3d(Some(&handle), 4, 5, 5, 0x6c, Some(&mut ws[2])).unwrap();
    ctx.get_size_many(Some(&handle), 1, Some(&n), None, 1, 100, None, 1, 100, 0x29, 1, Some(&mut ws[3]))
        .unwrap();
    ctx.get_size(Some(&handle), Some(&mut ws[4])).unwrap();

    assert_eq!(ws, [[2048]; 5]);
    let calls = ctx.native().calls();
    assert_eq!(
        calls[0],
        NativeCall::GetSize1d {
            plan: 7,
            nx: 100,
            ty: CufftType::C2C,
            batch: 1
        }
    );
    assert_eq!(
        calls[1],
        NativeCall::GetSize2d {
            plan: 7,
            nx: 10,
            ny: 10,
            ty: CufftType::C2R
        }
    );
    assert_eq!(
        calls[2],
        NativeCall::GetSize3d {
            plan: 7,
            nx: 4,
            ny: 5,
            nz: 5,
            ty: CufftType::Z2D
        }
    );
    assert!(matches!(calls[3], NativeCall::GetSizeMany { plan: 7, .. }));
    assert_eq!(calls[4], NativeCall::GetSize { plan: 7 });
}

#[test]
fn get_size_many64_passes_null_embeddings_through() {
    let ctx = context_with(RecordingCufft::new().with_work_size(16_384));
    let mut handle = CufftHandle::from_raw(7);
    let mut ws = [0i64];
    let n = [1024i64];

    let status = ctx
        .get_size_many64(
            Some(&mut handle),
            1,
            Some(&n),
            None,
            1,
            1024,
            None,
            1,
            1024,
            0x29,
            1,
            Some(&mut ws),
        )
        .unwrap();

    assert_eq!(status, CufftStatus::SUCCESS);
    assert_eq!(ws, [16_384]);
    assert_eq!(handle.plan(), 7);
    assert_eq!(
        ctx.native().calls(),
        vec![NativeCall::GetSizeMany64 {
            plan: 7,
            layout: RecordedLayout {
                rank: 1,
                n: vec![1024],
                inembed: None,
                istride: 1,
                idist: 1024,
                onembed: None,
                ostride: 1,
                odist: 1024,
                batch: 1,
            },
            ty: CufftType::C2C,
        }]
    );
}

#[test]
fn get_size_family_null_checks() {
    let ctx = context();
    let handle = CufftHandle::new();

    let err = ctx.get_size(None, Some(&mut [0i64])).unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "plan",
            function: "cufftGetSize"
        }
    );
    let err = ctx.get_size(Some(&handle), None).unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "workSize",
            function: "cufftGetSize"
        }
    );
    let err = ctx
        .get_size_many64(None, 1, Some(&[8i64]), None, 1, 8, None, 1, 8, 0x29, 1, Some(&mut [0i64]))
        .unwrap_err();
    assert_eq!(
        err,
        BindingError::NullArgument {
            parameter: "plan",
            function: "cufftGetSizeMany64"
        }
    );
    assert!(ctx.get_size_1d(None, 8, 0x29, 1, Some(&mut [0i64])).is_err());
    assert!(ctx.get_size_2d(Some(&handle), 8, 8, 0x29, None).is_err());
    assert!(ctx
        .get_size_many(Some(&handle), 1, None, None, 1, 8, None, 1, 8, 0x29, 1, Some(&mut [0i64]))
        .is_err());
    assert_eq!(ctx.native().call_count(), 0);
}

#[test]
fn sizing_unknown_type_logs_and_falls_back() {
    let ctx = context();
    let mut ws = [0i64];

    let (status, logs) = capture_logs(|| ctx.estimate_2d(8, 8, 0x2b, Some(&mut ws)));

    assert_eq!(status.unwrap(), CufftStatus::SUCCESS);
    assert_eq!(errors(&logs), vec!["Invalid cufftType specified: 43"]);
    assert_eq!(
        ctx.native().calls(),
        vec![NativeCall::Estimate2d {
            nx: 8,
            ny: 8,
            ty: CufftType::C2C
        }]
    );
}
