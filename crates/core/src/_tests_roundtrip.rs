#![cfg(test)]

use super::_tests_support::context_with;
use super::host::{CufftHandle, Pointer, StreamRef};
use super::native::{DeviceAddress, StreamAddress};
use super::recording::{NativeCall, RecordedLayout, RecordingCufft};
use super::status::CufftStatus;
use super::transform::{CufftType, CUFFT_FORWARD};

#[test]
fn create_size_execute_destroy() {
    let ctx = context_with(RecordingCufft::new().with_next_plan(7).with_work_size(512));
    let mut handle = CufftHandle::new();
    let mut work_size = [0i64];
    let data = Pointer::to_address(0x1000);
    let stream = StreamRef::from_raw(0x2000);

    let statuses = [
        ctx.create(Some(&mut handle)).unwrap(),
        ctx.make_plan_1d(Some(&mut handle), 1024, 0x29, 1, Some(&mut work_size))
            .unwrap(),
        ctx.get_size(Some(&handle), Some(&mut work_size)).unwrap(),
        ctx.set_stream(Some(&handle), Some(&stream)).unwrap(),
        ctx.exec_c2c(Some(&handle), Some(&data), Some(&data), CUFFT_FORWARD)
            .unwrap(),
        ctx.destroy(Some(&handle)).unwrap(),
    ];

    assert!(statuses.iter().all(|s| s.is_success()));
    assert_eq!(handle.plan(), 7);
    assert_eq!(work_size, [512]);
    assert_eq!(
        ctx.native().calls(),
        vec![
            NativeCall::Create { plan: 0 },
            NativeCall::MakePlan1d {
                plan: 7,
                nx: 1024,
                ty: CufftType::C2C,
                batch: 1
            },
            NativeCall::GetSize { plan: 7 },
            NativeCall::SetStream {
                plan: 7,
                stream: StreamAddress(0x2000)
            },
            NativeCall::ExecC2C {
                plan: 7,
                idata: DeviceAddress(0x1000),
                odata: DeviceAddress(0x1000),
                direction: CUFFT_FORWARD
            },
            NativeCall::Destroy { plan: 7 },
        ]
    );
}

#[test]
fn batched_many_plan_lifecycle() {
    let ctx = context_with(RecordingCufft::new().with_next_plan(40).with_work_size(1 << 20));
    let mut handle = CufftHandle::new();
    let mut work_size = [0i64];
    let n = vec![128, 128];
    let inembed = vec![128, 130];
    let onembed = vec![128, 65];
    let input = Pointer::to_address(0xa000);
    let output = Pointer::to_address(0xb000);

    ctx.create(Some(&mut handle)).unwrap();
    ctx.set_auto_allocation(Some(&handle), 0).unwrap();
    let status = ctx
        .make_plan_many(
            Some(&mut handle),
            2,
            Some(n.as_slice()),
            Some(inembed.as_slice()),
            1,
            128 * 130,
            Some(onembed.as_slice()),
            1,
            128 * 65,
            0x2a,
            16,
            Some(&mut work_size),
        )
        .unwrap();
    let work_area = Pointer::to_address(0xc000);
    ctx.set_work_area(Some(&handle), Some(&work_area)).unwrap();
    ctx.exec_r2c(Some(&handle), Some(&input), Some(&output)).unwrap();
    ctx.destroy(Some(&handle)).unwrap();

    assert_eq!(status, CufftStatus::SUCCESS);
    assert_eq!(work_size, [1 << 20]);

    let calls = ctx.native().calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(
        calls[2],
        NativeCall::MakePlanMany {
            plan: 40,
            layout: RecordedLayout {
                rank: 2,
                n: n.clone(),
                inembed: Some(inembed.clone()),
                istride: 1,
                idist: 128 * 130,
                onembed: Some(onembed.clone()),
                ostride: 1,
                odist: 128 * 65,
                batch: 16,
            },
            ty: CufftType::R2C,
        }
    );
    assert_eq!(
        calls[3],
        NativeCall::SetWorkArea {
            plan: 40,
            work_area: DeviceAddress(0xc000)
        }
    );
    assert_eq!(calls[5], NativeCall::Destroy { plan: 40 });

    // The descriptor copy handed to native code is distinct from the caller's
    // array, and the caller's array is untouched.
    assert_ne!(ctx.native().descriptor_addresses()[0], n.as_ptr() as usize);
    assert_eq!(n, vec![128, 128]);
}
