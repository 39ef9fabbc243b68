//! A native implementation that records calls instead of making them.
//!
//! `RecordingCufft` copies every argument it receives into a [`NativeCall`]
//! and answers from a small script: a fixed result code, the plan value to
//! hand out on plan creation, the work size, version and property values.
//! It backs the bridge tests and lets host front ends run without a GPU.

use parking_lot::Mutex;

use crate::native::{CufftApi, DeviceAddress, ManyLayout, PlanId, StreamAddress};
use crate::status::CufftStatus;
use crate::transform::CufftType;

/// Owned copy of a [`ManyLayout`] as seen by the native side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLayout<T> {
    pub rank: i32,
    pub n: Vec<T>,
    pub inembed: Option<Vec<T>>,
    pub istride: T,
    pub idist: T,
    pub onembed: Option<Vec<T>>,
    pub ostride: T,
    pub odist: T,
    pub batch: T,
}

impl<T: Copy> RecordedLayout<T> {
    fn capture(layout: &ManyLayout<'_, T>) -> Self {
        Self {
            rank: layout.rank,
            n: layout.n.to_vec(),
            inembed: layout.inembed.as_deref().map(<[T]>::to_vec),
            istride: layout.istride,
            idist: layout.idist,
            onembed: layout.onembed.as_deref().map(<[T]>::to_vec),
            ostride: layout.ostride,
            odist: layout.odist,
            batch: layout.batch,
        }
    }
}

/// One native call with its arguments. Plan fields hold the value the bridge
/// passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    GetVersion,
    GetProperty { property: i32 },
    Plan1d { plan: PlanId, nx: i32, ty: CufftType, batch: i32 },
    Plan2d { plan: PlanId, nx: i32, ny: i32, ty: CufftType },
    Plan3d { plan: PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType },
    PlanMany { plan: PlanId, layout: RecordedLayout<i32>, ty: CufftType },
    Create { plan: PlanId },
    MakePlan1d { plan: PlanId, nx: i32, ty: CufftType, batch: i32 },
    MakePlan2d { plan: PlanId, nx: i32, ny: i32, ty: CufftType },
    MakePlan3d { plan: PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType },
    MakePlanMany { plan: PlanId, layout: RecordedLayout<i32>, ty: CufftType },
    MakePlanMany64 { plan: PlanId, layout: RecordedLayout<i64>, ty: CufftType },
    Estimate1d { nx: i32, ty: CufftType, batch: i32 },
    Estimate2d { nx: i32, ny: i32, ty: CufftType },
    Estimate3d { nx: i32, ny: i32, nz: i32, ty: CufftType },
    EstimateMany { layout: RecordedLayout<i32>, ty: CufftType },
    GetSize1d { plan: PlanId, nx: i32, ty: CufftType, batch: i32 },
    GetSize2d { plan: PlanId, nx: i32, ny: i32, ty: CufftType },
    GetSize3d { plan: PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType },
    GetSizeMany { plan: PlanId, layout: RecordedLayout<i32>, ty: CufftType },
    GetSizeMany64 { plan: PlanId, layout: RecordedLayout<i64>, ty: CufftType },
    GetSize { plan: PlanId },
    SetWorkArea { plan: PlanId, work_area: DeviceAddress },
    SetAutoAllocation { plan: PlanId, auto_allocate: i32 },
    SetStream { plan: PlanId, stream: StreamAddress },
    Destroy { plan: PlanId },
    ExecC2C { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress, direction: i32 },
    ExecR2C { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress },
    ExecC2R { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress },
    ExecZ2Z { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress, direction: i32 },
    ExecD2Z { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress },
    ExecZ2D { plan: PlanId, idata: DeviceAddress, odata: DeviceAddress },
}

#[derive(Debug, Clone)]
struct Script {
    result: CufftStatus,
    next_plan: PlanId,
    work_size: usize,
    version: i32,
    properties: [i32; 3],
}

impl Default for Script {
    fn default() -> Self {
        Self {
            result: CufftStatus::SUCCESS,
            next_plan: 1,
            work_size: 0,
            version: 12_000,
            properties: [12, 0, 0],
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCufft {
    script: Mutex<Script>,
    calls: Mutex<Vec<NativeCall>>,
    descriptor_addresses: Mutex<Vec<usize>>,
}

impl RecordingCufft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result code returned by every subsequent call.
    pub fn with_result(self, result: CufftStatus) -> Self {
        self.set_result(result);
        self
    }

    /// Plan value handed out by the next plan-creating call. Later calls
    /// count up from it.
    pub fn with_next_plan(self, plan: PlanId) -> Self {
        self.script.lock().next_plan = plan;
        self
    }

    /// Work size reported by every sizing call.
    pub fn with_work_size(self, bytes: usize) -> Self {
        self.script.lock().work_size = bytes;
        self
    }

    pub fn with_version(self, version: i32) -> Self {
        self.script.lock().version = version;
        self
    }

    pub fn with_properties(self, major: i32, minor: i32, patch: i32) -> Self {
        self.script.lock().properties = [major, minor, patch];
        self
    }

    pub fn set_result(&self, result: CufftStatus) {
        self.script.lock().result = result;
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<NativeCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Address of the `n` array the native side saw, per `*Many` call.
    pub fn descriptor_addresses(&self) -> Vec<usize> {
        self.descriptor_addresses.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
        self.descriptor_addresses.lock().clear();
    }

    fn record(&self, call: NativeCall) -> CufftStatus {
        self.calls.lock().push(call);
        self.script.lock().result
    }

    fn record_layout<T: Copy>(&self, layout: &ManyLayout<'_, T>) -> RecordedLayout<T> {
        self.descriptor_addresses
            .lock()
            .push(layout.n.as_ptr() as usize);
        RecordedLayout::capture(layout)
    }

    fn issue_plan(&self, plan: &mut PlanId) {
        let mut script = self.script.lock();
        *plan = script.next_plan;
        script.next_plan = script.next_plan.wrapping_add(1);
    }

    fn report_work_size(&self, work_size: &mut usize) {
        *work_size = self.script.lock().work_size;
    }
}

impl CufftApi for RecordingCufft {
    fn get_version(&self, version: &mut i32) -> CufftStatus {
        *version = self.script.lock().version;
        self.record(NativeCall::GetVersion)
    }

    fn get_property(&self, property: i32, value: &mut i32) -> CufftStatus {
        let properties = self.script.lock().properties;
        if let Some(v) = usize::try_from(property).ok().and_then(|i| properties.get(i)) {
            *value = *v;
        }
        self.record(NativeCall::GetProperty { property })
    }

    fn plan_1d(&self, plan: &mut PlanId, nx: i32, ty: CufftType, batch: i32) -> CufftStatus {
        let call = NativeCall::Plan1d { plan: *plan, nx, ty, batch };
        self.issue_plan(plan);
        self.record(call)
    }

    fn plan_2d(&self, plan: &mut PlanId, nx: i32, ny: i32, ty: CufftType) -> CufftStatus {
        let call = NativeCall::Plan2d { plan: *plan, nx, ny, ty };
        self.issue_plan(plan);
        self.record(call)
    }

    fn plan_3d(&self, plan: &mut PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType) -> CufftStatus {
        let call = NativeCall::Plan3d { plan: *plan, nx, ny, nz, ty };
        self.issue_plan(plan);
        self.record(call)
    }

    fn plan_many(&self, plan: &mut PlanId, layout: ManyLayout<'_, i32>, ty: CufftType) -> CufftStatus {
        let layout = self.record_layout(&layout);
        let call = NativeCall::PlanMany { plan: *plan, layout, ty };
        self.issue_plan(plan);
        self.record(call)
    }

    fn create(&self, plan: &mut PlanId) -> CufftStatus {
        let call = NativeCall::Create { plan: *plan };
        self.issue_plan(plan);
        self.record(call)
    }

    fn make_plan_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::MakePlan1d { plan, nx, ty, batch })
    }

    fn make_plan_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::MakePlan2d { plan, nx, ny, ty })
    }

    fn make_plan_3d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::MakePlan3d { plan, nx, ny, nz, ty })
    }

    fn make_plan_many(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        let layout = self.record_layout(&layout);
        self.report_work_size(work_size);
        self.record(NativeCall::MakePlanMany { plan, layout, ty })
    }

    fn make_plan_many64(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        let layout = self.record_layout(&layout);
        self.report_work_size(work_size);
        self.record(NativeCall::MakePlanMany64 { plan, layout, ty })
    }

    fn estimate_1d(&self, nx: i32, ty: CufftType, batch: i32, work_size: &mut usize) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::Estimate1d { nx, ty, batch })
    }

    fn estimate_2d(&self, nx: i32, ny: i32, ty: CufftType, work_size: &mut usize) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::Estimate2d { nx, ny, ty })
    }

    fn estimate_3d(
        &self,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::Estimate3d { nx, ny, nz, ty })
    }

    fn estimate_many(
        &self,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        let layout = self.record_layout(&layout);
        self.report_work_size(work_size);
        self.record(NativeCall::EstimateMany { layout, ty })
    }

    fn get_size_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::GetSize1d { plan, nx, ty, batch })
    }

    fn get_size_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::GetSize2d { plan, nx, ny, ty })
    }

    fn get_size_3d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::GetSize3d { plan, nx, ny, nz, ty })
    }

    fn get_size_many(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        let layout = self.record_layout(&layout);
        self.report_work_size(work_size);
        self.record(NativeCall::GetSizeMany { plan, layout, ty })
    }

    fn get_size_many64(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        let layout = self.record_layout(&layout);
        self.report_work_size(work_size);
        self.record(NativeCall::GetSizeMany64 { plan, layout, ty })
    }

    fn get_size(&self, plan: PlanId, work_size: &mut usize) -> CufftStatus {
        self.report_work_size(work_size);
        self.record(NativeCall::GetSize { plan })
    }

    fn set_work_area(&self, plan: PlanId, work_area: DeviceAddress) -> CufftStatus {
        self.record(NativeCall::SetWorkArea { plan, work_area })
    }

    fn set_auto_allocation(&self, plan: PlanId, auto_allocate: i32) -> CufftStatus {
        self.record(NativeCall::SetAutoAllocation { plan, auto_allocate })
    }

    fn set_stream(&self, plan: PlanId, stream: StreamAddress) -> CufftStatus {
        self.record(NativeCall::SetStream { plan, stream })
    }

    fn destroy(&self, plan: PlanId) -> CufftStatus {
        self.record(NativeCall::Destroy { plan })
    }

    fn exec_c2c(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus {
        self.record(NativeCall::ExecC2C { plan, idata, odata, direction })
    }

    fn exec_r2c(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        self.record(NativeCall::ExecR2C { plan, idata, odata })
    }

    fn exec_c2r(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        self.record(NativeCall::ExecC2R { plan, idata, odata })
    }

    fn exec_z2z(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus {
        self.record(NativeCall::ExecZ2Z { plan, idata, odata, direction })
    }

    fn exec_d2z(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        self.record(NativeCall::ExecD2Z { plan, idata, odata })
    }

    fn exec_z2d(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        self.record(NativeCall::ExecZ2D { plan, idata, odata })
    }
}
