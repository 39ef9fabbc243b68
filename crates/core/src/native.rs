//! The native seam: one method per cuFFT routine.
//!
//! Implementations translate these calls into the C ABI (`LinkedCufft` in
//! `cufft-bridge-cuda`) or record them (`RecordingCufft`). Signatures mirror
//! the C prototypes with pointers replaced by borrows, so the bridge above
//! this trait stays free of `unsafe`.

use crate::status::CufftStatus;
use crate::transform::CufftType;

/// cuFFT plan handle (`cufftHandle`).
pub type PlanId = i32;

/// Raw device address of a buffer owned by the pointer-marshalling side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceAddress(pub usize);

impl DeviceAddress {
    pub const NULL: Self = Self(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

/// Raw `cudaStream_t` value. Zero is the legacy default stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StreamAddress(pub usize);

impl StreamAddress {
    pub const DEFAULT: Self = Self(0);

    pub fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

/// Advanced data layout for the `*Many` routines.
///
/// `T` is `i32` for the classic entry points and `i64` for the `*64` ones.
/// The descriptor slices are natively addressable copies owned by the bridge
/// for the duration of one call.
#[derive(Debug)]
pub struct ManyLayout<'a, T> {
    pub rank: i32,
    pub n: &'a mut [T],
    pub inembed: Option<&'a mut [T]>,
    pub istride: T,
    pub idist: T,
    pub onembed: Option<&'a mut [T]>,
    pub ostride: T,
    pub odist: T,
    pub batch: T,
}

/// The cuFFT C API.
///
/// Out-parameters are `&mut` slots; the native result code is returned as is.
pub trait CufftApi {
    fn get_version(&self, version: &mut i32) -> CufftStatus;
    fn get_property(&self, property: i32, value: &mut i32) -> CufftStatus;

    // Basic plans
    fn plan_1d(&self, plan: &mut PlanId, nx: i32, ty: CufftType, batch: i32) -> CufftStatus;
    fn plan_2d(&self, plan: &mut PlanId, nx: i32, ny: i32, ty: CufftType) -> CufftStatus;
    fn plan_3d(&self, plan: &mut PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType) -> CufftStatus;
    fn plan_many(&self, plan: &mut PlanId, layout: ManyLayout<'_, i32>, ty: CufftType) -> CufftStatus;

    // Extensible plans
    fn create(&self, plan: &mut PlanId) -> CufftStatus;
    fn make_plan_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn make_plan_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn make_plan_3d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn make_plan_many(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn make_plan_many64(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;

    // Estimates (no plan)
    fn estimate_1d(&self, nx: i32, ty: CufftType, batch: i32, work_size: &mut usize) -> CufftStatus;
    fn estimate_2d(&self, nx: i32, ny: i32, ty: CufftType, work_size: &mut usize) -> CufftStatus;
    fn estimate_3d(
        &self,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn estimate_many(
        &self,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;

    // Refined sizes for an existing plan
    fn get_size_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn get_size_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn get_size_3d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn get_size_many(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn get_size_many64(
        &self,
        plan: PlanId,
        layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus;
    fn get_size(&self, plan: PlanId, work_size: &mut usize) -> CufftStatus;

    // Work area and stream
    fn set_work_area(&self, plan: PlanId, work_area: DeviceAddress) -> CufftStatus;
    fn set_auto_allocation(&self, plan: PlanId, auto_allocate: i32) -> CufftStatus;
    fn set_stream(&self, plan: PlanId, stream: StreamAddress) -> CufftStatus;
    fn destroy(&self, plan: PlanId) -> CufftStatus;

    // Execution
    fn exec_c2c(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus;
    fn exec_r2c(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus;
    fn exec_c2r(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus;
    fn exec_z2z(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus;
    fn exec_d2z(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus;
    fn exec_z2d(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus;
}
