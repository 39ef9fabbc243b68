//! Linked cuFFT for cufft-bridge.
//!
//! [`LinkedCufft`] implements the native seam by calling straight into
//! `libcufft`. Without the `cuda` feature nothing is linked and every routine
//! reports `CUFFT_NOT_SUPPORTED`, so the bridge and its front ends still
//! build and run on machines without a CUDA toolkit.

pub mod cufft_sys;

#[cfg(feature = "cuda")]
pub mod device;

use std::ffi::c_void;
use std::ptr;

use cufft_bridge_core::native::{CufftApi, DeviceAddress, ManyLayout, PlanId, StreamAddress};
use cufft_bridge_core::{BindingContext, CufftStatus, CufftType, InitError, LocalHost};

use crate::cufft_sys::{cufftComplex, cufftDoubleComplex, cufftDoubleReal, cufftReal};

#[cfg(feature = "cuda")]
macro_rules! native {
    ($routine:ident($($arg:expr),* $(,)?)) => {
        // SAFETY: every pointer argument is either null where cuFFT accepts
        // null, or derived from a live borrow that outlives the call.
        CufftStatus(unsafe { cufft_sys::$routine($($arg),*) })
    };
}

#[cfg(not(feature = "cuda"))]
macro_rules! native {
    ($routine:ident($($arg:expr),* $(,)?)) => {{
        $(let _ = $arg;)*
        unlinked(stringify!($routine))
    }};
}

#[cfg(not(feature = "cuda"))]
fn unlinked(routine: &str) -> CufftStatus {
    log::debug!("{} unavailable: built without the `cuda` feature", routine);
    CufftStatus::NOT_SUPPORTED
}

/// The cuFFT library linked into this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedCufft;

impl LinkedCufft {
    pub fn new() -> Self {
        Self
    }

    /// Whether a CUDA device is usable from this build.
    #[cfg(feature = "cuda")]
    pub fn is_available() -> bool {
        cudarc::driver::CudaContext::new(0).is_ok()
    }

    #[cfg(not(feature = "cuda"))]
    pub fn is_available() -> bool {
        false
    }
}

/// Binding context over the linked library and the Rust-native host.
pub type CufftBridge = BindingContext<LinkedCufft, LocalHost>;

/// Initializes a [`CufftBridge`] with the default configuration.
pub fn initialize() -> Result<CufftBridge, InitError> {
    BindingContext::initialize(LinkedCufft::new(), LocalHost)
}

fn embed_ptr<T>(embed: Option<&mut [T]>) -> *mut T {
    embed.map_or(ptr::null_mut(), <[T]>::as_mut_ptr)
}

/// cuFFT reads `rank` entries from each descriptor array it is given.
fn covers_rank<T>(layout: &ManyLayout<'_, T>, routine: &str) -> bool {
    // Negative ranks are rejected by cuFFT before any descriptor is read.
    let Ok(rank) = usize::try_from(layout.rank) else {
        return true;
    };
    let short = |len: usize| len < rank;
    if short(layout.n.len())
        || layout.inembed.as_deref().is_some_and(|e| short(e.len()))
        || layout.onembed.as_deref().is_some_and(|e| short(e.len()))
    {
        log::warn!(
            "{}: descriptor arrays shorter than rank {}; not calling cuFFT",
            routine,
            rank
        );
        return false;
    }
    true
}

impl CufftApi for LinkedCufft {
    fn get_version(&self, version: &mut i32) -> CufftStatus {
        native!(cufftGetVersion(version as *mut i32))
    }

    fn get_property(&self, property: i32, value: &mut i32) -> CufftStatus {
        native!(cufftGetProperty(property, value as *mut i32))
    }

    fn plan_1d(&self, plan: &mut PlanId, nx: i32, ty: CufftType, batch: i32) -> CufftStatus {
        native!(cufftPlan1d(plan as *mut PlanId, nx, ty.raw(), batch))
    }

    fn plan_2d(&self, plan: &mut PlanId, nx: i32, ny: i32, ty: CufftType) -> CufftStatus {
        native!(cufftPlan2d(plan as *mut PlanId, nx, ny, ty.raw()))
    }

    fn plan_3d(&self, plan: &mut PlanId, nx: i32, ny: i32, nz: i32, ty: CufftType) -> CufftStatus {
        native!(cufftPlan3d(plan as *mut PlanId, nx, ny, nz, ty.raw()))
    }

    fn plan_many(&self, plan: &mut PlanId, mut layout: ManyLayout<'_, i32>, ty: CufftType) -> CufftStatus {
        if !covers_rank(&layout, "cufftPlanMany") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftPlanMany(
            plan as *mut PlanId,
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
        ))
    }

    fn create(&self, plan: &mut PlanId) -> CufftStatus {
        native!(cufftCreate(plan as *mut PlanId))
    }

    fn make_plan_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus {
        native!(cufftMakePlan1d(plan, nx, ty.raw(), batch, work_size as *mut usize))
    }

    fn make_plan_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        native!(cufftMakePlan2d(plan, nx, ny, ty.raw(), work_size as *mut usize))
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
        native!(cufftMakePlan3d(plan, nx, ny, nz, ty.raw(), work_size as *mut usize))
    }

    fn make_plan_many(
        &self,
        plan: PlanId,
        mut layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        if !covers_rank(&layout, "cufftMakePlanMany") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftMakePlanMany(
            plan,
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
            work_size as *mut usize,
        ))
    }

    fn make_plan_many64(
        &self,
        plan: PlanId,
        mut layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        if !covers_rank(&layout, "cufftMakePlanMany64") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftMakePlanMany64(
            plan,
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
            work_size as *mut usize,
        ))
    }

    fn estimate_1d(&self, nx: i32, ty: CufftType, batch: i32, work_size: &mut usize) -> CufftStatus {
        native!(cufftEstimate1d(nx, ty.raw(), batch, work_size as *mut usize))
    }

    fn estimate_2d(&self, nx: i32, ny: i32, ty: CufftType, work_size: &mut usize) -> CufftStatus {
        native!(cufftEstimate2d(nx, ny, ty.raw(), work_size as *mut usize))
    }

    fn estimate_3d(
        &self,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        native!(cufftEstimate3d(nx, ny, nz, ty.raw(), work_size as *mut usize))
    }

    fn estimate_many(
        &self,
        mut layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        if !covers_rank(&layout, "cufftEstimateMany") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftEstimateMany(
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
            work_size as *mut usize,
        ))
    }

    fn get_size_1d(
        &self,
        plan: PlanId,
        nx: i32,
        ty: CufftType,
        batch: i32,
        work_size: &mut usize,
    ) -> CufftStatus {
        native!(cufftGetSize1d(plan, nx, ty.raw(), batch, work_size as *mut usize))
    }

    fn get_size_2d(
        &self,
        plan: PlanId,
        nx: i32,
        ny: i32,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        native!(cufftGetSize2d(plan, nx, ny, ty.raw(), work_size as *mut usize))
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
        native!(cufftGetSize3d(plan, nx, ny, nz, ty.raw(), work_size as *mut usize))
    }

    fn get_size_many(
        &self,
        plan: PlanId,
        mut layout: ManyLayout<'_, i32>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        if !covers_rank(&layout, "cufftGetSizeMany") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftGetSizeMany(
            plan,
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
            work_size as *mut usize,
        ))
    }

    fn get_size_many64(
        &self,
        plan: PlanId,
        mut layout: ManyLayout<'_, i64>,
        ty: CufftType,
        work_size: &mut usize,
    ) -> CufftStatus {
        if !covers_rank(&layout, "cufftGetSizeMany64") {
            return CufftStatus::INVALID_VALUE;
        }
        native!(cufftGetSizeMany64(
            plan,
            layout.rank,
            layout.n.as_mut_ptr(),
            embed_ptr(layout.inembed),
            layout.istride,
            layout.idist,
            embed_ptr(layout.onembed),
            layout.ostride,
            layout.odist,
            ty.raw(),
            layout.batch,
            work_size as *mut usize,
        ))
    }

    fn get_size(&self, plan: PlanId, work_size: &mut usize) -> CufftStatus {
        native!(cufftGetSize(plan, work_size as *mut usize))
    }

    fn set_work_area(&self, plan: PlanId, work_area: DeviceAddress) -> CufftStatus {
        native!(cufftSetWorkArea(plan, work_area.as_mut_ptr::<c_void>()))
    }

    fn set_auto_allocation(&self, plan: PlanId, auto_allocate: i32) -> CufftStatus {
        native!(cufftSetAutoAllocation(plan, auto_allocate))
    }

    fn set_stream(&self, plan: PlanId, stream: StreamAddress) -> CufftStatus {
        native!(cufftSetStream(plan, stream.as_mut_ptr::<c_void>()))
    }

    fn destroy(&self, plan: PlanId) -> CufftStatus {
        native!(cufftDestroy(plan))
    }

    fn exec_c2c(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus {
        native!(cufftExecC2C(
            plan,
            idata.as_mut_ptr::<cufftComplex>(),
            odata.as_mut_ptr::<cufftComplex>(),
            direction,
        ))
    }

    fn exec_r2c(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        native!(cufftExecR2C(
            plan,
            idata.as_mut_ptr::<cufftReal>(),
            odata.as_mut_ptr::<cufftComplex>(),
        ))
    }

    fn exec_c2r(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        native!(cufftExecC2R(
            plan,
            idata.as_mut_ptr::<cufftComplex>(),
            odata.as_mut_ptr::<cufftReal>(),
        ))
    }

    fn exec_z2z(
        &self,
        plan: PlanId,
        idata: DeviceAddress,
        odata: DeviceAddress,
        direction: i32,
    ) -> CufftStatus {
        native!(cufftExecZ2Z(
            plan,
            idata.as_mut_ptr::<cufftDoubleComplex>(),
            odata.as_mut_ptr::<cufftDoubleComplex>(),
            direction,
        ))
    }

    fn exec_d2z(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        native!(cufftExecD2Z(
            plan,
            idata.as_mut_ptr::<cufftDoubleReal>(),
            odata.as_mut_ptr::<cufftDoubleComplex>(),
        ))
    }

    fn exec_z2d(&self, plan: PlanId, idata: DeviceAddress, odata: DeviceAddress) -> CufftStatus {
        native!(cufftExecZ2D(
            plan,
            idata.as_mut_ptr::<cufftDoubleComplex>(),
            odata.as_mut_ptr::<cufftDoubleReal>(),
        ))
    }
}
