//! Work-area sizing: `cufftEstimate*` and `cufftGetSize*`.
//!
//! Pure queries. The native work size always lands in `work_size[0]`, even
//! when cuFFT reports an error.

use crate::context::BindingContext;
use crate::error::BindingResult;
use crate::host::ManagedHost;
use crate::marshal::{require, require_out, write_work_size, Descriptors};
use crate::native::CufftApi;
use crate::status::CufftStatus;

impl<N: CufftApi, H: ManagedHost> BindingContext<N, H> {
    /// `cufftEstimate1d`
    pub fn estimate_1d(
        &self,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        let work_size = require_out(work_size, "workSize", "cufftEstimate1d")?;

        log::trace!("Executing cufftEstimate1d(nx={}, type={}, batch={})", nx, ty, batch);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut native_work_size = 0usize;
        let result = self.native.estimate_1d(nx, ty, batch, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftEstimate2d`
    pub fn estimate_2d(
        &self,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        let work_size = require_out(work_size, "workSize", "cufftEstimate2d")?;

        log::trace!("Executing cufftEstimate2d(nx={}, ny={}, type={})", nx, ny, ty);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut native_work_size = 0usize;
        let result = self.native.estimate_2d(nx, ny, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftEstimate3d`
    pub fn estimate_3d(
        &self,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        let work_size = require_out(work_size, "workSize", "cufftEstimate3d")?;

        log::trace!(
            "Executing cufftEstimate3d(nx={}, ny={}, nz={}, type={})",
            nx,
            ny,
            nz,
            ty
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut native_work_size = 0usize;
        let result = self
            .native
            .estimate_3d(nx, ny, nz, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftEstimateMany`
    #[allow(clippy::too_many_arguments)]
    pub fn estimate_many(
        &self,
        rank: i32,
        n: Option<&[i32]>,
        inembed: Option<&[i32]>,
        istride: i32,
        idist: i32,
        onembed: Option<&[i32]>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftEstimateMany";
        let n = require(n, "n", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftEstimateMany(rank={}, n={:?}, type={}, batch={})",
            rank,
            n,
            ty,
            batch
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut native_work_size = 0usize;
        let mut descriptors = Descriptors::copy_in(n, inembed, onembed);
        let layout = descriptors.layout(rank, istride, idist, ostride, odist, batch);
        let result = self.native.estimate_many(layout, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSize1d`
    pub fn get_size_1d(
        &self,
        handle: Option<&H::Handle>,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftGetSize1d";
        let handle = require(handle, "handle", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!("Executing cufftGetSize1d(nx={}, type={}, batch={})", nx, ty, batch);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self
            .native
            .get_size_1d(plan, nx, ty, batch, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSize2d`
    pub fn get_size_2d(
        &self,
        handle: Option<&H::Handle>,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftGetSize2d";
        let handle = require(handle, "handle", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!("Executing cufftGetSize2d(nx={}, ny={}, type={})", nx, ny, ty);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self
            .native
            .get_size_2d(plan, nx, ny, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSize3d`
    pub fn get_size_3d(
        &self,
        handle: Option<&H::Handle>,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftGetSize3d";
        let handle = require(handle, "handle", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftGetSize3d(nx={}, ny={}, nz={}, type={})",
            nx,
            ny,
            nz,
            ty
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self
            .native
            .get_size_3d(plan, nx, ny, nz, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSizeMany`
    #[allow(clippy::too_many_arguments)]
    pub fn get_size_many(
        &self,
        plan: Option<&H::Handle>,
        rank: i32,
        n: Option<&[i32]>,
        inembed: Option<&[i32]>,
        istride: i32,
        idist: i32,
        onembed: Option<&[i32]>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftGetSizeMany";
        let handle = require(plan, "plan", FUNCTION)?;
        let n = require(n, "n", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftGetSizeMany(rank={}, n={:?}, type={}, batch={})",
            rank,
            n,
            ty,
            batch
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let mut descriptors = Descriptors::copy_in(n, inembed, onembed);
        let layout = descriptors.layout(rank, istride, idist, ostride, odist, batch);
        let result = self
            .native
            .get_size_many(plan, layout, ty, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSizeMany64`
    ///
    /// Unlike the other size queries this one writes the plan value back to
    /// the handle, like the `cufftMakePlan*` family.
    #[allow(clippy::too_many_arguments)]
    pub fn get_size_many64(
        &self,
        plan: Option<&mut H::Handle>,
        rank: i32,
        n: Option<&[i64]>,
        inembed: Option<&[i64]>,
        istride: i64,
        idist: i64,
        onembed: Option<&[i64]>,
        ostride: i64,
        odist: i64,
        ty: i32,
        batch: i64,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftGetSizeMany64";
        let handle = require(plan, "plan", FUNCTION)?;
        let n = require(n, "n", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftGetSizeMany64(rank={}, n={:?}, type={}, batch={})",
            rank,
            n,
            ty,
            batch
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let mut descriptors = Descriptors::copy_in(n, inembed, onembed);
        let layout = descriptors.layout(rank, istride, idist, ostride, odist, batch);
        let result = self
            .native
            .get_size_many64(plan, layout, ty, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftGetSize`: work size of the plan as currently configured.
    pub fn get_size(&self, plan: Option<&H::Handle>, work_size: Option<&mut [i64]>) -> BindingResult {
        const FUNCTION: &str = "cufftGetSize";
        let handle = require(plan, "plan", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!("Executing cufftGetSize");

        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self.native.get_size(plan, &mut native_work_size);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }
}
