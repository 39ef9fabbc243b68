//! Plan construction: `cufftPlan*` and `cufftMakePlan*`.
//!
//! Every operation here reads the handle's plan field, calls native code and
//! writes the (possibly changed) plan value back, whatever the native result.
//! The `Make` variants additionally write the work size to `work_size[0]`.

use crate::context::BindingContext;
use crate::error::BindingResult;
use crate::host::ManagedHost;
use crate::marshal::{require, require_out, write_work_size, Descriptors};
use crate::native::CufftApi;
use crate::status::CufftStatus;

impl<N: CufftApi, H: ManagedHost> BindingContext<N, H> {
    /// `cufftPlan1d`
    pub fn plan_1d(
        &self,
        handle: Option<&mut H::Handle>,
        nx: i32,
        ty: i32,
        batch: i32,
    ) -> BindingResult {
        let handle = require(handle, "handle", "cufftPlan1d")?;

        log::trace!("Creating 1D plan for {} elements of type {}", nx, ty);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut plan = self.read_plan(handle);
        let result = self.native.plan_1d(&mut plan, nx, ty, batch);
        self.write_plan(handle, plan);
        Ok(result)
    }

    /// `cufftPlan2d`
    pub fn plan_2d(&self, handle: Option<&mut H::Handle>, nx: i32, ny: i32, ty: i32) -> BindingResult {
        let handle = require(handle, "handle", "cufftPlan2d")?;

        log::trace!("Creating 2D plan for ({}, {}) elements of type {}", nx, ny, ty);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut plan = self.read_plan(handle);
        let result = self.native.plan_2d(&mut plan, nx, ny, ty);
        self.write_plan(handle, plan);
        Ok(result)
    }

    /// `cufftPlan3d`
    pub fn plan_3d(
        &self,
        handle: Option<&mut H::Handle>,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
    ) -> BindingResult {
        let handle = require(handle, "handle", "cufftPlan3d")?;

        log::trace!(
            "Creating 3D plan for ({}, {}, {}) elements of type {}",
            nx,
            ny,
            nz,
            ty
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut plan = self.read_plan(handle);
        let result = self.native.plan_3d(&mut plan, nx, ny, nz, ty);
        self.write_plan(handle, plan);
        Ok(result)
    }

    /// `cufftPlanMany`
    #[allow(clippy::too_many_arguments)]
    pub fn plan_many(
        &self,
        handle: Option<&mut H::Handle>,
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
    ) -> BindingResult {
        const FUNCTION: &str = "cufftPlanMany";
        let handle = require(handle, "handle", FUNCTION)?;
        let n = require(n, "n", FUNCTION)?;

        log::trace!(
            "Executing cufftPlanMany(rank={}, n={:?}, type={}, batch={})",
            rank,
            n,
            ty,
            batch
        );

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let mut plan = self.read_plan(handle);
        let mut descriptors = Descriptors::copy_in(n, inembed, onembed);
        let layout = descriptors.layout(rank, istride, idist, ostride, odist, batch);
        let result = self.native.plan_many(&mut plan, layout, ty);
        self.write_plan(handle, plan);
        Ok(result)
    }

    /// `cufftMakePlan1d`
    pub fn make_plan_1d(
        &self,
        plan: Option<&mut H::Handle>,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftMakePlan1d";
        let handle = require(plan, "plan", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!("Executing cufftMakePlan1d(nx={}, type={}, batch={})", nx, ty, batch);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self
            .native
            .make_plan_1d(plan, nx, ty, batch, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftMakePlan2d`
    pub fn make_plan_2d(
        &self,
        plan: Option<&mut H::Handle>,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftMakePlan2d";
        let handle = require(plan, "plan", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!("Executing cufftMakePlan2d(nx={}, ny={}, type={})", nx, ny, ty);

        let Some(ty) = self.transform_type(ty) else {
            return Ok(CufftStatus::INVALID_TYPE);
        };
        let plan = self.read_plan(handle);
        let mut native_work_size = 0usize;
        let result = self
            .native
            .make_plan_2d(plan, nx, ny, ty, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftMakePlan3d`
    pub fn make_plan_3d(
        &self,
        plan: Option<&mut H::Handle>,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<&mut [i64]>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftMakePlan3d";
        let handle = require(plan, "plan", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftMakePlan3d(nx={}, ny={}, nz={}, type={})",
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
            .make_plan_3d(plan, nx, ny, nz, ty, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftMakePlanMany`
    #[allow(clippy::too_many_arguments)]
    pub fn make_plan_many(
        &self,
        plan: Option<&mut H::Handle>,
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
        const FUNCTION: &str = "cufftMakePlanMany";
        let handle = require(plan, "plan", FUNCTION)?;
        let n = require(n, "n", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftMakePlanMany(rank={}, n={:?}, type={}, batch={})",
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
            .make_plan_many(plan, layout, ty, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }

    /// `cufftMakePlanMany64`
    #[allow(clippy::too_many_arguments)]
    pub fn make_plan_many64(
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
        const FUNCTION: &str = "cufftMakePlanMany64";
        let handle = require(plan, "plan", FUNCTION)?;
        let n = require(n, "n", FUNCTION)?;
        let work_size = require_out(work_size, "workSize", FUNCTION)?;

        log::trace!(
            "Executing cufftMakePlanMany64(rank={}, n={:?}, type={}, batch={})",
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
            .make_plan_many64(plan, layout, ty, &mut native_work_size);
        self.write_plan(handle, plan);
        write_work_size(work_size, native_work_size);
        Ok(result)
    }
}
