//! The `Bridge` class: every cuFFT routine as a Python method.
//!
//! Out parameters are Python lists written at index 0. Argument violations
//! raise `ValueError` (null argument, empty out list) or
//! `NotImplementedError` (removed routine); native failures come back as
//! the integer `cufftResult`.

use std::path::PathBuf;

use pyo3::exceptions::{PyNotImplementedError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;

use cufft_bridge_core::{BindingContext, BindingError, BindingResult, BridgeConfig, ViolationKind};
use cufft_bridge_cuda::LinkedCufft;

use crate::types::{PyCufftHandle, PyHost, PyPointer, PyStream};

type Handle<'py> = Option<PyRef<'py, PyCufftHandle>>;
type HandleMut<'py> = Option<PyRefMut<'py, PyCufftHandle>>;
type Ptr<'py> = Option<PyRef<'py, PyPointer>>;

fn violation(err: BindingError) -> PyErr {
    match err.kind() {
        ViolationKind::UnsupportedOperation => PyNotImplementedError::new_err(err.to_string()),
        ViolationKind::NullPointer | ViolationKind::IndexOutOfBounds => {
            PyValueError::new_err(err.to_string())
        }
    }
}

fn status(result: BindingResult) -> PyResult<i32> {
    result.map(|status| status.code()).map_err(violation)
}

/// A Python list used as a one-element out parameter.
struct OutSlot<'py, T> {
    list: Option<Bound<'py, PyList>>,
    buffer: Vec<T>,
}

impl<'py, T> OutSlot<'py, T>
where
    T: Copy + Default + FromPyObject<'py> + IntoPyObject<'py>,
{
    fn new(list: Option<Bound<'py, PyList>>) -> Self {
        // Seeded with the caller's value so a call that writes nothing
        // leaves the list as it was.
        let buffer = match &list {
            Some(list) if !list.is_empty() => {
                vec![list.get_item(0).and_then(|v| v.extract()).unwrap_or_default()]
            }
            _ => Vec::new(),
        };
        Self { list, buffer }
    }

    fn slice(&mut self) -> Option<&mut [T]> {
        if self.list.is_some() {
            Some(&mut self.buffer)
        } else {
            None
        }
    }

    fn finish(self, result: BindingResult) -> PyResult<i32> {
        let code = status(result)?;
        if let (Some(list), Some(&value)) = (&self.list, self.buffer.first()) {
            list.set_item(0, value)?;
        }
        Ok(code)
    }
}

/// cuFFT bound to the Python host.
#[pyclass(name = "Bridge", module = "cufft_bridge", frozen)]
pub struct Bridge {
    ctx: BindingContext<LinkedCufft, PyHost>,
}

impl Bridge {
    pub fn with_config(config: BridgeConfig) -> PyResult<Self> {
        BindingContext::with_config(LinkedCufft::new(), PyHost, config)
            .map(|ctx| Self { ctx })
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}

#[pymethods]
impl Bridge {
    /// Builds a bridge, optionally from a TOML configuration file.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PathBuf>) -> PyResult<Self> {
        let config = match config {
            Some(path) => BridgeConfig::load(&path).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => BridgeConfig::default(),
        };
        Self::with_config(config)
    }

    /// Whether a CUDA device is usable from this build.
    #[staticmethod]
    #[pyo3(name = "isAvailable")]
    fn is_available() -> bool {
        LinkedCufft::is_available()
    }

    #[pyo3(name = "setLogLevel")]
    fn set_log_level(&self, level: i32) {
        self.ctx.set_log_level(level);
    }

    #[pyo3(name = "cufftGetVersion", signature = (version))]
    fn get_version<'py>(&self, version: Option<Bound<'py, PyList>>) -> PyResult<i32> {
        let mut slot = OutSlot::<i32>::new(version);
        let result = self.ctx.get_version(slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftGetProperty", signature = (property, value))]
    fn get_property<'py>(&self, property: i32, value: Option<Bound<'py, PyList>>) -> PyResult<i32> {
        let mut slot = OutSlot::<i32>::new(value);
        let result = self.ctx.get_property(property, slot.slice());
        slot.finish(result)
    }

    // ------------------------------------------------------------------
    // Basic plans
    // ------------------------------------------------------------------

    #[pyo3(name = "cufftPlan1d", signature = (plan, nx, ty, batch))]
    fn plan_1d(&self, mut plan: HandleMut<'_>, nx: i32, ty: i32, batch: i32) -> PyResult<i32> {
        status(self.ctx.plan_1d(plan.as_deref_mut(), nx, ty, batch))
    }

    #[pyo3(name = "cufftPlan2d", signature = (plan, nx, ny, ty))]
    fn plan_2d(&self, mut plan: HandleMut<'_>, nx: i32, ny: i32, ty: i32) -> PyResult<i32> {
        status(self.ctx.plan_2d(plan.as_deref_mut(), nx, ny, ty))
    }

    #[pyo3(name = "cufftPlan3d", signature = (plan, nx, ny, nz, ty))]
    fn plan_3d(&self, mut plan: HandleMut<'_>, nx: i32, ny: i32, nz: i32, ty: i32) -> PyResult<i32> {
        status(self.ctx.plan_3d(plan.as_deref_mut(), nx, ny, nz, ty))
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftPlanMany",
        signature = (plan, rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch)
    )]
    fn plan_many(
        &self,
        mut plan: HandleMut<'_>,
        rank: i32,
        n: Option<Vec<i32>>,
        inembed: Option<Vec<i32>>,
        istride: i32,
        idist: i32,
        onembed: Option<Vec<i32>>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
    ) -> PyResult<i32> {
        status(self.ctx.plan_many(
            plan.as_deref_mut(),
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
        ))
    }

    // ------------------------------------------------------------------
    // Extensible plans
    // ------------------------------------------------------------------

    #[pyo3(name = "cufftCreate", signature = (plan))]
    fn create(&self, mut plan: HandleMut<'_>) -> PyResult<i32> {
        status(self.ctx.create(plan.as_deref_mut()))
    }

    #[pyo3(name = "cufftMakePlan1d", signature = (plan, nx, ty, batch, work_size))]
    fn make_plan_1d<'py>(
        &self,
        mut plan: HandleMut<'py>,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self
            .ctx
            .make_plan_1d(plan.as_deref_mut(), nx, ty, batch, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftMakePlan2d", signature = (plan, nx, ny, ty, work_size))]
    fn make_plan_2d<'py>(
        &self,
        mut plan: HandleMut<'py>,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self
            .ctx
            .make_plan_2d(plan.as_deref_mut(), nx, ny, ty, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftMakePlan3d", signature = (plan, nx, ny, nz, ty, work_size))]
    fn make_plan_3d<'py>(
        &self,
        mut plan: HandleMut<'py>,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self
            .ctx
            .make_plan_3d(plan.as_deref_mut(), nx, ny, nz, ty, slot.slice());
        slot.finish(result)
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftMakePlanMany",
        signature = (plan, rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch, work_size)
    )]
    fn make_plan_many<'py>(
        &self,
        mut plan: HandleMut<'py>,
        rank: i32,
        n: Option<Vec<i32>>,
        inembed: Option<Vec<i32>>,
        istride: i32,
        idist: i32,
        onembed: Option<Vec<i32>>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.make_plan_many(
            plan.as_deref_mut(),
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
            slot.slice(),
        );
        slot.finish(result)
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftMakePlanMany64",
        signature = (plan, rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch, work_size)
    )]
    fn make_plan_many64<'py>(
        &self,
        mut plan: HandleMut<'py>,
        rank: i32,
        n: Option<Vec<i64>>,
        inembed: Option<Vec<i64>>,
        istride: i64,
        idist: i64,
        onembed: Option<Vec<i64>>,
        ostride: i64,
        odist: i64,
        ty: i32,
        batch: i64,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.make_plan_many64(
            plan.as_deref_mut(),
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
            slot.slice(),
        );
        slot.finish(result)
    }

    // ------------------------------------------------------------------
    // Size estimates and refined sizes
    // ------------------------------------------------------------------

    #[pyo3(name = "cufftEstimate1d", signature = (nx, ty, batch, work_size))]
    fn estimate_1d<'py>(
        &self,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.estimate_1d(nx, ty, batch, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftEstimate2d", signature = (nx, ny, ty, work_size))]
    fn estimate_2d<'py>(
        &self,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.estimate_2d(nx, ny, ty, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftEstimate3d", signature = (nx, ny, nz, ty, work_size))]
    fn estimate_3d<'py>(
        &self,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.estimate_3d(nx, ny, nz, ty, slot.slice());
        slot.finish(result)
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftEstimateMany",
        signature = (rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch, work_size)
    )]
    fn estimate_many<'py>(
        &self,
        rank: i32,
        n: Option<Vec<i32>>,
        inembed: Option<Vec<i32>>,
        istride: i32,
        idist: i32,
        onembed: Option<Vec<i32>>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.estimate_many(
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
            slot.slice(),
        );
        slot.finish(result)
    }

    #[pyo3(name = "cufftGetSize1d", signature = (plan, nx, ty, batch, work_size))]
    fn get_size_1d<'py>(
        &self,
        plan: Handle<'py>,
        nx: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self
            .ctx
            .get_size_1d(plan.as_deref(), nx, ty, batch, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftGetSize2d", signature = (plan, nx, ny, ty, work_size))]
    fn get_size_2d<'py>(
        &self,
        plan: Handle<'py>,
        nx: i32,
        ny: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.get_size_2d(plan.as_deref(), nx, ny, ty, slot.slice());
        slot.finish(result)
    }

    #[pyo3(name = "cufftGetSize3d", signature = (plan, nx, ny, nz, ty, work_size))]
    fn get_size_3d<'py>(
        &self,
        plan: Handle<'py>,
        nx: i32,
        ny: i32,
        nz: i32,
        ty: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self
            .ctx
            .get_size_3d(plan.as_deref(), nx, ny, nz, ty, slot.slice());
        slot.finish(result)
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftGetSizeMany",
        signature = (plan, rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch, work_size)
    )]
    fn get_size_many<'py>(
        &self,
        plan: Handle<'py>,
        rank: i32,
        n: Option<Vec<i32>>,
        inembed: Option<Vec<i32>>,
        istride: i32,
        idist: i32,
        onembed: Option<Vec<i32>>,
        ostride: i32,
        odist: i32,
        ty: i32,
        batch: i32,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.get_size_many(
            plan.as_deref(),
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
            slot.slice(),
        );
        slot.finish(result)
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        name = "cufftGetSizeMany64",
        signature = (plan, rank, n, inembed, istride, idist, onembed, ostride, odist, ty, batch, work_size)
    )]
    fn get_size_many64<'py>(
        &self,
        mut plan: HandleMut<'py>,
        rank: i32,
        n: Option<Vec<i64>>,
        inembed: Option<Vec<i64>>,
        istride: i64,
        idist: i64,
        onembed: Option<Vec<i64>>,
        ostride: i64,
        odist: i64,
        ty: i32,
        batch: i64,
        work_size: Option<Bound<'py, PyList>>,
    ) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.get_size_many64(
            plan.as_deref_mut(),
            rank,
            n.as_deref(),
            inembed.as_deref(),
            istride,
            idist,
            onembed.as_deref(),
            ostride,
            odist,
            ty,
            batch,
            slot.slice(),
        );
        slot.finish(result)
    }

    #[pyo3(name = "cufftGetSize", signature = (plan, work_size))]
    fn get_size<'py>(&self, plan: Handle<'py>, work_size: Option<Bound<'py, PyList>>) -> PyResult<i32> {
        let mut slot = OutSlot::<i64>::new(work_size);
        let result = self.ctx.get_size(plan.as_deref(), slot.slice());
        slot.finish(result)
    }

    // ------------------------------------------------------------------
    // Work area, stream and lifetime
    // ------------------------------------------------------------------

    #[pyo3(name = "cufftSetWorkArea", signature = (plan, work_area))]
    fn set_work_area(&self, plan: Handle<'_>, work_area: Ptr<'_>) -> PyResult<i32> {
        status(self.ctx.set_work_area(plan.as_deref(), work_area.as_deref()))
    }

    #[pyo3(name = "cufftSetAutoAllocation", signature = (plan, auto_allocate))]
    fn set_auto_allocation(&self, plan: Handle<'_>, auto_allocate: i32) -> PyResult<i32> {
        status(self.ctx.set_auto_allocation(plan.as_deref(), auto_allocate))
    }

    #[pyo3(name = "cufftSetStream", signature = (plan, stream))]
    fn set_stream(&self, plan: Handle<'_>, stream: Option<PyRef<'_, PyStream>>) -> PyResult<i32> {
        status(self.ctx.set_stream(plan.as_deref(), stream.as_deref()))
    }

    #[pyo3(name = "cufftSetCompatibilityMode", signature = (plan, mode))]
    fn set_compatibility_mode(&self, plan: Handle<'_>, mode: i32) -> PyResult<i32> {
        status(self.ctx.set_compatibility_mode(plan.as_deref(), mode))
    }

    #[pyo3(name = "cufftDestroy", signature = (plan))]
    fn destroy(&self, plan: Handle<'_>) -> PyResult<i32> {
        status(self.ctx.destroy(plan.as_deref()))
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    #[pyo3(name = "cufftExecC2C", signature = (plan, idata, odata, direction))]
    fn exec_c2c(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>, direction: i32) -> PyResult<i32> {
        status(
            self.ctx
                .exec_c2c(plan.as_deref(), idata.as_deref(), odata.as_deref(), direction),
        )
    }

    #[pyo3(name = "cufftExecR2C", signature = (plan, idata, odata))]
    fn exec_r2c(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>) -> PyResult<i32> {
        status(self.ctx.exec_r2c(plan.as_deref(), idata.as_deref(), odata.as_deref()))
    }

    #[pyo3(name = "cufftExecC2R", signature = (plan, idata, odata))]
    fn exec_c2r(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>) -> PyResult<i32> {
        status(self.ctx.exec_c2r(plan.as_deref(), idata.as_deref(), odata.as_deref()))
    }

    #[pyo3(name = "cufftExecZ2Z", signature = (plan, idata, odata, direction))]
    fn exec_z2z(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>, direction: i32) -> PyResult<i32> {
        status(
            self.ctx
                .exec_z2z(plan.as_deref(), idata.as_deref(), odata.as_deref(), direction),
        )
    }

    #[pyo3(name = "cufftExecD2Z", signature = (plan, idata, odata))]
    fn exec_d2z(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>) -> PyResult<i32> {
        status(self.ctx.exec_d2z(plan.as_deref(), idata.as_deref(), odata.as_deref()))
    }

    #[pyo3(name = "cufftExecZ2D", signature = (plan, idata, odata))]
    fn exec_z2d(&self, plan: Handle<'_>, idata: Ptr<'_>, odata: Ptr<'_>) -> PyResult<i32> {
        status(self.ctx.exec_z2d(plan.as_deref(), idata.as_deref(), odata.as_deref()))
    }
}
