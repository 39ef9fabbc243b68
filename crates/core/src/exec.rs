//! Transform execution: `cufftExec*`.
//!
//! Buffers are already device resident; the bridge only null-checks the
//! wrappers and extracts their addresses.

use crate::context::BindingContext;
use crate::error::BindingResult;
use crate::host::ManagedHost;
use crate::marshal::require;
use crate::native::CufftApi;

impl<N: CufftApi, H: ManagedHost> BindingContext<N, H> {
    // === Single precision =====================================================

    /// `cufftExecC2C`
    pub fn exec_c2c(
        &self,
        handle: Option<&H::Handle>,
        c_idata: Option<&H::Pointer>,
        c_odata: Option<&H::Pointer>,
        direction: i32,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecC2C";
        let handle = require(handle, "handle", FUNCTION)?;
        let c_idata = require(c_idata, "cIdata", FUNCTION)?;
        let c_odata = require(c_odata, "cOdata", FUNCTION)?;

        log::trace!("Executing cufftExecC2C");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(c_idata);
        let odata = self.host.pointer_address(c_odata);
        Ok(self.native.exec_c2c(plan, idata, odata, direction))
    }

    /// `cufftExecR2C`
    pub fn exec_r2c(
        &self,
        handle: Option<&H::Handle>,
        r_idata: Option<&H::Pointer>,
        c_odata: Option<&H::Pointer>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecR2C";
        let handle = require(handle, "handle", FUNCTION)?;
        let r_idata = require(r_idata, "rIdata", FUNCTION)?;
        let c_odata = require(c_odata, "cOdata", FUNCTION)?;

        log::trace!("Executing cufftExecR2C");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(r_idata);
        let odata = self.host.pointer_address(c_odata);
        Ok(self.native.exec_r2c(plan, idata, odata))
    }

    /// `cufftExecC2R`
    pub fn exec_c2r(
        &self,
        handle: Option<&H::Handle>,
        c_idata: Option<&H::Pointer>,
        r_odata: Option<&H::Pointer>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecC2R";
        let handle = require(handle, "handle", FUNCTION)?;
        let c_idata = require(c_idata, "cIdata", FUNCTION)?;
        let r_odata = require(r_odata, "rOdata", FUNCTION)?;

        log::trace!("Executing cufftExecC2R");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(c_idata);
        let odata = self.host.pointer_address(r_odata);
        Ok(self.native.exec_c2r(plan, idata, odata))
    }

    // === Double precision =====================================================

    /// `cufftExecZ2Z`
    pub fn exec_z2z(
        &self,
        handle: Option<&H::Handle>,
        c_idata: Option<&H::Pointer>,
        c_odata: Option<&H::Pointer>,
        direction: i32,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecZ2Z";
        let handle = require(handle, "handle", FUNCTION)?;
        let c_idata = require(c_idata, "cIdata", FUNCTION)?;
        let c_odata = require(c_odata, "cOdata", FUNCTION)?;

        log::trace!("Executing cufftExecZ2Z");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(c_idata);
        let odata = self.host.pointer_address(c_odata);
        Ok(self.native.exec_z2z(plan, idata, odata, direction))
    }

    /// `cufftExecD2Z`
    pub fn exec_d2z(
        &self,
        handle: Option<&H::Handle>,
        r_idata: Option<&H::Pointer>,
        c_odata: Option<&H::Pointer>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecD2Z";
        let handle = require(handle, "handle", FUNCTION)?;
        let r_idata = require(r_idata, "rIdata", FUNCTION)?;
        let c_odata = require(c_odata, "cOdata", FUNCTION)?;

        log::trace!("Executing cufftExecD2Z");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(r_idata);
        let odata = self.host.pointer_address(c_odata);
        Ok(self.native.exec_d2z(plan, idata, odata))
    }

    /// `cufftExecZ2D`
    pub fn exec_z2d(
        &self,
        handle: Option<&H::Handle>,
        c_idata: Option<&H::Pointer>,
        r_odata: Option<&H::Pointer>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftExecZ2D";
        let handle = require(handle, "handle", FUNCTION)?;
        let c_idata = require(c_idata, "cIdata", FUNCTION)?;
        let r_odata = require(r_odata, "rOdata", FUNCTION)?;

        log::trace!("Executing cufftExecZ2D");

        let plan = self.read_plan(handle);
        let idata = self.host.pointer_address(c_idata);
        let odata = self.host.pointer_address(r_odata);
        Ok(self.native.exec_z2d(plan, idata, odata))
    }
}
