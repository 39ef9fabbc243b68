//! Plan lifetime, work area, stream and library queries.

use crate::context::BindingContext;
use crate::error::{BindingError, BindingResult};
use crate::host::ManagedHost;
use crate::logging::{self, LogLevel};
use crate::marshal::{require, require_out};
use crate::native::CufftApi;

impl<N: CufftApi, H: ManagedHost> BindingContext<N, H> {
    /// Sets the process-wide log level from a host level number.
    pub fn set_log_level(&self, log_level: i32) {
        logging::apply(LogLevel::from_host(log_level));
    }

    /// `cufftGetVersion`
    pub fn get_version(&self, version: Option<&mut [i32]>) -> BindingResult {
        let version = require_out(version, "version", "cufftGetVersion")?;

        log::trace!("Executing cufftGetVersion");

        let mut native_version = 0;
        let result = self.native.get_version(&mut native_version);
        version[0] = native_version;
        Ok(result)
    }

    /// `cufftGetProperty`
    pub fn get_property(&self, property: i32, value: Option<&mut [i32]>) -> BindingResult {
        let value = require_out(value, "value", "cufftGetProperty")?;

        log::trace!("Executing cufftGetProperty(type={})", property);

        let mut native_value = 0;
        let result = self.native.get_property(property, &mut native_value);
        value[0] = native_value;
        Ok(result)
    }

    /// `cufftCreate`
    pub fn create(&self, handle: Option<&mut H::Handle>) -> BindingResult {
        let handle = require(handle, "handle", "cufftCreate")?;

        log::trace!("Executing cufftCreate");

        let mut plan = self.read_plan(handle);
        let result = self.native.create(&mut plan);
        self.write_plan(handle, plan);
        Ok(result)
    }

    /// `cufftDestroy`
    ///
    /// The handle keeps its old value; reusing it afterwards is the caller's
    /// problem, exactly as with the C API.
    pub fn destroy(&self, handle: Option<&H::Handle>) -> BindingResult {
        let handle = require(handle, "handle", "cufftDestroy")?;

        log::trace!("Destroying plan");

        let plan = self.read_plan(handle);
        Ok(self.native.destroy(plan))
    }

    /// `cufftSetWorkArea`
    pub fn set_work_area(
        &self,
        plan: Option<&H::Handle>,
        work_area: Option<&H::Pointer>,
    ) -> BindingResult {
        const FUNCTION: &str = "cufftSetWorkArea";
        let handle = require(plan, "plan", FUNCTION)?;
        let work_area = require(work_area, "workArea", FUNCTION)?;

        log::trace!("Executing cufftSetWorkArea");

        let plan = self.read_plan(handle);
        let address = self.host.pointer_address(work_area);
        Ok(self.native.set_work_area(plan, address))
    }

    /// `cufftSetAutoAllocation`
    pub fn set_auto_allocation(&self, plan: Option<&H::Handle>, auto_allocate: i32) -> BindingResult {
        let handle = require(plan, "plan", "cufftSetAutoAllocation")?;

        log::trace!("Executing cufftSetAutoAllocation(autoAllocate={})", auto_allocate);

        let plan = self.read_plan(handle);
        Ok(self.native.set_auto_allocation(plan, auto_allocate))
    }

    /// `cufftSetStream`
    pub fn set_stream(&self, handle: Option<&H::Handle>, stream: Option<&H::Stream>) -> BindingResult {
        const FUNCTION: &str = "cufftSetStream";
        let handle = require(handle, "handle", FUNCTION)?;
        let stream = require(stream, "stream", FUNCTION)?;

        log::trace!("Executing cufftSetStream");

        let plan = self.read_plan(handle);
        let stream = self.host.stream_address(stream);
        Ok(self.native.set_stream(plan, stream))
    }

    /// `cufftSetCompatibilityMode` no longer exists in cuFFT; this always
    /// fails without touching native code.
    pub fn set_compatibility_mode(&self, _plan: Option<&H::Handle>, _mode: i32) -> BindingResult {
        Err(BindingError::Unsupported {
            function: "cufftSetCompatibilityMode",
            reason: "was removed in CUDA version 9.1.",
        })
    }
}
