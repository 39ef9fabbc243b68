//! The binding context: everything resolved once at load time.
//!
//! A [`BindingContext`] pairs a native cuFFT implementation with a host
//! runtime. Building it resolves the host's plan-field accessor and brings up
//! the host's pointer-marshalling and exception-signaling sides; if any of
//! that fails no context exists and nothing can be called. After
//! construction the context is read-only, and every bridge operation is a
//! method on it (see the `plan`, `sizing`, `exec` and `resource` modules).

use crate::config::BridgeConfig;
use crate::error::InitError;
use crate::host::{ManagedHost, PlanField};
use crate::logging;
use crate::native::{CufftApi, PlanId};
use crate::transform::{self, CufftType};

pub struct BindingContext<N, H: ManagedHost> {
    pub(crate) native: N,
    pub(crate) host: H,
    plan_field: PlanField<H::Handle>,
    config: BridgeConfig,
}

impl<N: CufftApi, H: ManagedHost> BindingContext<N, H> {
    /// Initializes the bridge with the default configuration.
    pub fn initialize(native: N, host: H) -> Result<Self, InitError> {
        Self::with_config(native, host, BridgeConfig::default())
    }

    pub fn with_config(native: N, host: H, config: BridgeConfig) -> Result<Self, InitError> {
        if let Some(level) = config.log_level {
            logging::apply(level);
        }
        log::trace!("Initializing cufft-bridge");

        host.init_exception_signaling()?;
        host.init_pointer_marshalling()?;
        let plan_field = host.plan_field()?;

        Ok(Self {
            native,
            host,
            plan_field,
            config,
        })
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub(crate) fn read_plan(&self, handle: &H::Handle) -> PlanId {
        self.plan_field.get(handle)
    }

    pub(crate) fn write_plan(&self, handle: &mut H::Handle, plan: PlanId) {
        self.plan_field.set(handle, plan)
    }

    /// `None` means the tag was rejected and the caller must report
    /// `CUFFT_INVALID_TYPE` without calling native code.
    pub(crate) fn transform_type(&self, tag: i32) -> Option<CufftType> {
        transform::resolve_type(tag, self.config.transform_types)
    }
}

impl<N, H> std::fmt::Debug for BindingContext<N, H>
where
    N: std::fmt::Debug,
    H: ManagedHost + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingContext")
            .field("native", &self.native)
            .field("host", &self.host)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
