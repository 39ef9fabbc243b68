//! Binding layer between a managed host runtime and the cuFFT C API.
//!
//! Each cuFFT entry point is a method on [`BindingContext`] that null-checks
//! the host's reference arguments, copies descriptor arrays into natively
//! addressable storage, calls the native routine through [`CufftApi`], writes
//! out-parameters back and returns the native result code unchanged.
//! Violations detected by the bridge itself come back as [`BindingError`].
//!
//! # Example
//!
//! ```
//! use cufft_bridge_core::{BindingContext, CufftHandle, CufftStatus, LocalHost, RecordingCufft};
//!
//! let ctx = BindingContext::initialize(RecordingCufft::new().with_next_plan(7), LocalHost)?;
//! let mut handle = CufftHandle::new();
//! let status = ctx.plan_1d(Some(&mut handle), 1024, 0x29, 1)?;
//! assert_eq!(status, CufftStatus::SUCCESS);
//! assert_eq!(handle.plan(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod exec;
pub mod host;
pub mod logging;
mod marshal;
pub mod native;
pub mod plan;
pub mod recording;
pub mod resource;
pub mod sizing;
pub mod status;
pub mod transform;

pub use config::BridgeConfig;
pub use context::BindingContext;
pub use error::{status_of, BindingError, BindingResult, ConfigError, InitError, ViolationKind};
pub use host::{CufftHandle, LocalHost, ManagedHost, PlanField, Pointer, StreamRef};
pub use logging::LogLevel;
pub use native::{CufftApi, DeviceAddress, ManyLayout, PlanId, StreamAddress};
pub use recording::{NativeCall, RecordedLayout, RecordingCufft};
pub use status::CufftStatus;
pub use transform::{CufftType, LibraryProperty, TransformTypePolicy, CUFFT_FORWARD, CUFFT_INVERSE};

#[cfg(test)]
mod _tests_context;
#[cfg(test)]
mod _tests_null_checks;
#[cfg(test)]
mod _tests_resource;
#[cfg(test)]
mod _tests_roundtrip;
#[cfg(test)]
mod _tests_sizing;
#[cfg(test)]
mod _tests_transform;
