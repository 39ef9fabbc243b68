//! Binding-layer errors.
//!
//! Native cuFFT failures are *not* errors at this level: they travel back to
//! the host as a [`CufftStatus`]. Only violations detected by the bridge itself
//! end up here, and each host front end surfaces them as an exception of the
//! category given by [`BindingError::kind`] while still reporting
//! [`BindingError::status`] as the call's return code.

use thiserror::Error;

use crate::status::CufftStatus;

/// Host-side exception category for a binding violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required reference argument was null.
    NullPointer,
    /// A caller-supplied out array had no element to write to.
    IndexOutOfBounds,
    /// The operation no longer exists in the targeted cuFFT version.
    UnsupportedOperation,
}

/// A violation detected by the bridge before any native call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Parameter '{parameter}' is null for {function}")]
    NullArgument {
        parameter: &'static str,
        function: &'static str,
    },

    #[error("Parameter '{parameter}' has no element to write for {function}")]
    EmptyOutParameter {
        parameter: &'static str,
        function: &'static str,
    },

    #[error("Function {function} {reason}")]
    Unsupported {
        function: &'static str,
        reason: &'static str,
    },
}

impl BindingError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            BindingError::NullArgument { .. } => ViolationKind::NullPointer,
            BindingError::EmptyOutParameter { .. } => ViolationKind::IndexOutOfBounds,
            BindingError::Unsupported { .. } => ViolationKind::UnsupportedOperation,
        }
    }

    /// Return code reported alongside the exception.
    pub fn status(&self) -> CufftStatus {
        CufftStatus::BRIDGE_INTERNAL_ERROR
    }

    /// Name of the bridge function that raised the violation.
    pub fn function(&self) -> &'static str {
        match self {
            BindingError::NullArgument { function, .. }
            | BindingError::EmptyOutParameter { function, .. }
            | BindingError::Unsupported { function, .. } => function,
        }
    }
}

/// Result of a bridge call: the verbatim native code, or a violation.
pub type BindingResult = Result<CufftStatus, BindingError>;

/// Flattens a [`BindingResult`] into the single return code hosts expect.
pub fn status_of(result: &BindingResult) -> CufftStatus {
    match result {
        Ok(status) => *status,
        Err(err) => err.status(),
    }
}

/// Failure while setting up the binding context.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to resolve field '{field}' on handle type '{class}'")]
    PlanField {
        class: &'static str,
        field: &'static str,
    },

    #[error("pointer marshalling initialization failed: {0}")]
    PointerMarshalling(String),

    #[error("exception signaling initialization failed: {0}")]
    ExceptionSignaling(String),
}

/// Failure while loading a [`crate::config::BridgeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
