//! The managed-host seam.
//!
//! A host runtime (Python via pyo3, or plain Rust callers) owns three kinds
//! of objects the bridge needs to look into: the plan-handle wrapper, device
//! buffer pointers and stream wrappers. [`ManagedHost`] tells the bridge how
//! to read them. The plan-field accessor is resolved once, when the
//! [`crate::BindingContext`] is built, and reused on every call.

use crate::error::InitError;
use crate::native::{DeviceAddress, PlanId, StreamAddress};

/// Accessor pair for the integer `plan` field of a host handle object.
pub struct PlanField<H: ?Sized> {
    get: fn(&H) -> PlanId,
    set: fn(&mut H, PlanId),
}

impl<H: ?Sized> PlanField<H> {
    pub fn new(get: fn(&H) -> PlanId, set: fn(&mut H, PlanId)) -> Self {
        Self { get, set }
    }

    pub fn get(&self, handle: &H) -> PlanId {
        (self.get)(handle)
    }

    pub fn set(&self, handle: &mut H, plan: PlanId) {
        (self.set)(handle, plan)
    }
}

impl<H: ?Sized> Clone for PlanField<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized> Copy for PlanField<H> {}

impl<H: ?Sized> std::fmt::Debug for PlanField<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanField").finish_non_exhaustive()
    }
}

/// A host runtime the bridge marshals to and from.
pub trait ManagedHost {
    /// Host wrapper around a native plan handle.
    type Handle: ?Sized;
    /// Host wrapper around a device buffer.
    type Pointer: ?Sized;
    /// Host wrapper around a CUDA stream.
    type Stream: ?Sized;

    /// Resolves the accessor for the handle type's `plan` field.
    fn plan_field(&self) -> Result<PlanField<Self::Handle>, InitError>;

    /// Prepares the pointer-marshalling side. Called once.
    fn init_pointer_marshalling(&self) -> Result<(), InitError> {
        Ok(())
    }

    /// Prepares the exception-signaling side. Called once.
    fn init_exception_signaling(&self) -> Result<(), InitError> {
        Ok(())
    }

    fn pointer_address(&self, pointer: &Self::Pointer) -> DeviceAddress;
    fn stream_address(&self, stream: &Self::Stream) -> StreamAddress;
}

// ============================================================================
// Rust-native host
// ============================================================================

/// Host-side cuFFT plan handle.
///
/// A fresh handle holds plan `0`; a plan-construction call stores the native
/// handle value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CufftHandle {
    plan: PlanId,
}

impl CufftHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing native plan value.
    pub fn from_raw(plan: PlanId) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> PlanId {
        self.plan
    }
}

impl std::fmt::Display for CufftHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cufftHandle[plan={}]", self.plan)
    }
}

/// A device buffer address as handed out by the pointer-marshalling side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    address: DeviceAddress,
}

impl Pointer {
    pub fn to_address(address: usize) -> Self {
        Self {
            address: DeviceAddress(address),
        }
    }

    /// Byte offset into the same allocation; `None` past the end of the
    /// address space.
    pub fn with_byte_offset(self, offset: usize) -> Option<Self> {
        self.address.0.checked_add(offset).map(Self::to_address)
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }
}

/// A CUDA stream as handed out by the runtime side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamRef {
    address: StreamAddress,
}

impl StreamRef {
    pub fn from_raw(stream: usize) -> Self {
        Self {
            address: StreamAddress(stream),
        }
    }

    /// The legacy default stream.
    pub fn default_stream() -> Self {
        Self::default()
    }

    pub fn address(&self) -> StreamAddress {
        self.address
    }
}

/// Host for Rust callers: [`CufftHandle`], [`Pointer`] and [`StreamRef`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl ManagedHost for LocalHost {
    type Handle = CufftHandle;
    type Pointer = Pointer;
    type Stream = StreamRef;

    fn plan_field(&self) -> Result<PlanField<CufftHandle>, InitError> {
        Ok(PlanField::new(|h| h.plan, |h, plan| h.plan = plan))
    }

    fn pointer_address(&self, pointer: &Pointer) -> DeviceAddress {
        pointer.address
    }

    fn stream_address(&self, stream: &StreamRef) -> StreamAddress {
        stream.address
    }
}
