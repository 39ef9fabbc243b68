//! Python-side handle, pointer and stream classes, and the host that reads
//! them.

use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

use cufft_bridge_core::native::{DeviceAddress, PlanId, StreamAddress};
use cufft_bridge_core::{InitError, ManagedHost, PlanField};

/// Python wrapper around a native cuFFT plan handle.
#[pyclass(name = "cufftHandle", module = "cufft_bridge")]
#[derive(Debug, Default)]
pub struct PyCufftHandle {
    #[pyo3(get, set)]
    plan: PlanId,
}

#[pymethods]
impl PyCufftHandle {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    fn __repr__(&self) -> String {
        format!("cufftHandle[plan={}]", self.plan)
    }
}

/// Device buffer address.
#[pyclass(name = "Pointer", module = "cufft_bridge", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyPointer {
    address: usize,
}

#[pymethods]
impl PyPointer {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Pointer to a raw device address, e.g. `cupy_array.data.ptr`.
    #[staticmethod]
    fn to_address(address: usize) -> Self {
        Self { address }
    }

    #[pyo3(name = "withByteOffset")]
    fn with_byte_offset(&self, offset: usize) -> PyResult<Self> {
        let address = self.address.checked_add(offset).ok_or_else(|| {
            PyOverflowError::new_err(format!(
                "offset {} past the end of the address space from {:#x}",
                offset, self.address
            ))
        })?;
        Ok(Self { address })
    }

    #[getter]
    fn address(&self) -> usize {
        self.address
    }

    fn __repr__(&self) -> String {
        format!("Pointer[address={:#x}]", self.address)
    }
}

/// CUDA stream handle. `cudaStream_t()` is the legacy default stream.
#[pyclass(name = "cudaStream_t", module = "cufft_bridge", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyStream {
    stream: usize,
}

#[pymethods]
impl PyStream {
    #[new]
    #[pyo3(signature = (stream = 0))]
    fn new(stream: usize) -> Self {
        Self { stream }
    }

    #[getter]
    fn stream(&self) -> usize {
        self.stream
    }

    fn __repr__(&self) -> String {
        format!("cudaStream_t[stream={:#x}]", self.stream)
    }
}

/// The Python host: plan handles, pointers and streams are the classes above.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyHost;

impl ManagedHost for PyHost {
    type Handle = PyCufftHandle;
    type Pointer = PyPointer;
    type Stream = PyStream;

    fn plan_field(&self) -> Result<PlanField<PyCufftHandle>, InitError> {
        Ok(PlanField::new(|h| h.plan, |h, plan| h.plan = plan))
    }

    fn pointer_address(&self, pointer: &PyPointer) -> DeviceAddress {
        DeviceAddress(pointer.address)
    }

    fn stream_address(&self, stream: &PyStream) -> StreamAddress {
        StreamAddress(stream.stream)
    }
}
