//! Python bindings for cufft-bridge.
//!
//! Exposes cuFFT to Python through a `Bridge` object built once at import.
//! Plan handles, device pointers and streams are small wrapper classes; out
//! parameters are one-element lists.
//!
//! # Example
//!
//! ```python
//! from cufft_bridge import bridge, cufftHandle, Pointer, CUFFT_C2C, CUFFT_FORWARD
//!
//! plan = cufftHandle()
//! bridge.cufftPlan1d(plan, 1024, CUFFT_C2C, 1)
//!
//! data = Pointer.to_address(device_buffer.data.ptr)
//! bridge.cufftExecC2C(plan, data, data, CUFFT_FORWARD)
//! bridge.cufftDestroy(plan)
//! ```

#[cfg(feature = "bindings")]
mod bridge;
#[cfg(feature = "bindings")]
mod types;

#[cfg(feature = "bindings")]
mod py {
    use pyo3::prelude::*;

    use cufft_bridge_core::{BridgeConfig, CufftStatus, CufftType, CUFFT_FORWARD, CUFFT_INVERSE};

    use crate::bridge::Bridge;
    use crate::types::{PyCufftHandle, PyPointer, PyStream};

    /// cufft_bridge Python module.
    #[pymodule]
    fn cufft_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__doc__", "cuFFT bindings for Python")?;
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;

        m.add_class::<PyCufftHandle>()?;
        m.add_class::<PyPointer>()?;
        m.add_class::<PyStream>()?;
        m.add_class::<Bridge>()?;

        for status in (-1..=16).map(CufftStatus) {
            if let Some(name) = status.name() {
                m.add(name, status.code())?;
            }
        }
        for ty in CufftType::ALL {
            m.add(ty.name(), ty.raw())?;
        }
        m.add("CUFFT_FORWARD", CUFFT_FORWARD)?;
        m.add("CUFFT_INVERSE", CUFFT_INVERSE)?;

        m.add("bridge", Bridge::with_config(BridgeConfig::default())?)?;

        Ok(())
    }
}

#[cfg(not(feature = "bindings"))]
pub fn bindings_disabled() {
    log::warn!("cufft-bridge-python compiled without the \"bindings\" feature");
}
