//! cudarc interop for the Rust-native host types.

use cudarc::driver::{CudaSlice, CudaStream, DevicePtrMut};
use cufft_bridge_core::{Pointer, StreamRef};

/// Device address of `slice`, for passing to execution or work-area calls.
///
/// The address stays valid as long as `slice` is alive; work submitted with it
/// must run on `stream` (or be synchronized against it).
pub fn pointer_to<T>(slice: &mut CudaSlice<T>, stream: &CudaStream) -> Pointer {
    let (address, _sync) = slice.device_ptr_mut(stream);
    Pointer::to_address(address as usize)
}

/// Raw `cudaStream_t` of a cudarc stream.
pub fn stream_ref(stream: &CudaStream) -> StreamRef {
    StreamRef::from_raw(stream.cu_stream() as usize)
}
