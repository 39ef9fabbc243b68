//! Raw FFI bindings to the NVIDIA cuFFT library.
//!
//! Covers the plan, sizing, configuration and execution entry points of the
//! cuFFT 9.1+ API. Result codes and transform types are kept as plain
//! `c_int` so codes unknown to this crate pass through untouched. The
//! functions are only declared, and `libcufft` only linked, with the `cuda`
//! feature; the type aliases are always available.
//!
//! cuFFT documentation: https://docs.nvidia.com/cuda/cufft/

#![allow(non_camel_case_types)]

use std::ffi::{c_int, c_void};

use num_complex::{Complex32, Complex64};

/// cuFFT plan handle.
pub type cufftHandle = c_int;

/// cuFFT result code (`CUFFT_SUCCESS` = 0 .. `CUFFT_NOT_SUPPORTED` = 16).
pub type cufftResult = c_int;

/// cuFFT transform type tag (`CUFFT_R2C` = 0x2a, ...).
pub type cufftType = c_int;

/// `libraryPropertyType` (0 major, 1 minor, 2 patch).
pub type libraryPropertyType = c_int;

/// Single-precision real sample.
pub type cufftReal = f32;

/// Double-precision real sample.
pub type cufftDoubleReal = f64;

/// Single-precision complex sample; same layout as `cuComplex`.
pub type cufftComplex = Complex32;

/// Double-precision complex sample; same layout as `cuDoubleComplex`.
pub type cufftDoubleComplex = Complex64;

/// CUDA stream (opaque pointer, null for the legacy default stream).
pub type cudaStream_t = *mut c_void;

#[cfg(feature = "cuda")]
#[link(name = "cufft")]
unsafe extern "C" {
    pub fn cufftGetVersion(version: *mut c_int) -> cufftResult;
    pub fn cufftGetProperty(property: libraryPropertyType, value: *mut c_int) -> cufftResult;

    pub fn cufftPlan1d(plan: *mut cufftHandle, nx: c_int, ty: cufftType, batch: c_int) -> cufftResult;
    pub fn cufftPlan2d(plan: *mut cufftHandle, nx: c_int, ny: c_int, ty: cufftType) -> cufftResult;
    pub fn cufftPlan3d(
        plan: *mut cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        ty: cufftType,
    ) -> cufftResult;
    pub fn cufftPlanMany(
        plan: *mut cufftHandle,
        rank: c_int,
        n: *mut c_int,
        inembed: *mut c_int,
        istride: c_int,
        idist: c_int,
        onembed: *mut c_int,
        ostride: c_int,
        odist: c_int,
        ty: cufftType,
        batch: c_int,
    ) -> cufftResult;

    pub fn cufftCreate(plan: *mut cufftHandle) -> cufftResult;
    pub fn cufftMakePlan1d(
        plan: cufftHandle,
        nx: c_int,
        ty: cufftType,
        batch: c_int,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftMakePlan2d(
        plan: cufftHandle,
        nx: c_int,
        ny: c_int,
        ty: cufftType,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftMakePlan3d(
        plan: cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        ty: cufftType,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftMakePlanMany(
        plan: cufftHandle,
        rank: c_int,
        n: *mut c_int,
        inembed: *mut c_int,
        istride: c_int,
        idist: c_int,
        onembed: *mut c_int,
        ostride: c_int,
        odist: c_int,
        ty: cufftType,
        batch: c_int,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftMakePlanMany64(
        plan: cufftHandle,
        rank: c_int,
        n: *mut i64,
        inembed: *mut i64,
        istride: i64,
        idist: i64,
        onembed: *mut i64,
        ostride: i64,
        odist: i64,
        ty: cufftType,
        batch: i64,
        work_size: *mut usize,
    ) -> cufftResult;

    pub fn cufftEstimate1d(nx: c_int, ty: cufftType, batch: c_int, work_size: *mut usize) -> cufftResult;
    pub fn cufftEstimate2d(nx: c_int, ny: c_int, ty: cufftType, work_size: *mut usize) -> cufftResult;
    pub fn cufftEstimate3d(
        nx: c_int,
        ny: c_int,
        nz: c_int,
        ty: cufftType,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftEstimateMany(
        rank: c_int,
        n: *mut c_int,
        inembed: *mut c_int,
        istride: c_int,
        idist: c_int,
        onembed: *mut c_int,
        ostride: c_int,
        odist: c_int,
        ty: cufftType,
        batch: c_int,
        work_size: *mut usize,
    ) -> cufftResult;

    pub fn cufftGetSize1d(
        plan: cufftHandle,
        nx: c_int,
        ty: cufftType,
        batch: c_int,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftGetSize2d(
        plan: cufftHandle,
        nx: c_int,
        ny: c_int,
        ty: cufftType,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftGetSize3d(
        plan: cufftHandle,
        nx: c_int,
        ny: c_int,
        nz: c_int,
        ty: cufftType,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftGetSizeMany(
        plan: cufftHandle,
        rank: c_int,
        n: *mut c_int,
        inembed: *mut c_int,
        istride: c_int,
        idist: c_int,
        onembed: *mut c_int,
        ostride: c_int,
        odist: c_int,
        ty: cufftType,
        batch: c_int,
        work_area: *mut usize,
    ) -> cufftResult;
    pub fn cufftGetSizeMany64(
        plan: cufftHandle,
        rank: c_int,
        n: *mut i64,
        inembed: *mut i64,
        istride: i64,
        idist: i64,
        onembed: *mut i64,
        ostride: i64,
        odist: i64,
        ty: cufftType,
        batch: i64,
        work_size: *mut usize,
    ) -> cufftResult;
    pub fn cufftGetSize(plan: cufftHandle, work_size: *mut usize) -> cufftResult;

    pub fn cufftSetWorkArea(plan: cufftHandle, work_area: *mut c_void) -> cufftResult;
    pub fn cufftSetAutoAllocation(plan: cufftHandle, auto_allocate: c_int) -> cufftResult;
    pub fn cufftSetStream(plan: cufftHandle, stream: cudaStream_t) -> cufftResult;
    pub fn cufftDestroy(plan: cufftHandle) -> cufftResult;

    pub fn cufftExecC2C(
        plan: cufftHandle,
        idata: *mut cufftComplex,
        odata: *mut cufftComplex,
        direction: c_int,
    ) -> cufftResult;
    pub fn cufftExecR2C(plan: cufftHandle, idata: *mut cufftReal, odata: *mut cufftComplex) -> cufftResult;
    pub fn cufftExecC2R(plan: cufftHandle, idata: *mut cufftComplex, odata: *mut cufftReal) -> cufftResult;
    /// cuFFT is unnormalized: forward followed by inverse scales by the
    /// transform size.
    pub fn cufftExecZ2Z(
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleComplex,
        direction: c_int,
    ) -> cufftResult;
    pub fn cufftExecD2Z(
        plan: cufftHandle,
        idata: *mut cufftDoubleReal,
        odata: *mut cufftDoubleComplex,
    ) -> cufftResult;
    pub fn cufftExecZ2D(
        plan: cufftHandle,
        idata: *mut cufftDoubleComplex,
        odata: *mut cufftDoubleReal,
    ) -> cufftResult;
}
