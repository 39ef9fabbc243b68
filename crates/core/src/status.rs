//! Native cuFFT result codes.
//!
//! Codes coming back from the native library are carried verbatim in a
//! transparent newtype rather than a Rust enum: a future cuFFT release may
//! return a code this crate does not know, and the bridge must hand it to the
//! caller unchanged.

use std::fmt;

/// Raw cuFFT result code (`cufftResult`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CufftStatus(pub i32);

impl CufftStatus {
    pub const SUCCESS: Self = Self(0);
    pub const INVALID_PLAN: Self = Self(1);
    pub const ALLOC_FAILED: Self = Self(2);
    pub const INVALID_TYPE: Self = Self(3);
    pub const INVALID_VALUE: Self = Self(4);
    pub const INTERNAL_ERROR: Self = Self(5);
    pub const EXEC_FAILED: Self = Self(6);
    pub const SETUP_FAILED: Self = Self(7);
    pub const INVALID_SIZE: Self = Self(8);
    pub const UNALIGNED_DATA: Self = Self(9);
    pub const INCOMPLETE_PARAMETER_LIST: Self = Self(10);
    pub const INVALID_DEVICE: Self = Self(11);
    pub const PARSE_ERROR: Self = Self(12);
    pub const NO_WORKSPACE: Self = Self(13);
    pub const NOT_IMPLEMENTED: Self = Self(14);
    pub const LICENSE_ERROR: Self = Self(15);
    pub const NOT_SUPPORTED: Self = Self(16);

    /// Bridge-internal failure: a violation detected before (or instead of)
    /// the native call. Never produced by cuFFT itself.
    pub const BRIDGE_INTERNAL_ERROR: Self = Self(-1);

    /// Returns true if the result indicates success.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// The raw integer handed back to the host.
    pub fn code(self) -> i32 {
        self.0
    }

    /// Symbolic name of a known code.
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "CUFFT_SUCCESS",
            1 => "CUFFT_INVALID_PLAN",
            2 => "CUFFT_ALLOC_FAILED",
            3 => "CUFFT_INVALID_TYPE",
            4 => "CUFFT_INVALID_VALUE",
            5 => "CUFFT_INTERNAL_ERROR",
            6 => "CUFFT_EXEC_FAILED",
            7 => "CUFFT_SETUP_FAILED",
            8 => "CUFFT_INVALID_SIZE",
            9 => "CUFFT_UNALIGNED_DATA",
            10 => "CUFFT_INCOMPLETE_PARAMETER_LIST",
            11 => "CUFFT_INVALID_DEVICE",
            12 => "CUFFT_PARSE_ERROR",
            13 => "CUFFT_NO_WORKSPACE",
            14 => "CUFFT_NOT_IMPLEMENTED",
            15 => "CUFFT_LICENSE_ERROR",
            16 => "CUFFT_NOT_SUPPORTED",
            -1 => "CUFFT_BRIDGE_INTERNAL_ERROR",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for CufftStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<CufftStatus> for i32 {
    fn from(status: CufftStatus) -> Self {
        status.0
    }
}

impl fmt::Display for CufftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "CUFFT_UNKNOWN({})", self.0),
        }
    }
}
