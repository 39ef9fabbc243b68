//! Transform type tags, directions and library property selectors.

use serde::{Deserialize, Serialize};

/// cuFFT transform types.
///
/// Discriminants are the native `cufftType` values.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CufftType {
    /// Real to Complex (interleaved) - single precision
    R2C = 0x2a,
    /// Complex (interleaved) to Real - single precision
    C2R = 0x2c,
    /// Complex to Complex (interleaved) - single precision
    C2C = 0x29,
    /// Double to Double-Complex (interleaved)
    D2Z = 0x6a,
    /// Double-Complex (interleaved) to Double
    Z2D = 0x6c,
    /// Double-Complex to Double-Complex (interleaved)
    Z2Z = 0x69,
}

impl CufftType {
    pub const ALL: [CufftType; 6] = [
        CufftType::R2C,
        CufftType::C2R,
        CufftType::C2C,
        CufftType::D2Z,
        CufftType::Z2D,
        CufftType::Z2Z,
    ];

    /// Looks up the transform type for a host-side integer tag.
    ///
    /// This is an exhaustive table rather than a cast: a tag outside the six
    /// known values must never reach the native library as an enum value.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0x2a => Some(CufftType::R2C),
            0x2c => Some(CufftType::C2R),
            0x29 => Some(CufftType::C2C),
            0x6a => Some(CufftType::D2Z),
            0x6c => Some(CufftType::Z2D),
            0x69 => Some(CufftType::Z2Z),
            _ => None,
        }
    }

    /// Native `cufftType` value.
    pub fn raw(self) -> i32 {
        self as i32
    }

    pub fn is_double_precision(self) -> bool {
        matches!(self, CufftType::D2Z | CufftType::Z2D | CufftType::Z2Z)
    }

    pub fn name(self) -> &'static str {
        match self {
            CufftType::R2C => "CUFFT_R2C",
            CufftType::C2R => "CUFFT_C2R",
            CufftType::C2C => "CUFFT_C2C",
            CufftType::D2Z => "CUFFT_D2Z",
            CufftType::Z2D => "CUFFT_Z2D",
            CufftType::Z2Z => "CUFFT_Z2Z",
        }
    }
}

impl std::fmt::Display for CufftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the bridge treats a transform tag outside the known six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformTypePolicy {
    /// Log an error and substitute `CUFFT_C2C`.
    #[default]
    Fallback,
    /// Log an error and return `CUFFT_INVALID_TYPE` without a native call.
    Reject,
}

/// Maps a host tag onto a native transform type under `policy`.
///
/// Returns `None` only under [`TransformTypePolicy::Reject`].
pub fn resolve_type(tag: i32, policy: TransformTypePolicy) -> Option<CufftType> {
    if let Some(ty) = CufftType::from_tag(tag) {
        return Some(ty);
    }
    log::error!("Invalid cufftType specified: {}", tag);
    match policy {
        TransformTypePolicy::Fallback => Some(CufftType::C2C),
        TransformTypePolicy::Reject => None,
    }
}

/// Forward transform direction (negative exponent).
pub const CUFFT_FORWARD: i32 = -1;
/// Inverse transform direction (positive exponent).
pub const CUFFT_INVERSE: i32 = 1;

/// Selector for `cufftGetProperty` (`libraryPropertyType`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryProperty {
    MajorVersion = 0,
    MinorVersion = 1,
    PatchLevel = 2,
}

impl LibraryProperty {
    pub const ALL: [LibraryProperty; 3] = [
        LibraryProperty::MajorVersion,
        LibraryProperty::MinorVersion,
        LibraryProperty::PatchLevel,
    ];

    pub fn raw(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            LibraryProperty::MajorVersion => "major",
            LibraryProperty::MinorVersion => "minor",
            LibraryProperty::PatchLevel => "patch",
        }
    }
}
