//! Plan descriptions for `cufft-bridge estimate`.
//!
//! ```toml
//! n = [256, 256]
//! type = "C2C"          # or "CUFFT_C2C", or a raw tag such as 0x29
//! batch = 4
//!
//! # advanced layout, all optional
//! inembed = [256, 258]
//! istride = 1
//! idist = 66048
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use cufft_bridge_core::native::CufftApi;
use cufft_bridge_core::{BindingContext, BindingError, CufftStatus, CufftType, LocalHost};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeTag {
    Name(String),
    Raw(i32),
}

impl TypeTag {
    /// Native tag to hand to the bridge. Raw tags pass through unchecked so
    /// the bridge's own handling of unknown tags applies.
    pub fn resolve(&self) -> Result<i32, String> {
        match self {
            TypeTag::Raw(tag) => Ok(*tag),
            TypeTag::Name(name) => {
                let wanted = name.trim().to_ascii_uppercase();
                CufftType::ALL
                    .into_iter()
                    .find(|ty| {
                        ty.name() == wanted || ty.name().strip_prefix("CUFFT_") == Some(wanted.as_str())
                    })
                    .map(CufftType::raw)
                    .ok_or_else(|| format!("unknown transform type '{}'", name))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    pub n: Vec<i32>,
    #[serde(rename = "type")]
    pub ty: TypeTag,
    #[serde(default = "one")]
    pub batch: i32,
    /// Defaults to the length of `n`.
    pub rank: Option<i32>,
    pub inembed: Option<Vec<i32>>,
    pub istride: Option<i32>,
    pub idist: Option<i32>,
    pub onembed: Option<Vec<i32>>,
    pub ostride: Option<i32>,
    pub odist: Option<i32>,
}

fn one() -> i32 {
    1
}

impl PlanFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn rank(&self) -> i32 {
        self.rank.unwrap_or(self.n.len() as i32)
    }

    fn is_advanced(&self) -> bool {
        self.inembed.is_some()
            || self.onembed.is_some()
            || self.istride.is_some()
            || self.ostride.is_some()
            || self.idist.is_some()
            || self.odist.is_some()
            || self.rank.is_some_and(|rank| rank as usize != self.n.len())
    }

    /// Elements per transform, the default batch distance. `None` when the
    /// product does not fit the 32-bit descriptor.
    fn elements(&self) -> Option<i32> {
        self.n.iter().try_fold(1i32, |acc, &len| acc.checked_mul(len))
    }

    /// `idist`/`odist` as given, or the element count when omitted.
    fn distances(&self) -> Result<(i32, i32), EstimateError> {
        match (self.idist, self.odist) {
            (Some(idist), Some(odist)) => Ok((idist, odist)),
            (idist, odist) => {
                let elements = self.elements().ok_or_else(|| EstimateError::DistanceOverflow {
                    n: self.n.clone(),
                })?;
                Ok((idist.unwrap_or(elements), odist.unwrap_or(elements)))
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("plan of size {n:?} has more elements than fit in idist/odist; set both explicitly")]
    DistanceOverflow { n: Vec<i32> },

    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// Outcome of a work-size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub routine: &'static str,
    pub status: CufftStatus,
    pub work_size: i64,
}

/// Picks the narrowest cuFFT estimate routine that describes `plan`.
pub fn estimate<N: CufftApi>(
    bridge: &BindingContext<N, LocalHost>,
    plan: &PlanFile,
    ty: i32,
) -> Result<Estimate, EstimateError> {
    let mut work_size = [0i64];
    let n = plan.n.as_slice();

    let (routine, status) = match (n, plan.batch, plan.is_advanced()) {
        ([nx], batch, false) => (
            "cufftEstimate1d",
            bridge.estimate_1d(*nx, ty, batch, Some(&mut work_size[..]))?,
        ),
        ([nx, ny], 1, false) => (
            "cufftEstimate2d",
            bridge.estimate_2d(*nx, *ny, ty, Some(&mut work_size[..]))?,
        ),
        ([nx, ny, nz], 1, false) => (
            "cufftEstimate3d",
            bridge.estimate_3d(*nx, *ny, *nz, ty, Some(&mut work_size[..]))?,
        ),
        _ => {
            let (idist, odist) = plan.distances()?;
            let status = bridge.estimate_many(
                plan.rank(),
                Some(n),
                plan.inembed.as_deref(),
                plan.istride.unwrap_or(1),
                idist,
                plan.onembed.as_deref(),
                plan.ostride.unwrap_or(1),
                odist,
                ty,
                plan.batch,
                Some(&mut work_size[..]),
            )?;
            ("cufftEstimateMany", status)
        }
    };

    Ok(Estimate {
        routine,
        status,
        work_size: work_size[0],
    })
}
