//! Bridge configuration.
//!
//! # File Format
//!
//! ```toml
//! log_level = "trace"
//! transform_types = "fallback"   # or "reject"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::transform::TransformTypePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Level applied when the context is built.
    pub log_level: Option<LogLevel>,
    /// Treatment of unknown transform type tags.
    pub transform_types: TransformTypePolicy,
}

impl BridgeConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
