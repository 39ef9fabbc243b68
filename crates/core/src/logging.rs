//! Host log levels and their mapping onto the `log` facade.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Log levels as numbered on the host side.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Quiet = 0,
    #[default]
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
    DebugTrace = 6,
}

impl LogLevel {
    /// Levels beyond the known range clamp to the nearest end.
    pub fn from_host(level: i32) -> Self {
        match level {
            i32::MIN..=0 => LogLevel::Quiet,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::DebugTrace,
        }
    }

    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            // `log` has no level below trace
            LogLevel::Trace | LogLevel::DebugTrace => LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "off" => Ok(LogLevel::Quiet),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            "debug_trace" | "debugtrace" => Ok(LogLevel::DebugTrace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Applies `level` process-wide.
pub fn apply(level: LogLevel) {
    log::set_max_level(level.filter());
}
