//! routegen-core - Route overload generation engine
//!
//! Given the kinds of argument a Squirrel route handler may ask for and a set
//! of HTTP methods, this crate produces one route-registration overload per
//! method and per distinct combination of argument kinds:
//!
//! ```text
//! ParamDescriptor list
//!     ↓  enumerate_combinations     (2^N subsets, smallest first)
//! Combination list
//!     ↓  methods × combinations
//! Route list
//!     ↓  SignatureDeduplicator      (drop externally identical overloads)
//!     ↓  FunctionRenderer           (one Swift function per route)
//!     ↓  document::assemble         (header + extension)
//! GeneratedDocument → OutputSink
//! ```
//!
//! - [`ParamDescriptor`] describes one argument kind
//! - [`Generator`] drives a whole run from a [`RouteModel`]
//! - [`GeneratorConfig`] loads the model from `routegen.toml`

mod combination;
mod config;
mod descriptor;
pub mod document;
mod driver;
mod error;
mod method;
mod model;
pub mod output;
mod render;
mod signature;

#[cfg(test)]
mod test_fixtures;

pub use combination::{Combination, enumerate_combinations};
pub use config::{CONFIG_FILE_NAME, GeneratorConfig, ParamSpec, default_params};
pub use descriptor::{ParamDescriptor, ParamKind};
pub use document::HeaderConfig;
pub use driver::{GeneratedDocument, GenerationPlan, Generator};
pub use error::{GenError, GenResult};
pub use method::HttpMethod;
pub use model::{MAX_PARAMS, RouteModel};
pub use output::{FileSink, OutputSink};
pub use render::{FunctionRenderer, RenderTarget};
pub use signature::{Collision, DedupOutcome, Route, Signature, SignatureDeduplicator};

use serde::{Deserialize, Serialize};

/// Log levels accepted in configuration and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Level for a `-v` count on top of `Warn`
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| GenError::Config(format!("unknown log level: {s}")))
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenError, GenResult, Generator, GeneratorConfig, HttpMethod, ParamDescriptor,
        RenderTarget, RouteModel,
    };
}
