//! routegen-logging - Tracing setup for the routegen tools
//!
//! This crate provides:
//! - [`init_logging`] installing an stderr subscriber with a reloadable filter
//! - [`ReloadHandle`] for changing the level once configuration is known

mod reload;
mod subscriber;

pub use reload::ReloadHandle;
pub use routegen_core::LogLevel;
pub use subscriber::{DEFAULT_LEVEL, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
