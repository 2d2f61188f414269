//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, exit statuses, etc.)
//! - CLI option types and the layered flag > environment > default resolution

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat, ValueType};
