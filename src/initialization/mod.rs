//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of an
//! invocation:
//! - Logger (plain or JSON, on stderr)
//! - DNS resolver (system nameservers or the one named by the source)
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
