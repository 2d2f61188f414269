//! Error handling.
//!
//! Errors are split by the stage that produces them:
//! - **Source** errors: the source identifier could not be understood
//! - **Provider** errors: DNS resolution failed
//! - **Lookup** errors: the key did not resolve to an acceptable number of values
//! - **Output** errors: rendering or writing failed
//!
//! [`AppError`] wraps all of them with invocation context and owns the
//! exit-status mapping used by the binary.

mod types;

// Re-export public API
pub use types::{
    AppError, InitializationError, LookupError, OutputError, ProviderError, SourceError,
};
