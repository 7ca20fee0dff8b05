//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core check can fail on their behalf.

use thiserror::Error;

/// The base error type for `fg-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `fg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
