//! Error types for segsieve
//!
//! Two kinds of failure come out of the sieve itself:
//! - `InvalidArgument`: the query has no answer (no prime below 2, value not prime)
//! - `CapacityExceeded`: a fixed-width backend cannot represent the next segment
//!
//! Both are deterministic. Retrying the same call on the same engine fails the
//! same way; the caller has to change the argument or the backend.
//!
//! Configuration loading adds `InvalidConfig` and `ConfigRead`.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout segsieve
pub type SieveResult<T> = Result<T, SieveError>;

/// Errors produced by the sieve, its backends and its configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// The query is undefined for this argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A fixed-width backend would have to hold a value beyond its maximum
    ///
    /// The table is left exactly as it was before the failing extension.
    #[error(
        "capacity exceeded: segment bound {bound} does not fit the {bits}-bit backend (max {max}); \
         use a wider integer type or the arbitrary-precision backend"
    )]
    CapacityExceeded {
        /// Largest value the extension needed to represent
        bound: String,
        /// Largest value the backend can represent
        max: String,
        /// Width of the backend integer type in bits
        bits: u32,
    },

    /// Configuration parsed but is not usable
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error message
        reason: String,
    },
}

impl SieveError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SieveError::InvalidArgument(msg.into())
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(bound: impl ToString, max: impl ToString, bits: u32) -> Self {
        SieveError::CapacityExceeded {
            bound: bound.to_string(),
            max: max.to_string(),
            bits,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SieveError::InvalidConfig(msg.into())
    }

    /// Whether this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SieveError::InvalidArgument(_))
    }

    /// Whether this is a capacity exceeded error
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, SieveError::CapacityExceeded { .. })
    }
}
