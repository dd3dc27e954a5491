//! Core types for segsieve
//!
//! This crate defines the pieces shared by every layer of the sieve:
//! - `SieveError` / `SieveResult`: the error type for all fallible operations
//! - `SieveConfig`: backend tuning loaded from TOML
//! - `SieveInt`: the integer capabilities a prime table needs
//! - `SegmentExtender`: the contract every prime-table backend implements
//! - `math`: the closed-form "smallest multiple" helper used by the sieve window
//!
//! Nothing here depends on a particular backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod math;
pub mod traits;

pub use config::SieveConfig;
pub use error::{SieveError, SieveResult};
pub use traits::{seed_primes, FromConfig, SegmentExtender, SieveInt};
