//! Public types for the segsieve API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Engine
// ============================================================================

pub use segsieve_engine::{AllPrimes, BigSieve, FastSieve, PrimeSieve, SieveStats};

// ============================================================================
// Backends
// ============================================================================

pub use segsieve_storage::{BigTable, FixedWidthTable, BIG_DEFAULT_BATCH, FIXED_DEFAULT_BATCH};

// ============================================================================
// Contracts, errors and configuration
// ============================================================================

pub use segsieve_core::{
    FromConfig, SegmentExtender, SieveConfig, SieveError, SieveInt, SieveResult,
};

/// Arbitrary-precision integer stored by `BigTable`
pub use num_bigint::BigUint;
