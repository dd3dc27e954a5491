//! Query engine for segsieve
//!
//! `PrimeSieve` wraps a `SegmentExtender` backend and answers prime queries
//! (nth prime, next/previous prime, π(n), ranges, membership) by growing the
//! backend's table just far enough and binary-searching it.
//!
//! All primitives are synchronous and take `&mut self` when they may grow the
//! table. Share an engine across threads by wrapping it in a lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iter;
pub mod sieve;
pub mod stats;

pub use iter::AllPrimes;
pub use sieve::PrimeSieve;
pub use stats::SieveStats;

use segsieve_storage::{BigTable, FixedWidthTable};

/// Sieve over 64-bit primes
pub type FastSieve = PrimeSieve<FixedWidthTable<u64>>;

/// Sieve over arbitrary-precision primes
pub type BigSieve = PrimeSieve<BigTable>;
