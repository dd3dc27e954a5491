//! Prime table backends for segsieve
//!
//! Two interchangeable implementations of `SegmentExtender`:
//! - `FixedWidthTable<T>`: primes stored in a `Vec` of a primitive integer.
//!   Fast, bounded by `T::MAX`, fails with `CapacityExceeded` instead of wrapping.
//! - `BigTable`: primes stored as `BigUint`. Slower, unbounded.
//!
//! Both sieve the same windows with the same sieving primes, so for any
//! sequence of calls they produce identical tables (as long as the fixed
//! width backend does not overflow).
//!
//! # Design
//!
//! - `window`: the boolean mark vector for one `[p², q²)` window, shared by both
//! - Extensions compute the whole window before touching the table, so a
//!   failed extension leaves the table and frontier unchanged

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bigint;
pub mod fixed;
mod window;

pub use bigint::{BigTable, BIG_DEFAULT_BATCH};
pub use fixed::{FixedWidthTable, FIXED_DEFAULT_BATCH};

/// Frontier steps an extension will actually take
///
/// Clamps a non-zero request to the available lookahead. The frontier
/// invariant (`k < len - 1`) guarantees at least one step; anything else is
/// a bug in the backend, not a caller error.
pub(crate) fn clamp_steps(requested: usize, lookahead: usize) -> usize {
    let steps = requested.min(lookahead);
    assert!(
        steps >= 1,
        "sieve extension would make no progress (requested {requested}, lookahead {lookahead})"
    );
    steps
}
