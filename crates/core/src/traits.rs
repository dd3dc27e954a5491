//! Trait definitions shared by backends and the query engine
//!
//! `SegmentExtender` is the seam between the two layers: backends own the
//! prime table and know how to grow it, the engine only reads the table and
//! asks for more.

use num_traits::{CheckedAdd, CheckedSub, FromPrimitive, Num, ToPrimitive};
use std::fmt;

use crate::config::SieveConfig;
use crate::error::SieveResult;

/// Integer type a prime table can be stored in
///
/// Implemented for every primitive integer and for `num_bigint::BigUint`.
/// Arithmetic that can leave the representable range goes through the
/// checked helpers so fixed-width backends never wrap.
pub trait SieveInt:
    Clone
    + Ord
    + fmt::Debug
    + fmt::Display
    + Num
    + CheckedAdd
    + CheckedSub
    + FromPrimitive
    + ToPrimitive
{
    /// `self + 1`, or `None` if it is not representable
    #[inline]
    fn checked_succ(&self) -> Option<Self> {
        self.checked_add(&Self::one())
    }

    /// `self - 1`, or `None` if it is not representable
    #[inline]
    fn checked_pred(&self) -> Option<Self> {
        self.checked_sub(&Self::one())
    }

    /// The constant 2, the smallest prime
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> SieveInt for T where
    T: Clone
        + Ord
        + fmt::Debug
        + fmt::Display
        + Num
        + CheckedAdd
        + CheckedSub
        + FromPrimitive
        + ToPrimitive
{
}

/// The seed table `[2, 3, 5, 7]` in any `SieveInt`
///
/// With frontier index 1 the seed is complete up to `3² = 9`.
pub fn seed_primes<T: SieveInt>() -> Vec<T> {
    let two = T::two();
    let three = two.clone() + T::one();
    let five = three.clone() + two.clone();
    let seven = five.clone() + two.clone();
    vec![two, three, five, seven]
}

/// Frontier index of the seed table
pub const SEED_FRONTIER: usize = 1;

/// A prime table that can be grown one window at a time
///
/// # Invariants
///
/// At every observable point, with `k = frontier()`:
/// - `primes()` is strictly increasing and starts `[2, 3, 5, 7]`
/// - `primes()` holds exactly the primes in `[2, primes()[k]²)`
/// - `k < primes().len() - 1`, so at least one lookahead prime exists
///
/// # Extension
///
/// `extend_by_at_most(n)` sieves the window `[p², q²)` with `p = primes()[k]`
/// and `q = primes()[k + n']`, `n' = min(n, lookahead())`. On success it
/// returns `n'` and the frontier has advanced by `n'`. On failure nothing has
/// changed.
pub trait SegmentExtender {
    /// Integer type of the stored primes
    type Int: SieveInt;

    /// Read-only view of the primes computed so far
    fn primes(&self) -> &[Self::Int];

    /// Index `k` such that the table is complete below `primes()[k]²`
    fn frontier(&self) -> usize;

    /// Frontier steps requested by `extend()`
    fn batch_size(&self) -> usize;

    /// Advance the frontier by up to `n` steps, appending the new primes
    ///
    /// Returns the number of steps actually taken.
    fn extend_by_at_most(&mut self, n: usize) -> SieveResult<usize>;

    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Width of the stored integer in bits, `None` for unbounded backends
    fn bits(&self) -> Option<u32> {
        None
    }

    /// Advance the frontier by up to `batch_size()` steps
    fn extend(&mut self) -> SieveResult<usize> {
        self.extend_by_at_most(self.batch_size())
    }

    /// Number of primes beyond the frontier
    fn lookahead(&self) -> usize {
        self.primes().len() - 1 - self.frontier()
    }

    /// Exclusive upper bound below which the table is complete
    fn complete_below(&self) -> Self::Int {
        let p = self.primes()[self.frontier()].clone();
        p.clone() * p
    }

    /// Largest prime in the table
    fn largest(&self) -> &Self::Int {
        let primes = self.primes();
        &primes[primes.len() - 1]
    }
}

/// Backends that can be built from a `SieveConfig`
pub trait FromConfig: Sized {
    /// Validate `config` and build a seed table from it
    fn from_config(config: &SieveConfig) -> SieveResult<Self>;
}
