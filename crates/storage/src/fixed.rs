//! Fixed-width prime table
//!
//! Primes are stored in a `Vec<T>` for a primitive integer `T`. The width of
//! `T` bounds how far the table can grow: an extension whose window end `q²`
//! would need a value above `T::MAX` fails with `CapacityExceeded` before any
//! sieving happens.
//!
//! # Design
//!
//! - Window bounds and sieve offsets are computed in `u128`, so the overflow
//!   check itself cannot wrap for any `T` up to 128 bits
//! - Signed types work too; only their non-negative range is used

use num_traits::PrimInt;
use segsieve_core::math::offset_to_multiple;
use segsieve_core::traits::SEED_FRONTIER;
use segsieve_core::{
    seed_primes, FromConfig, SegmentExtender, SieveConfig, SieveError, SieveInt, SieveResult,
};

use crate::clamp_steps;
use crate::window::SieveWindow;

/// Default frontier steps per extension for fixed-width tables
pub const FIXED_DEFAULT_BATCH: usize = 100;

/// Prime table backed by a vector of primitive integers
///
/// The batch size also sets how far one extension reaches. With the default
/// batch a `u8` or `i8` table overflows on its second extension, long before
/// `T::MAX`; narrow tables should use `with_batch_size(1)` to fill their range.
///
/// # Example
///
/// ```
/// use segsieve_core::SegmentExtender;
/// use segsieve_storage::FixedWidthTable;
///
/// let mut table = FixedWidthTable::<u32>::new();
/// table.extend().unwrap();
/// assert_eq!(&table.primes()[..6], &[2, 3, 5, 7, 11, 13]);
/// ```
#[derive(Debug, Clone)]
pub struct FixedWidthTable<T> {
    /// Primes below `primes[frontier]²`, in increasing order
    primes: Vec<T>,
    /// End-segment index
    frontier: usize,
    /// Steps requested by `extend()`
    batch_size: usize,
}

impl<T> FixedWidthTable<T>
where
    T: PrimInt + SieveInt,
{
    /// Seed table with the default batch size
    pub fn new() -> Self {
        Self::with_batch_size(FIXED_DEFAULT_BATCH)
    }

    /// Seed table with a custom batch size (0 is treated as 1)
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            primes: seed_primes(),
            frontier: SEED_FRONTIER,
            batch_size: batch_size.max(1),
        }
    }

    /// Change the batch size used by `extend()` (0 is treated as 1)
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size.max(1);
    }

    /// Width of `T` in bits
    pub fn bit_width() -> u32 {
        T::zero().count_zeros()
    }

    /// Largest value `T` can hold
    pub fn max_value() -> T {
        T::max_value()
    }

    fn widen(value: T) -> SieveResult<u128> {
        value
            .to_u128()
            .ok_or_else(|| SieveError::capacity_exceeded(value, u128::MAX, u128::BITS))
    }

    fn narrow(value: u128) -> SieveResult<T> {
        T::from_u128(value).ok_or_else(|| {
            SieveError::capacity_exceeded(value, T::max_value(), Self::bit_width())
        })
    }

    /// `[p², q²)` in `u128`, or `CapacityExceeded` if `q² - 1 > T::MAX`
    fn window_bounds(&self, p: T, q: T) -> SieveResult<(u128, u128)> {
        let (p, q) = (Self::widen(p)?, Self::widen(q)?);
        let max = Self::widen(T::max_value())?;
        match q.checked_mul(q) {
            Some(end) if end - 1 <= max => Ok((p * p, end)),
            Some(end) => Err(SieveError::capacity_exceeded(end - 1, max, Self::bit_width())),
            None => Err(SieveError::capacity_exceeded(
                format!("{q}² - 1"),
                max,
                Self::bit_width(),
            )),
        }
    }
}

impl<T> Default for FixedWidthTable<T>
where
    T: PrimInt + SieveInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromConfig for FixedWidthTable<T>
where
    T: PrimInt + SieveInt,
{
    fn from_config(config: &SieveConfig) -> SieveResult<Self> {
        config.validate()?;
        let mut table = Self::with_batch_size(config.batch_size_or(FIXED_DEFAULT_BATCH));
        table.primes.reserve(config.reserve);
        Ok(table)
    }
}

impl<T> SegmentExtender for FixedWidthTable<T>
where
    T: PrimInt + SieveInt,
{
    type Int = T;

    fn primes(&self) -> &[T] {
        &self.primes
    }

    fn frontier(&self) -> usize {
        self.frontier
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn name(&self) -> &'static str {
        "fixed-width"
    }

    fn bits(&self) -> Option<u32> {
        Some(Self::bit_width())
    }

    fn extend_by_at_most(&mut self, n: usize) -> SieveResult<usize> {
        if n == 0 {
            return Ok(0);
        }
        let k = self.frontier;
        let steps = clamp_steps(n, self.lookahead());
        let (p, q) = (self.primes[k], self.primes[k + steps]);

        let (start, end) = match self.window_bounds(p, q) {
            Ok(bounds) => bounds,
            Err(e) => {
                tracing::warn!(
                    target: "segsieve::extend",
                    backend = self.name(),
                    bits = Self::bit_width(),
                    frontier = k,
                    steps,
                    error = %e,
                    "segment does not fit backend width"
                );
                return Err(e);
            }
        };

        let len = usize::try_from(end - start)
            .map_err(|_| SieveError::capacity_exceeded(end - start, usize::MAX, usize::BITS))?;
        let mut window = SieveWindow::new(len);
        for &pk in &self.primes[..k + steps] {
            let pk = Self::widen(pk)?;
            // offset < pk < q <= window length, so both fit in usize
            let first = offset_to_multiple(&pk, &start) as usize;
            window.strike(first, pk as usize);
        }

        let found = window
            .survivors()
            .map(|offset| Self::narrow(start + offset as u128))
            .collect::<SieveResult<Vec<T>>>()?;

        tracing::debug!(
            target: "segsieve::extend",
            backend = self.name(),
            bits = Self::bit_width(),
            frontier = k,
            steps,
            window_start = %start,
            window_end = %end,
            found = found.len(),
            "extended prime table"
        );

        self.primes.extend(found);
        self.frontier += steps;
        Ok(steps)
    }
}
