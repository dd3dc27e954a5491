//! Arbitrary-precision prime table
//!
//! Primes are stored as `BigUint`, so the table never runs out of range.
//! The only practical limit is that a single window has to fit in memory.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use segsieve_core::math::offset_to_multiple;
use segsieve_core::traits::SEED_FRONTIER;
use segsieve_core::{
    seed_primes, FromConfig, SegmentExtender, SieveConfig, SieveError, SieveResult,
};

use crate::clamp_steps;
use crate::window::SieveWindow;

/// Default frontier steps per extension for `BigTable`
pub const BIG_DEFAULT_BATCH: usize = 10;

/// Prime table backed by arbitrary-precision integers
#[derive(Debug, Clone)]
pub struct BigTable {
    primes: Vec<BigUint>,
    frontier: usize,
    batch_size: usize,
}

impl BigTable {
    /// Seed table with the default batch size
    pub fn new() -> Self {
        Self::with_batch_size(BIG_DEFAULT_BATCH)
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
}

impl Default for BigTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromConfig for BigTable {
    fn from_config(config: &SieveConfig) -> SieveResult<Self> {
        config.validate()?;
        let mut table = Self::with_batch_size(config.batch_size_or(BIG_DEFAULT_BATCH));
        table.primes.reserve(config.reserve);
        Ok(table)
    }
}

/// Window offsets must be addressable in memory
fn addressable(value: &BigUint) -> SieveResult<usize> {
    value
        .to_usize()
        .ok_or_else(|| SieveError::capacity_exceeded(value, usize::MAX, usize::BITS))
}

impl SegmentExtender for BigTable {
    type Int = BigUint;

    fn primes(&self) -> &[BigUint] {
        &self.primes
    }

    fn frontier(&self) -> usize {
        self.frontier
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn name(&self) -> &'static str {
        "bigint"
    }

    fn extend_by_at_most(&mut self, n: usize) -> SieveResult<usize> {
        if n == 0 {
            return Ok(0);
        }
        let k = self.frontier;
        let steps = clamp_steps(n, self.lookahead());
        let p = &self.primes[k];
        let q = &self.primes[k + steps];
        let start = p * p;
        let end = q * q;

        let mut window = SieveWindow::new(addressable(&(&end - &start))?);
        for pk in &self.primes[..k + steps] {
            let first = addressable(&offset_to_multiple(pk, &start))?;
            window.strike(first, addressable(pk)?);
        }

        let found: Vec<BigUint> = window
            .survivors()
            .map(|offset| &start + BigUint::from(offset))
            .collect();

        tracing::debug!(
            target: "segsieve::extend",
            backend = self.name(),
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
