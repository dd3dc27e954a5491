//! Query engine over a growing prime table
//!
//! `PrimeSieve` answers prime queries from the cached table of its backend.
//! Every query first decides how far the table has to reach (a length or a
//! largest value), grows it with `extend()` until that holds, then answers
//! with a binary search on the sorted table.
//!
//! # Growth
//!
//! Growth is monotonic: primes already in the table are never recomputed,
//! moved or removed. Two queries in a row that need the same reach do no
//! sieving the second time.
//!
//! # Errors
//!
//! - `InvalidArgument` for queries without an answer (`prev_prime_less_than(2)`,
//!   `index_of` a composite)
//! - `CapacityExceeded` when a fixed-width backend would have to grow past its
//!   integer range; the table stays valid and smaller queries still work

use std::ops::Range;

use segsieve_core::{FromConfig, SegmentExtender, SieveConfig, SieveError, SieveInt, SieveResult};

use crate::iter::AllPrimes;
use crate::stats::SieveStats;

/// Incremental segmented prime sieve
///
/// Generic over the table backend; see `segsieve_storage` for the
/// fixed-width and arbitrary-precision backends.
///
/// # Example
///
/// ```
/// use segsieve_engine::PrimeSieve;
/// use segsieve_storage::FixedWidthTable;
///
/// let mut sieve = PrimeSieve::new(FixedWidthTable::<u64>::new());
/// assert_eq!(sieve.nth_prime(24).unwrap(), 97);
/// assert!(sieve.is_prime(8191).unwrap());
/// assert_eq!(sieve.count_primes_le(100).unwrap(), 25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimeSieve<B> {
    backend: B,
}

impl<B: SegmentExtender> PrimeSieve<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Build the backend from `config`
    pub fn from_config(config: &SieveConfig) -> SieveResult<Self>
    where
        B: FromConfig,
    {
        Ok(Self::new(B::from_config(config)?))
    }

    /// The underlying table backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap into the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    // =========================================================================
    // Read-only view
    // =========================================================================

    /// Number of primes computed so far
    pub fn len(&self) -> usize {
        self.backend.primes().len()
    }

    /// Always false: the table starts with the seed primes
    pub fn is_empty(&self) -> bool {
        self.backend.primes().is_empty()
    }

    /// All primes computed so far, in increasing order
    pub fn primes(&self) -> &[B::Int] {
        self.backend.primes()
    }

    /// Prime at index `i` if it is already cached; never grows the table
    pub fn get(&self, i: usize) -> Option<&B::Int> {
        self.backend.primes().get(i)
    }

    /// Snapshot of the table state
    pub fn stats(&self) -> SieveStats {
        SieveStats::of(&self.backend)
    }

    /// Lazily iterate over every prime, starting from 2
    ///
    /// The iterator grows the table as it goes. Each call starts again at
    /// index 0; the primes already cached are reused.
    pub fn iter_all_primes(&mut self) -> AllPrimes<'_, B> {
        AllPrimes::new(self)
    }

    // =========================================================================
    // Growth primitives
    // =========================================================================

    fn extend(&mut self) -> SieveResult<()> {
        let steps = self.backend.extend()?;
        tracing::trace!(
            target: "segsieve::engine",
            backend = self.backend.name(),
            steps,
            len = self.len(),
            largest = %self.backend.largest(),
            "grew prime table"
        );
        Ok(())
    }

    /// Grow until at least `n` primes are cached
    pub fn ensure_len_geq(&mut self, n: usize) -> SieveResult<()> {
        while self.len() < n {
            self.extend()?;
        }
        Ok(())
    }

    /// Grow until the largest cached prime is at least `n`
    pub fn ensure_max_geq(&mut self, n: &B::Int) -> SieveResult<()> {
        while self.backend.largest() < n {
            self.extend()?;
        }
        Ok(())
    }

    /// Grow until `stop` returns true
    ///
    /// `stop` is checked before every extension, so nothing is computed if it
    /// already holds.
    pub fn find_primes_until<S>(&mut self, stop: S) -> SieveResult<()>
    where
        S: FnMut(&Self) -> bool,
    {
        self.find_primes_until_with_progress(stop, |_| {})
    }

    /// Grow until `stop` returns true, calling `progress` after every extension
    pub fn find_primes_until_with_progress<S, P>(
        &mut self,
        mut stop: S,
        mut progress: P,
    ) -> SieveResult<()>
    where
        S: FnMut(&Self) -> bool,
        P: FnMut(&Self),
    {
        let mut extensions = 0usize;
        while !stop(&*self) {
            self.extend()?;
            extensions += 1;
            progress(&*self);
        }
        tracing::debug!(
            target: "segsieve::engine",
            extensions,
            len = self.len(),
            "find_primes_until stopped"
        );
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The `i`-th prime, zero-based: `nth_prime(0) == 2`
    pub fn nth_prime(&mut self, i: usize) -> SieveResult<B::Int> {
        let len = i.checked_add(1).ok_or_else(|| {
            SieveError::invalid_argument(format!("prime index {i} is not addressable"))
        })?;
        self.ensure_len_geq(len)?;
        Ok(self.primes()[i].clone())
    }

    /// Primes with indices in `range`
    ///
    /// Empty for empty or reversed ranges, without growing the table.
    pub fn nth_primes(&mut self, range: Range<usize>) -> SieveResult<&[B::Int]> {
        if range.start >= range.end {
            return Ok(&[]);
        }
        self.ensure_len_geq(range.end)?;
        Ok(&self.primes()[range])
    }

    /// Index of the smallest prime strictly greater than `n`
    pub fn index_of_next_prime_greater_than(&mut self, n: B::Int) -> SieveResult<usize> {
        let target = self.succ(&n)?;
        self.ensure_max_geq(&target)?;
        Ok(self.primes().partition_point(|p| *p <= n))
    }

    /// Smallest prime strictly greater than `n`
    pub fn next_prime_greater_than(&mut self, n: B::Int) -> SieveResult<B::Int> {
        let idx = self.index_of_next_prime_greater_than(n)?;
        Ok(self.primes()[idx].clone())
    }

    /// Index of the largest prime strictly less than `n`
    ///
    /// Fails with `InvalidArgument` when `n <= 2`.
    pub fn index_of_prev_prime_less_than(&mut self, n: B::Int) -> SieveResult<usize> {
        let target = match n.checked_pred() {
            Some(target) if n > B::Int::two() => target,
            _ => {
                return Err(SieveError::invalid_argument(format!(
                    "no prime is less than {n}"
                )))
            }
        };
        self.ensure_max_geq(&target)?;
        // primes()[0] == 2 < n, so the partition point is at least 1
        Ok(self.primes().partition_point(|p| *p < n) - 1)
    }

    /// Largest prime strictly less than `n`
    ///
    /// Fails with `InvalidArgument` when `n <= 2`.
    pub fn prev_prime_less_than(&mut self, n: B::Int) -> SieveResult<B::Int> {
        let idx = self.index_of_prev_prime_less_than(n)?;
        Ok(self.primes()[idx].clone())
    }

    /// Whether `n` is prime
    ///
    /// Grows the table past `n`. This is a sieve, not a primality test:
    /// checking one large number this way is slow.
    pub fn is_prime(&mut self, n: B::Int) -> SieveResult<bool> {
        let below = match n.checked_pred() {
            Some(below) if n >= B::Int::two() => below,
            _ => return Ok(false),
        };
        Ok(self.next_prime_greater_than(below)? == n)
    }

    /// Index `i` with `nth_prime(i) == p`
    ///
    /// Fails with `InvalidArgument` when `p` is not prime.
    pub fn index_of(&mut self, p: B::Int) -> SieveResult<usize> {
        let below = match p.checked_pred() {
            Some(below) if p >= B::Int::two() => below,
            _ => return Err(SieveError::invalid_argument(format!("{p} is not prime"))),
        };
        let idx = self.index_of_next_prime_greater_than(below)?;
        if self.primes()[idx] != p {
            return Err(SieveError::invalid_argument(format!("{p} is not prime")));
        }
        Ok(idx)
    }

    /// Number of primes less than or equal to `n`, π(n)
    pub fn count_primes_le(&mut self, n: B::Int) -> SieveResult<usize> {
        self.ensure_max_geq(&n)?;
        Ok(self.primes().partition_point(|p| *p <= n))
    }

    /// Primes `p` with `n <= p < m`
    ///
    /// Empty when the range is empty, inverted, or lies below 2.
    pub fn primes_in_range(&mut self, n: B::Int, m: B::Int) -> SieveResult<&[B::Int]> {
        let range = self.index_range(n, m)?;
        Ok(&self.primes()[range])
    }

    /// Number of primes `p` with `n <= p < m`, zero for empty or inverted ranges
    pub fn count_primes_in_range(&mut self, n: B::Int, m: B::Int) -> SieveResult<usize> {
        Ok(self.index_range(n, m)?.len())
    }

    /// Table indices of the primes in `[n, m)`
    fn index_range(&mut self, n: B::Int, m: B::Int) -> SieveResult<Range<usize>> {
        let two = B::Int::two();
        let start = match n.checked_pred() {
            Some(below) if n > two => self.index_of_next_prime_greater_than(below)?,
            _ => 0,
        };
        let end = if m > two {
            self.index_of_prev_prime_less_than(m)? + 1
        } else {
            0
        };
        Ok(start..end.max(start))
    }

    fn succ(&self, n: &B::Int) -> SieveResult<B::Int> {
        n.checked_succ().ok_or_else(|| {
            SieveError::capacity_exceeded(
                format!("{n} + 1"),
                n,
                self.backend.bits().unwrap_or_default(),
            )
        })
    }
}

impl<B: SegmentExtender> AsRef<[B::Int]> for PrimeSieve<B> {
    fn as_ref(&self) -> &[B::Int] {
        self.primes()
    }
}
