//! Lazy iteration over all primes

use std::iter::FusedIterator;

use segsieve_core::{SegmentExtender, SieveResult};

use crate::sieve::PrimeSieve;

/// Iterator over every prime from 2 upward, growing the table on demand
///
/// Created by [`PrimeSieve::iter_all_primes`]. Unbounded for the
/// arbitrary-precision backend. A fixed-width backend eventually yields one
/// `CapacityExceeded` error, after which the iterator is exhausted.
pub struct AllPrimes<'a, B> {
    sieve: &'a mut PrimeSieve<B>,
    next: usize,
    done: bool,
}

impl<'a, B: SegmentExtender> AllPrimes<'a, B> {
    pub(crate) fn new(sieve: &'a mut PrimeSieve<B>) -> Self {
        Self {
            sieve,
            next: 0,
            done: false,
        }
    }
}

impl<B: SegmentExtender> Iterator for AllPrimes<'_, B> {
    type Item = SieveResult<B::Int>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.sieve.nth_prime(self.next) {
            Ok(p) => {
                self.next += 1;
                Some(Ok(p))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<B: SegmentExtender> FusedIterator for AllPrimes<'_, B> {}
