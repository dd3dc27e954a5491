//! Shared helpers for the comprehensive suite

use segsieve::{BigSieve, BigUint, FastSieve, FixedWidthTable, PrimeSieve};

/// Reference primality by trial division
pub fn is_prime_naive(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// All primes below `bound` by trial division
pub fn primes_below_naive(bound: u64) -> Vec<u64> {
    (0..bound).filter(|&n| is_prime_naive(n)).collect()
}

pub fn fast() -> FastSieve {
    FastSieve::default()
}

pub fn fast_with_batch(batch_size: usize) -> FastSieve {
    PrimeSieve::new(FixedWidthTable::with_batch_size(batch_size))
}

pub fn big() -> BigSieve {
    BigSieve::default()
}

pub fn big_u(v: u64) -> BigUint {
    BigUint::from(v)
}

pub fn big_to_u64(primes: &[BigUint]) -> Vec<u64> {
    primes
        .iter()
        .map(|p| u64::try_from(p).expect("bigint prime fits u64 in tests"))
        .collect()
}

/// Route `segsieve::*` events to the test output; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
