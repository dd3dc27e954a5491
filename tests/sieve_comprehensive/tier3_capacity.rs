//! Tier 3: Capacity
//!
//! Narrow backends fail with `CapacityExceeded` instead of wrapping, and a
//! failed extension leaves the table exactly as it was.

use crate::test_utils::init_tracing;
use segsieve::{FixedWidthTable, PrimeSieve, SegmentExtender, SieveError};

#[test]
fn u8_sieve_answers_within_range_then_fails() {
    init_tracing();
    let mut sieve = PrimeSieve::new(FixedWidthTable::<u8>::with_batch_size(1));
    assert_eq!(sieve.next_prime_greater_than(100).unwrap(), 101);
    assert_eq!(sieve.count_primes_le(150).unwrap(), 35);

    let err = sieve.next_prime_greater_than(250).unwrap_err();
    assert!(err.is_capacity_exceeded());
    match err {
        SieveError::CapacityExceeded { bits, .. } => assert_eq!(bits, 8),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_query_keeps_table() {
    init_tracing();
    let mut sieve = PrimeSieve::new(FixedWidthTable::<u8>::with_batch_size(1));
    assert!(sieve.count_primes_le(u8::MAX).is_err());
    let snapshot = sieve.primes().to_vec();
    let frontier = sieve.backend().frontier();

    assert!(sieve.is_prime(251).is_err());
    assert_eq!(sieve.primes(), snapshot.as_slice());
    assert_eq!(sieve.backend().frontier(), frontier);

    // queries inside the cached range still work
    assert_eq!(sieve.prev_prime_less_than(100).unwrap(), 97);
}

#[test]
fn successor_of_max_is_capacity_error() {
    let mut sieve = PrimeSieve::new(FixedWidthTable::<u8>::new());
    let err = sieve.index_of_next_prime_greater_than(u8::MAX).unwrap_err();
    assert!(err.is_capacity_exceeded());
}

#[test]
fn iterator_surfaces_capacity_error_once() {
    let mut sieve = PrimeSieve::new(FixedWidthTable::<i8>::with_batch_size(1));
    let items: Vec<_> = sieve.iter_all_primes().collect();
    let (last, primes) = items.split_last().unwrap();
    assert!(last.as_ref().unwrap_err().is_capacity_exceeded());
    assert!(primes.iter().all(|p| p.is_ok()));
    assert_eq!(primes.len(), sieve.len());
}

#[test]
fn wide_types_do_not_fail_on_ordinary_queries() {
    let mut sieve = PrimeSieve::new(FixedWidthTable::<u32>::new());
    assert_eq!(sieve.nth_prime(10_000).unwrap(), 104_743);
    let mut sieve = PrimeSieve::new(FixedWidthTable::<i64>::new());
    assert_eq!(sieve.prev_prime_less_than(1_000_000).unwrap(), 999_983);
}
