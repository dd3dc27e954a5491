//! Tier 1: Query Contracts
//!
//! One observable behavior per test, on the default fixed-width engine.

use crate::test_utils::*;
use segsieve::SieveError;

#[test]
fn nth_prime_is_zero_based() {
    let mut sieve = fast();
    assert_eq!(sieve.nth_prime(0).unwrap(), 2);
    assert_eq!(sieve.nth_prime(1).unwrap(), 3);
    assert_eq!(sieve.nth_prime(999).unwrap(), 7919);
}

#[test]
fn nth_primes_returns_slice_of_range() {
    let mut sieve = fast();
    assert_eq!(sieve.nth_primes(3..7).unwrap(), &[7, 11, 13, 17]);
    assert!(sieve.nth_primes(5..5).unwrap().is_empty());
}

#[test]
fn next_prime_is_strictly_greater() {
    let mut sieve = fast();
    assert_eq!(sieve.next_prime_greater_than(7).unwrap(), 11);
    assert_eq!(sieve.next_prime_greater_than(8).unwrap(), 11);
    assert_eq!(sieve.next_prime_greater_than(0).unwrap(), 2);
}

#[test]
fn prev_prime_is_strictly_less() {
    let mut sieve = fast();
    assert_eq!(sieve.prev_prime_less_than(11).unwrap(), 7);
    assert_eq!(sieve.prev_prime_less_than(12).unwrap(), 11);
    assert_eq!(sieve.prev_prime_less_than(3).unwrap(), 2);
}

#[test]
fn prev_prime_below_three_is_invalid() {
    let mut sieve = fast();
    for n in [0, 1, 2] {
        let err = sieve.prev_prime_less_than(n).unwrap_err();
        assert!(err.is_invalid_argument(), "n={n}: {err}");
    }
}

#[test]
fn is_prime_below_two_does_not_grow() {
    let mut sieve = fast();
    assert!(!sieve.is_prime(0).unwrap());
    assert!(!sieve.is_prime(1).unwrap());
    assert_eq!(sieve.len(), 4);
}

#[test]
fn index_of_rejects_composites() {
    let mut sieve = fast();
    assert_eq!(sieve.index_of(13).unwrap(), 5);
    assert!(matches!(
        sieve.index_of(15),
        Err(SieveError::InvalidArgument(_))
    ));
    assert!(sieve.index_of(1).unwrap_err().is_invalid_argument());
}

#[test]
fn range_is_half_open() {
    let mut sieve = fast();
    assert_eq!(sieve.primes_in_range(11, 13).unwrap(), &[11]);
    assert_eq!(sieve.primes_in_range(11, 14).unwrap(), &[11, 13]);
    assert_eq!(sieve.count_primes_in_range(11, 13).unwrap(), 1);
}

#[test]
fn empty_and_inverted_ranges() {
    let mut sieve = fast();
    assert!(sieve.primes_in_range(20, 20).unwrap().is_empty());
    assert!(sieve.primes_in_range(30, 10).unwrap().is_empty());
    assert!(sieve.primes_in_range(0, 2).unwrap().is_empty());
    assert_eq!(sieve.count_primes_in_range(24, 28).unwrap(), 0);
}

#[test]
fn count_primes_le_includes_bound() {
    let mut sieve = fast();
    assert_eq!(sieve.count_primes_le(0).unwrap(), 0);
    assert_eq!(sieve.count_primes_le(1).unwrap(), 0);
    assert_eq!(sieve.count_primes_le(13).unwrap(), 6);
    assert_eq!(sieve.count_primes_le(14).unwrap(), 6);
}

#[test]
fn get_does_not_grow() {
    let mut sieve = fast();
    assert_eq!(sieve.get(3), Some(&7));
    assert_eq!(sieve.get(4), None);
    sieve.ensure_len_geq(5).unwrap();
    assert_eq!(sieve.get(4), Some(&11));
}

#[test]
fn find_primes_until_stops_immediately_when_satisfied() {
    let mut sieve = fast();
    sieve.find_primes_until(|s| s.len() >= 4).unwrap();
    assert_eq!(sieve.len(), 4);
}

#[test]
fn iter_all_primes_restarts_at_two() {
    let mut sieve = fast();
    let first: Vec<u64> = sieve
        .iter_all_primes()
        .take(10)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    let again = sieve.iter_all_primes().next().unwrap().unwrap();
    assert_eq!(again, 2);
}

#[test]
fn stats_reflect_growth() {
    let mut sieve = fast();
    let before = sieve.stats();
    assert_eq!(before.backend, "fixed-width");
    assert_eq!(before.len, 4);
    assert_eq!(before.frontier, 1);
    assert_eq!(before.complete_below, "9");

    sieve.ensure_len_geq(100).unwrap();
    let after = sieve.stats();
    assert!(after.len >= 100);
    assert!(after.frontier > before.frontier);
    assert_eq!(after.largest, sieve.primes()[after.len - 1].to_string());
}
