//! Modular arithmetic helpers for the sieve window
//!
//! The window sieve needs, for every sieving prime `pk`, the first multiple of
//! `pk` inside `[m, ...)`. Both helpers compute it in closed form.

use num_traits::Num;

/// Distance from `m` up to the next multiple of `n`
///
/// `(n - (m mod n)) mod n`. Zero when `n` divides `m`. Always `< n`.
///
/// `n` must be strictly positive and `m` non-negative.
#[inline]
pub fn offset_to_multiple<T>(n: &T, m: &T) -> T
where
    T: Num + Clone,
{
    debug_assert!(!n.is_zero(), "offset_to_multiple: n must be positive");
    (n.clone() - m.clone() % n.clone()) % n.clone()
}

/// Smallest multiple of `n` that is greater than or equal to `m`
///
/// `n` must be strictly positive and `m` non-negative.
#[inline]
pub fn smallest_multiple_geq<T>(n: &T, m: &T) -> T
where
    T: Num + Clone,
{
    m.clone() + offset_to_multiple(n, m)
}
