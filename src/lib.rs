//! segsieve: an incremental segmented prime sieve
//!
//! A `PrimeSieve` caches every prime it has computed and grows its table only
//! as far as a query needs. Work is reused across queries: asking for the
//! 10,000th prime after the 1,000th only sieves the difference.
//!
//! # Backends
//!
//! - `FixedWidthTable<T>`: primes in a `Vec` of a primitive integer. Fast.
//!   Fails with `SieveError::CapacityExceeded` rather than wrap when the next
//!   segment would not fit `T`.
//! - `BigTable`: primes as `BigUint`. Slower, never overflows.
//!
//! # Example
//!
//! ```
//! use segsieve::FastSieve;
//!
//! let mut sieve = FastSieve::default();
//! assert_eq!(sieve.nth_prime(0).unwrap(), 2);
//! assert_eq!(sieve.next_prime_greater_than(100).unwrap(), 101);
//! assert_eq!(sieve.prev_prime_less_than(100).unwrap(), 97);
//! assert_eq!(sieve.primes_in_range(10, 20).unwrap(), &[11, 13, 17, 19]);
//! assert_eq!(sieve.count_primes_le(10_000).unwrap(), 1229);
//! ```
//!
//! # Configuration
//!
//! ```
//! use segsieve::{BigSieve, SieveConfig};
//!
//! let config = SieveConfig::from_toml_str("batch_size = 4").unwrap();
//! let sieve = BigSieve::from_config(&config).unwrap();
//! assert_eq!(sieve.stats().batch_size, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;

pub use types::*;

/// Modular arithmetic helpers used by the sieve window
pub use segsieve_core::math;
