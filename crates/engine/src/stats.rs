//! Table statistics

use serde::Serialize;

use segsieve_core::SegmentExtender;

/// Point-in-time view of a prime table
///
/// Integer values are rendered as strings so the snapshot has one shape for
/// every backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SieveStats {
    /// Backend name
    pub backend: &'static str,
    /// Number of cached primes
    pub len: usize,
    /// End-segment index
    pub frontier: usize,
    /// Frontier steps per extension
    pub batch_size: usize,
    /// Largest cached prime
    pub largest: String,
    /// The table holds every prime below this bound
    pub complete_below: String,
}

impl SieveStats {
    pub(crate) fn of<B: SegmentExtender>(backend: &B) -> Self {
        Self {
            backend: backend.name(),
            len: backend.primes().len(),
            frontier: backend.frontier(),
            batch_size: backend.batch_size(),
            largest: backend.largest().to_string(),
            complete_below: backend.complete_below().to_string(),
        }
    }
}
