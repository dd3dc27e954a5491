//! Sieve Comprehensive Test Suite
//!
//! Exercises the public `segsieve` API end to end.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Query contracts (one behavior per test)
//! - **Tier 2**: Backend agreement (fixed-width vs bigint)
//! - **Tier 3**: Capacity and failure atomicity
//! - **Tier 4**: Property-based tests
//! - **Tier 5**: Configuration loading
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sieve_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Query Contracts
mod tier1_query_contracts;


// Tier 3: Capacity
mod tier3_capacity;
