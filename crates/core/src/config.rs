//! Backend configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! # frontier steps per extension; omit for the backend default
//! batch_size = 50
//! # primes to preallocate room for
//! reserve = 100000
//! ```
//!
//! Unknown keys are rejected so typos do not silently fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SieveError, SieveResult};

/// Tuning knobs shared by all prime-table backends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Frontier steps per `extend()` call; `None` uses the backend default
    ///
    /// Larger batches amortize per-window overhead but allocate a larger
    /// window. Must be at least 1.
    pub batch_size: Option<usize>,
    /// Number of primes to reserve table capacity for up front
    pub reserve: usize,
}

impl SieveConfig {
    /// Default configuration: backend batch size, no preallocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the reserved table capacity
    pub fn with_reserve(mut self, reserve: usize) -> Self {
        self.reserve = reserve;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> SieveResult<Self> {
        let config: SieveConfig =
            toml::from_str(s).map_err(|e| SieveError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> SieveResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| SieveError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject configurations no backend can run with
    pub fn validate(&self) -> SieveResult<()> {
        if self.batch_size == Some(0) {
            return Err(SieveError::invalid_config(
                "batch_size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Configured batch size, or `default` if unset
    pub fn batch_size_or(&self, default: usize) -> usize {
        self.batch_size.unwrap_or(default)
    }
}
