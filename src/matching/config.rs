//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Number of fallback equivalents drawn per product.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Configuration for equivalence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of feature-fingerprint equivalents to sample
    pub sample_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}
