//! Default values for muadil configuration.

use super::types::{CatalogConfig, MatchingConfig, OutputConfig};
use crate::reports::OutputFormat;
use std::path::PathBuf;

pub use crate::catalog::DEFAULT_CATALOG_FILE;
pub use crate::matching::DEFAULT_SAMPLE_SIZE;

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Auto,
            file: None,
            no_color: false,
            show_features: true,
            limit: None,
        }
    }
}
