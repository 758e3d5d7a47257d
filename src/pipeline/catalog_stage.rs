//! Catalog loading stage.

use crate::catalog::load_catalog;
use crate::model::Catalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the catalog at `path` with context for error messages.
pub fn load_catalog_with_context(path: &Path) -> Result<Catalog> {
    load_catalog(path).with_context(|| format!("Failed to load catalog: {}", path.display()))
}

