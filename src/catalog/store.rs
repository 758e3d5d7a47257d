//! Load-once catalog access.

use super::load_catalog;
use crate::error::Result;
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type Loader = Box<dyn Fn(&Path) -> Result<Catalog> + Send + Sync>;

/// Holds a catalog that is loaded on first use and shared afterwards.
///
/// A failed load is not cached; the next [`CatalogStore::get`] tries again.
pub struct CatalogStore {
    path: PathBuf,
    loader: Loader,
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogStore {
    /// Store backed by the workbook at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_loader(path, load_catalog)
    }

    /// Store with a custom loader.
    pub fn with_loader<F>(path: impl Into<PathBuf>, loader: F) -> Self
    where
        F: Fn(&Path) -> Result<Catalog> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            loader: Box::new(loader),
            cell: OnceCell::new(),
        }
    }

    /// The catalog, loading it if this is the first call.
    pub fn get(&self) -> Result<Arc<Catalog>> {
        self.cell
            .get_or_try_init(|| (self.loader)(&self.path).map(Arc::new))
            .cloned()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
