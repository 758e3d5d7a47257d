//! Catalog loading.
//!
//! Reads the three category sheets of a workbook into a typed [`Catalog`].
//! Sheet names are matched loosely (case, Turkish letters and punctuation
//! are ignored) and every category must be present; a workbook missing one
//! of them is rejected rather than loaded partially.

mod sheet;
mod store;
mod table;
mod workbook;

pub use sheet::{resolve_sheet, suggest_sheet};
pub use store::CatalogStore;
pub use table::build_table;
pub use workbook::{MemoryWorkbook, RawSheet, WorkbookSource, XlsxWorkbook};

use crate::error::{ErrorContext, MuadilError, Result};
use crate::model::{Catalog, Category, CategoryTable};
use std::path::{Path, PathBuf};

/// Workbook file name used when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "KAHVEMUADİLLER.xlsx";

/// Load the catalog from a workbook file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    tracing::info!(path = %path.display(), "Loading catalog");
    let mut workbook = XlsxWorkbook::open(path)?;
    load_from_source(&mut workbook, Some(path.to_path_buf()))
}

/// Load the catalog from any workbook source.
pub fn load_from_source<W: WorkbookSource + ?Sized>(
    workbook: &mut W,
    source: Option<PathBuf>,
) -> Result<Catalog> {
    let sheet_names = workbook.sheet_names();
    tracing::debug!(sheets = ?sheet_names, "Workbook sheets");

    let espresso = load_category(workbook, &sheet_names, Category::Espresso)?;
    let turkish_coffee = load_category(workbook, &sheet_names, Category::TurkishCoffee)?;
    let filter_coffee = load_category(workbook, &sheet_names, Category::FilterCoffee)?;

    let catalog = Catalog::new(source, espresso, turkish_coffee, filter_coffee);
    tracing::info!(products = catalog.product_count(), "Catalog loaded");
    Ok(catalog)
}

fn load_category<W: WorkbookSource + ?Sized>(
    workbook: &mut W,
    sheet_names: &[String],
    category: Category,
) -> Result<CategoryTable> {
    let candidates = category.sheet_candidates();
    let Some(sheet_name) = resolve_sheet(sheet_names, candidates) else {
        return Err(MuadilError::SheetNotFound {
            category,
            candidates: candidates.iter().map(ToString::to_string).collect(),
            available: sheet_names.to_vec(),
            suggestion: suggest_sheet(sheet_names, candidates),
        });
    };

    let raw = workbook
        .read_sheet(sheet_name)
        .with_context(|| format!("loading {} products", category.display_name()))?;
    let table = build_table(category, &raw);

    tracing::info!(
        category = %category,
        sheet = %sheet_name,
        rows = table.len(),
        cross_reference_columns = table.cross_reference_columns().len(),
        "Loaded category"
    );
    Ok(table)
}
