//! **Equivalent-product ("muadil") finder for a coffee machine catalog.**
//!
//! `muadil` loads a product catalog from a spreadsheet workbook with one
//! sheet per category (espresso, Turkish coffee, filter coffee), lets callers
//! search it by stock code or name, feature flags and usage tag, and finds
//! substitute products for every result.
//!
//! ## Core Concepts & Modules
//!
//! - **[`normalize`]**: Pure functions that canonicalize column names and cell
//!   values: Turkish letter folding, truthy-cell coercion, usage tags.
//! - **[`catalog`]**: Reads a workbook into a typed [`Catalog`]. Sheets are
//!   matched by normalized name, headers are normalized, and missing columns
//!   are filled with empty values. [`CatalogStore`] loads once and shares the
//!   result.
//! - **[`model`]**: [`Product`] rows with named text fields and typed
//!   [`Features`], grouped into one [`CategoryTable`] per [`Category`].
//! - **[`query`]**: [`filter_catalog`] narrows a table by free text, required
//!   features and raw usage values, keeping table order.
//! - **[`matching`]**: The [`EquivalenceResolver`]: curated cross-reference
//!   columns first, then a random sample of products with the same feature
//!   flags.
//! - **[`reports`]**: Table, JSON and CSV renderers for search results.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use muadil::{filter_catalog, find_equivalents, load_catalog, CatalogQuery, Category, Feature};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = load_catalog(Path::new("KAHVEMUADİLLER.xlsx"))?;
//!     let table = catalog.table(Category::Espresso);
//!
//!     let query = CatalogQuery::new().with_text("jura").with_feature(Feature::Milk);
//!     let mut rng = rand::thread_rng();
//!
//!     for product in filter_catalog(table, &query) {
//!         println!("{}", product.headline());
//!         for other in find_equivalents(product, table, &mut rng).iter() {
//!             println!("  ➡ {}", other.headline());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `muadil` binary wraps the library: `muadil search ESPRESSO jura
//! --feature SUTLU`, `muadil categories`, and configuration helpers.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Output settings legitimately use several bools
    clippy::struct_excessive_bools,
    // Variable names like `a`/`b` or `rows`/`row` are clear in context
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod reports;

// Re-export main types for convenience
pub use catalog::{
    load_catalog, load_from_source, CatalogStore, MemoryWorkbook, WorkbookSource, XlsxWorkbook,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use config::{CatalogConfig, MatchingConfig, OutputConfig, SearchConfig};
pub use error::{ErrorContext, MuadilError, Result};
pub use matching::{
    find_equivalents, EquivalenceResolver, EquivalenceSource, Equivalents, ResolverConfig,
};
pub use model::{Catalog, Category, CategoryTable, CrossReference, Feature, Features, Product};
pub use normalize::{is_truthy, normalize_column_name, normalize_usage, to_display_string, UsageTag};
pub use query::{filter_catalog, CatalogQuery};
pub use reports::{OutputFormat, ReportGenerator, SearchReport};
