//! Search result model shared by all renderers.

use crate::matching::{EquivalenceSource, Equivalents};
use crate::model::{Category, CategoryTable, Product};
use crate::query::CatalogQuery;
use serde::Serialize;

/// Compact reference to an equivalent product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRef<'a> {
    pub brand: &'a str,
    pub stock_code: &'a str,
    pub stock_name: &'a str,
}

impl<'a> From<&'a Product> for ProductRef<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            brand: &product.brand,
            stock_code: &product.stock_code,
            stock_name: &product.stock_name,
        }
    }
}

impl ProductRef<'_> {
    /// `BRAND | CODE | NAME`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} | {} | {}", self.brand, self.stock_code, self.stock_name)
    }
}

/// One matched product with its equivalents.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch<'a> {
    pub product: &'a Product,
    /// Canonical usage tag for display
    pub usage_tag: String,
    pub equivalents: Vec<ProductRef<'a>>,
    pub equivalence_source: EquivalenceSource,
}

/// Full result of one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub category: Category,
    pub sheet: &'a str,
    pub filter: String,
    /// Number of products in the searched table
    pub total_rows: usize,
    pub matches: Vec<SearchMatch<'a>>,
}

impl<'a> SearchReport<'a> {
    /// Empty report for `query` over `table`.
    #[must_use]
    pub fn new(table: &'a CategoryTable, query: &CatalogQuery) -> Self {
        Self {
            category: table.category(),
            sheet: table.sheet_name(),
            filter: query.description(),
            total_rows: table.len(),
            matches: Vec::new(),
        }
    }

    /// Add a matched product and its equivalents.
    pub fn push(&mut self, product: &'a Product, equivalents: &Equivalents<'a>) {
        self.matches.push(SearchMatch {
            product,
            usage_tag: product.usage_tag(),
            equivalents: equivalents.iter().map(ProductRef::from).collect(),
            equivalence_source: equivalents.source,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
