//! Category tables and the catalog.

use super::{Category, Product, StockCodeIndex};
use std::path::{Path, PathBuf};

/// All products of one category, in sheet row order.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    category: Category,
    sheet_name: String,
    columns: Vec<String>,
    cross_reference_columns: Vec<String>,
    products: Vec<Product>,
    index: StockCodeIndex,
}

impl CategoryTable {
    /// Build a table and its stock-code index.
    ///
    /// `columns` is the normalized column list (sheet columns first, then any
    /// schema columns that had to be added).
    pub fn new(
        category: Category,
        sheet_name: impl Into<String>,
        columns: Vec<String>,
        products: Vec<Product>,
    ) -> Self {
        let cross_reference_columns = columns
            .iter()
            .filter(|c| super::is_cross_reference_column(c))
            .cloned()
            .collect();
        let index = StockCodeIndex::build(&products);
        Self {
            category,
            sheet_name: sheet_name.into(),
            columns,
            cross_reference_columns,
            products,
            index,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Name of the sheet this table was read from, as spelled in the workbook.
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Normalized column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Normalized names of the cross-reference columns, in column order.
    #[must_use]
    pub fn cross_reference_columns(&self) -> &[String] {
        &self.cross_reference_columns
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product whose stock code equals `code`, ignoring case.
    #[must_use]
    pub fn find_by_stock_code(&self, code: &str) -> Option<&Product> {
        self.index
            .position(code)
            .and_then(|position| self.products.get(position))
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// The loaded catalog: one table per category.
///
/// Built once by the loader and never mutated afterwards, so it can be
/// shared freely (behind an `Arc`) between concurrent readers.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: Option<PathBuf>,
    espresso: CategoryTable,
    turkish_coffee: CategoryTable,
    filter_coffee: CategoryTable,
}

impl Catalog {
    /// Assemble a catalog. Each table must belong to the matching category.
    #[must_use]
    pub fn new(
        source: Option<PathBuf>,
        espresso: CategoryTable,
        turkish_coffee: CategoryTable,
        filter_coffee: CategoryTable,
    ) -> Self {
        debug_assert_eq!(espresso.category(), Category::Espresso);
        debug_assert_eq!(turkish_coffee.category(), Category::TurkishCoffee);
        debug_assert_eq!(filter_coffee.category(), Category::FilterCoffee);
        Self {
            source,
            espresso,
            turkish_coffee,
            filter_coffee,
        }
    }

    /// Workbook path the catalog was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Table of `category`.
    #[must_use]
    pub const fn table(&self, category: Category) -> &CategoryTable {
        match category {
            Category::Espresso => &self.espresso,
            Category::TurkishCoffee => &self.turkish_coffee,
            Category::FilterCoffee => &self.filter_coffee,
        }
    }

    /// All tables in category order.
    pub fn tables(&self) -> impl Iterator<Item = &CategoryTable> {
        Category::ALL.into_iter().map(move |c| self.table(c))
    }

    /// Total number of products across categories.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.tables().map(CategoryTable::len).sum()
    }
}
