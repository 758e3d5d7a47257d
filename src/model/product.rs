//! Product rows.

use super::{Category, Feature, Features};
use crate::normalize::normalize_usage;
use indexmap::IndexMap;
use serde::Serialize;

/// Normalized name of the brand column.
pub const BRAND_COLUMN: &str = "MARKA";
/// Normalized name of the stock code column.
pub const STOCK_CODE_COLUMN: &str = "STOK_KODU";
/// Normalized name of the stock name column.
pub const STOCK_NAME_COLUMN: &str = "STOK_ADI";
/// Normalized name of the usage purpose column.
pub const USAGE_COLUMN: &str = "KULLANIM_AMACI";

/// Textual columns every category table carries.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    BRAND_COLUMN,
    STOCK_CODE_COLUMN,
    STOCK_NAME_COLUMN,
    USAGE_COLUMN,
];

/// Substring that marks a column as an equivalent-product cross-reference.
pub const CROSS_REFERENCE_MARKER: &str = "MUAD";

/// Whether a normalized column name is a cross-reference column.
#[must_use]
pub fn is_cross_reference_column(column: &str) -> bool {
    column.to_uppercase().contains(CROSS_REFERENCE_MARKER)
}

/// One cross-reference cell of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReference {
    /// Normalized column name the cell came from
    pub column: String,
    /// Display string of the cell: a comma/semicolon separated list of stock codes
    pub raw: String,
}

impl CrossReference {
    pub fn new(column: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            raw: raw.into(),
        }
    }

    /// Referenced stock codes, trimmed, empties dropped, in cell order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.raw
            .split([',', ';'])
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// A single catalog row.
///
/// Every required column is present as a (possibly empty) string and every
/// feature of the row's category is present as a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub brand: String,
    pub stock_code: String,
    pub stock_name: String,
    /// Raw usage purpose as stored in the sheet; see [`Product::usage_tag`]
    pub usage: String,
    pub features: Features,
    /// Cross-reference cells, in sheet column order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<CrossReference>,
    /// Columns outside the schema, passed through untouched
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,
}

impl Product {
    /// Create a product with empty text fields and no flags set.
    #[must_use]
    pub fn new(category: Category, stock_code: impl Into<String>) -> Self {
        Self {
            brand: String::new(),
            stock_code: stock_code.into(),
            stock_name: String::new(),
            usage: String::new(),
            features: Features::none(category),
            cross_references: Vec::new(),
            extra: IndexMap::new(),
        }
    }

    /// Category of the product.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.features.category()
    }

    /// Whether a feature flag is set.
    #[must_use]
    pub fn has(&self, feature: Feature) -> bool {
        self.features.is_set(feature)
    }

    /// Canonical usage tag for display (`Ev`, `Ofis`, `Profesyonel`, or the
    /// title-cased raw value).
    #[must_use]
    pub fn usage_tag(&self) -> String {
        normalize_usage(&self.usage)
    }

    /// `BRAND | CODE | NAME` line used in listings.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} | {} | {}", self.brand, self.stock_code, self.stock_name)
    }

    /// Whether any cross-reference cell lists at least one code.
    #[must_use]
    pub fn has_cross_references(&self) -> bool {
        self.cross_references.iter().any(|r| r.codes().next().is_some())
    }
}
