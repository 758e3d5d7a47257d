//! Catalog filtering.
//!
//! [`filter_catalog`] narrows a category table in three fixed stages
//! (free text, required features, usage tags). Each stage is skipped when
//! its criterion is empty, and the result keeps table order.

use crate::model::{CategoryTable, Feature, Product};

// ============================================================================
// Query criteria
// ============================================================================

/// Filter criteria for one category table.
///
/// All active criteria are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the stock code or stock name
    pub text: Option<String>,
    /// Features that must all be set
    pub features: Vec<Feature>,
    /// Accepted raw usage values, compared exactly
    pub usage: Vec<String>,
}

impl CatalogQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.push(usage.into());
        self
    }

    /// The free-text criterion, if it is non-empty.
    fn active_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns true if no criterion is set (would match everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_text().is_none() && self.features.is_empty() && self.usage.is_empty()
    }

    /// Human-readable description of the active criteria.
    #[must_use]
    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if let Some(text) = self.active_text() {
            parts.push(format!("\"{text}\""));
        }
        if !self.features.is_empty() {
            let columns: Vec<&str> = self.features.iter().map(|f| f.column()).collect();
            parts.push(format!("features={}", columns.join("+")));
        }
        if !self.usage.is_empty() {
            parts.push(format!("usage={}", self.usage.join("|")));
        }
        if parts.is_empty() {
            "*".to_string()
        } else {
            parts.join(" AND ")
        }
    }

    fn matches_text(product: &Product, needle_lower: &str) -> bool {
        product.stock_code.to_lowercase().contains(needle_lower)
            || product.stock_name.to_lowercase().contains(needle_lower)
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Products of `table` that satisfy `query`, in table order.
///
/// A required feature that the table's category does not have matches no
/// product.
#[must_use]
pub fn filter_catalog<'a>(table: &'a CategoryTable, query: &CatalogQuery) -> Vec<&'a Product> {
    let mut rows: Vec<&Product> = table.iter().collect();

    if let Some(text) = query.active_text() {
        let needle = text.to_lowercase();
        rows.retain(|p| CatalogQuery::matches_text(p, &needle));
        tracing::debug!(stage = "text", remaining = rows.len(), "Filter stage applied");
    }

    if !query.features.is_empty() {
        rows.retain(|p| query.features.iter().all(|&f| p.has(f)));
        tracing::debug!(stage = "features", remaining = rows.len(), "Filter stage applied");
    }

    if !query.usage.is_empty() {
        rows.retain(|p| query.usage.iter().any(|u| *u == p.usage));
        tracing::debug!(stage = "usage", remaining = rows.len(), "Filter stage applied");
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Features};

    fn product(code: &str, name: &str, usage: &str, milk: bool, embers: bool) -> Product {
        let mut p = Product::new(Category::TurkishCoffee, code);
        p.stock_name = name.to_string();
        p.usage = usage.to_string();
        p.features = Features::from_fn(Category::TurkishCoffee, |f| match f {
            Feature::Milk => milk,
            Feature::Embers => embers,
            _ => false,
        });
        p
    }

    fn table() -> CategoryTable {
        CategoryTable::new(
            Category::TurkishCoffee,
            "TURK_KAHVESI",
            vec!["STOK_KODU".to_string()],
            vec![
                product("TK-100", "Kahvekolik Közde", "Ev", false, true),
                product("TK-200", "Sütlü Pişirici", "Ofis", true, false),
                product("tk-300", "Közde Pro", "Profesyonel", true, true),
                product("X-1", "Mini", "ev kullanımı", false, false),
            ],
        )
    }

    fn codes(rows: &[&Product]) -> Vec<String> {
        rows.iter().map(|p| p.stock_code.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let t = table();
        let query = CatalogQuery::new();
        assert!(query.is_empty());
        assert_eq!(codes(&filter_catalog(&t, &query)), vec!["TK-100", "TK-200", "tk-300", "X-1"]);

        let blank = CatalogQuery::new().with_text("");
        assert!(blank.is_empty());
        assert_eq!(filter_catalog(&t, &blank).len(), 4);
    }

    #[test]
    fn test_text_matches_code_or_name_case_insensitive() {
        let t = table();
        let by_code = CatalogQuery::new().with_text("TK-3");
        assert_eq!(codes(&filter_catalog(&t, &by_code)), vec!["tk-300"]);

        let by_name = CatalogQuery::new().with_text("közde");
        assert_eq!(codes(&filter_catalog(&t, &by_name)), vec!["TK-100", "tk-300"]);

        let nothing = CatalogQuery::new().with_text("espresso");
        assert!(filter_catalog(&t, &nothing).is_empty());
    }

    #[test]
    fn test_features_are_and_combined() {
        let t = table();
        let milk = CatalogQuery::new().with_feature(Feature::Milk);
        assert_eq!(codes(&filter_catalog(&t, &milk)), vec!["TK-200", "tk-300"]);

        let both = milk.with_feature(Feature::Embers);
        assert_eq!(codes(&filter_catalog(&t, &both)), vec!["tk-300"]);
    }

    #[test]
    fn test_unsatisfied_or_foreign_feature_is_empty() {
        let t = table();
        let grinder = CatalogQuery::new().with_feature(Feature::Grinder);
        assert!(filter_catalog(&t, &grinder).is_empty());

        let cup_warmer = CatalogQuery::new().with_feature(Feature::CupWarmer);
        assert!(filter_catalog(&t, &cup_warmer).is_empty());
    }

    #[test]
    fn test_usage_compares_raw_values() {
        let t = table();
        let ev = CatalogQuery::new().with_usage("Ev");
        assert_eq!(codes(&filter_catalog(&t, &ev)), vec!["TK-100"]);

        let two = CatalogQuery::new().with_usage("Ofis").with_usage("ev kullanımı");
        assert_eq!(codes(&filter_catalog(&t, &two)), vec!["TK-200", "X-1"]);
    }

    #[test]
    fn test_stages_combine() {
        let t = table();
        let query = CatalogQuery::new()
            .with_text("tk")
            .with_feature(Feature::Milk)
            .with_usage("Profesyonel");
        assert_eq!(codes(&filter_catalog(&t, &query)), vec!["tk-300"]);
    }

    #[test]
    fn test_description() {
        assert_eq!(CatalogQuery::new().description(), "*");
        let query = CatalogQuery::new()
            .with_text("jura")
            .with_feature(Feature::Milk)
            .with_feature(Feature::Grinder)
            .with_usage("Ev");
        assert_eq!(query.description(), "\"jura\" AND features=SUTLU+OGUTUCU AND usage=Ev");
    }
}
