//! Index structures for fast stock-code lookups.
//!
//! Cross-reference resolution looks up every referenced stock code in the
//! product's table. Building the index once per table turns those lookups
//! from O(rows) scans into O(1) hash hits.

use super::Product;
use std::collections::HashMap;

/// Case-insensitive stock code → first row position.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct StockCodeIndex {
    by_code_upper: HashMap<String, usize>,
}

impl StockCodeIndex {
    /// Build the index over `products`.
    ///
    /// Stock codes are assumed unique but this is not enforced; when two rows
    /// share a code, the earlier row wins.
    pub fn build(products: &[Product]) -> Self {
        let mut by_code_upper = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            by_code_upper
                .entry(product.stock_code.to_uppercase())
                .or_insert(position);
        }
        Self { by_code_upper }
    }

    /// Position of the first row whose stock code equals `code`, ignoring case.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.by_code_upper.get(&code.to_uppercase()).copied()
    }

    /// Number of distinct (case-folded) stock codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code_upper.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code_upper.is_empty()
    }
}
