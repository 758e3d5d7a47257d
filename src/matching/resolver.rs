//! The two-tier equivalence resolver.

use super::ResolverConfig;
use crate::model::{CategoryTable, Product};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Which tier produced a product's equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceSource {
    /// Curated cross-reference cells
    CrossReference,
    /// Random sample of products with the same feature flags
    FeatureFingerprint,
    /// Nothing found
    None,
}

impl EquivalenceSource {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrossReference => "cross-reference",
            Self::FeatureFingerprint => "feature match",
            Self::None => "none",
        }
    }
}

/// Equivalents of one product, borrowed from its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalents<'a> {
    pub products: Vec<&'a Product>,
    pub source: EquivalenceSource,
}

impl<'a> Equivalents<'a> {
    const fn none() -> Self {
        Self {
            products: Vec::new(),
            source: EquivalenceSource::None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }
}

/// Resolves equivalent products within a category table.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceResolver {
    config: ResolverConfig,
}

impl EquivalenceResolver {
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Equivalents of `product` within `table`.
    ///
    /// Never fails and never modifies its inputs; an empty result is normal.
    pub fn resolve<'a, R: Rng + ?Sized>(
        &self,
        product: &Product,
        table: &'a CategoryTable,
        rng: &mut R,
    ) -> Equivalents<'a> {
        let referenced = cross_referenced(product, table);
        if !referenced.is_empty() {
            tracing::debug!(
                stock_code = %product.stock_code,
                count = referenced.len(),
                "Equivalents from cross-reference"
            );
            return Equivalents {
                products: referenced,
                source: EquivalenceSource::CrossReference,
            };
        }

        let sampled = self.sample_by_features(product, table, rng);
        if sampled.is_empty() {
            tracing::debug!(stock_code = %product.stock_code, "No equivalents");
            return Equivalents::none();
        }

        tracing::debug!(
            stock_code = %product.stock_code,
            count = sampled.len(),
            "Equivalents from feature fingerprint"
        );
        Equivalents {
            products: sampled,
            source: EquivalenceSource::FeatureFingerprint,
        }
    }

    fn sample_by_features<'a, R: Rng + ?Sized>(
        &self,
        product: &Product,
        table: &'a CategoryTable,
        rng: &mut R,
    ) -> Vec<&'a Product> {
        let candidates: Vec<&Product> = table
            .iter()
            .filter(|other| other.features == product.features)
            .filter(|other| other.stock_code != product.stock_code)
            .collect();

        let amount = self.config.sample_size.min(candidates.len());
        candidates.choose_multiple(rng, amount).copied().collect()
    }
}

/// Products named by `product`'s cross-reference cells, in column then
/// token order. Unknown codes are skipped.
fn cross_referenced<'a>(product: &Product, table: &'a CategoryTable) -> Vec<&'a Product> {
    product
        .cross_references
        .iter()
        .flat_map(|reference| reference.codes())
        .filter_map(|code| table.find_by_stock_code(code))
        .collect()
}

/// Resolve with the default configuration.
pub fn find_equivalents<'a, R: Rng + ?Sized>(
    product: &Product,
    table: &'a CategoryTable,
    rng: &mut R,
) -> Equivalents<'a> {
    EquivalenceResolver::default().resolve(product, table, rng)
}
