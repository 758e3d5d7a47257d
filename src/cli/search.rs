//! Catalog search command handler.
//!
//! Filters one category table and resolves the equivalents of every
//! matching product.

use crate::config::{MatchingConfig, SearchConfig};
use crate::matching::EquivalenceResolver;
use crate::model::{Catalog, Category};
use crate::pipeline::{
    auto_detect_format, exit_codes, load_catalog_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::query::{filter_catalog, CatalogQuery};
use crate::reports::{create_reporter, SearchReport};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for fallback sampling: seeded when configured.
#[must_use]
pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Filter `category` and resolve equivalents for each match.
///
/// At most `limit` products are listed; the filter itself is unaffected.
pub fn build_search_report<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    category: Category,
    query: &CatalogQuery,
    matching: &MatchingConfig,
    limit: Option<usize>,
    rng: &mut R,
) -> SearchReport<'a> {
    let table = catalog.table(category);
    let mut rows = filter_catalog(table, query);
    tracing::debug!(
        category = %category,
        filter = %query.description(),
        matches = rows.len(),
        "Catalog filtered"
    );
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    let resolver = EquivalenceResolver::new(matching.resolver_config());
    let mut report = SearchReport::new(table, query);
    for product in rows {
        let equivalents = resolver.resolve(product, table, rng);
        report.push(product, &equivalents);
    }
    report
}

/// Run the search command.
///
/// Returns the process exit code: [`exit_codes::NO_MATCHES`] when nothing
/// matched.
#[allow(clippy::needless_pass_by_value)]
pub fn run_search(config: SearchConfig) -> Result<i32> {
    let catalog = load_catalog_with_context(&config.catalog_path)?;
    let mut rng = sampling_rng(config.matching.seed);

    let report = build_search_report(
        &catalog,
        config.category,
        &config.query,
        &config.matching,
        config.output.limit,
        &mut rng,
    );

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let colored = should_use_color(config.output.no_color, &target);

    let reporter = create_reporter(format)?;
    let output = reporter.generate(&report, &config.output.report_config(colored))?;
    write_output(&output, &target)?;

    if report.is_empty() {
        Ok(exit_codes::NO_MATCHES)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
