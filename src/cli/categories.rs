//! Catalog overview command handler.

use crate::config::CategoriesConfig;
use crate::model::{Catalog, Category};
use crate::pipeline::{auto_detect_format, exit_codes, load_catalog_with_context, write_output, OutputTarget};
use crate::reports::escape::{csv_escape, max_width, pad_to_width};
use crate::reports::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// One line of the overview.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    pub category: Category,
    pub name: &'static str,
    pub sheet: &'a str,
    pub products: usize,
    /// Products with at least one curated cross-reference
    pub cross_referenced: usize,
    pub features: Vec<&'static str>,
    pub cross_reference_columns: &'a [String],
}

/// Summaries of every category table, in category order.
#[must_use]
pub fn summarize(catalog: &Catalog) -> Vec<CategorySummary<'_>> {
    catalog
        .tables()
        .map(|table| CategorySummary {
            category: table.category(),
            name: table.category().display_name(),
            sheet: table.sheet_name(),
            products: table.len(),
            cross_referenced: table.iter().filter(|p| p.has_cross_references()).count(),
            features: table.category().features().iter().map(|f| f.column()).collect(),
            cross_reference_columns: table.cross_reference_columns(),
        })
        .collect()
}

/// Run the categories command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_categories(config: CategoriesConfig) -> Result<i32> {
    let catalog = load_catalog_with_context(&config.catalog_path)?;
    let summaries = summarize(&catalog);

    let target = OutputTarget::from_option(config.output.file.clone());
    let output = match auto_detect_format(config.output.format, &target) {
        OutputFormat::Json => serde_json::to_string_pretty(&summaries)?,
        OutputFormat::Csv => format_csv(&summaries),
        OutputFormat::Table | OutputFormat::Auto => format_table(&summaries),
    };
    write_output(&output, &target)?;
    Ok(exit_codes::SUCCESS)
}

fn format_table(summaries: &[CategorySummary<'_>]) -> String {
    let key_w = max_width(summaries.iter().map(|s| s.category.key()).chain(["CATEGORY"]));
    let sheet_w = max_width(summaries.iter().map(|s| s.sheet).chain(["SHEET"]));

    let mut out = format!(
        "{}  {}  {:>8}  {:>7}  FEATURES\n",
        pad_to_width("CATEGORY", key_w),
        pad_to_width("SHEET", sheet_w),
        "PRODUCTS",
        "MUADIL",
    );
    for s in summaries {
        out.push_str(&format!(
            "{}  {}  {:>8}  {:>7}  {}\n",
            pad_to_width(s.category.key(), key_w),
            pad_to_width(s.sheet, sheet_w),
            s.products,
            s.cross_referenced,
            s.features.join(", "),
        ));
    }
    out
}

fn format_csv(summaries: &[CategorySummary<'_>]) -> String {
    let mut out = String::from("Category,Sheet,Products,Cross Referenced,Features,Cross Reference Columns\n");
    for s in summaries {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            s.category.key(),
            csv_escape(s.sheet),
            s.products,
            s.cross_referenced,
            csv_escape(&s.features.join(";")),
            csv_escape(&s.cross_reference_columns.join(";")),
        ));
    }
    out
}
