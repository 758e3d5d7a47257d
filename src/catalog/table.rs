//! Turning a raw sheet into a typed category table.

use super::RawSheet;
use crate::model::{
    is_cross_reference_column, Category, CategoryTable, CrossReference, Features, Product,
    BRAND_COLUMN, REQUIRED_COLUMNS, STOCK_CODE_COLUMN, STOCK_NAME_COLUMN, USAGE_COLUMN,
};
use crate::normalize::{is_truthy, normalize_column_name};
use indexmap::IndexMap;

/// Build the table of `category` from `sheet`.
///
/// Headers are normalized; blank headers are ignored. A repeated
/// cross-reference header is kept under a numbered name (`MUADIL`,
/// `MUADIL_1`, ...); any other repeated header keeps its first occurrence.
/// Required and feature columns missing from the sheet are added with empty
/// values, so every product has every field.
pub fn build_table(category: Category, sheet: &RawSheet) -> CategoryTable {
    let mut positions: IndexMap<String, usize> = IndexMap::with_capacity(sheet.headers.len());
    for (position, header) in sheet.headers.iter().enumerate() {
        let column = normalize_column_name(header);
        if column.is_empty() {
            continue;
        }
        if positions.contains_key(&column) && is_cross_reference_column(&column) {
            let renamed = unique_column_name(&positions, &column);
            tracing::debug!(
                sheet = %sheet.name,
                column = %column,
                renamed = %renamed,
                "Repeated cross-reference column kept under a new name"
            );
            positions.insert(renamed, position);
            continue;
        }
        if positions.contains_key(&column) {
            tracing::warn!(
                sheet = %sheet.name,
                column = %column,
                "Duplicate column after normalization; keeping the first one"
            );
            continue;
        }
        positions.insert(column, position);
    }

    let mut columns: Vec<String> = positions.keys().cloned().collect();
    let schema_columns = REQUIRED_COLUMNS
        .iter()
        .copied()
        .chain(category.features().iter().map(|f| f.column()));
    for column in schema_columns {
        if !positions.contains_key(column) {
            tracing::debug!(sheet = %sheet.name, column, "Adding missing column with empty values");
            columns.push(column.to_string());
        }
    }

    let products = sheet
        .rows
        .iter()
        .map(|row| build_product(category, &positions, row))
        .collect();

    CategoryTable::new(category, sheet.name.clone(), columns, products)
}

fn build_product(category: Category, positions: &IndexMap<String, usize>, row: &[String]) -> Product {
    let cell = |column: &str| cell_value(positions, row, column);

    let features = Features::from_fn(category, |feature| is_truthy(cell(feature.column())));

    let mut cross_references = Vec::new();
    let mut extra = IndexMap::new();
    for column in positions.keys() {
        if is_cross_reference_column(column) {
            cross_references.push(CrossReference::new(column.clone(), cell(column)));
        } else if !is_schema_column(category, column) {
            extra.insert(column.clone(), cell(column).to_string());
        }
    }

    Product {
        brand: cell(BRAND_COLUMN).to_string(),
        stock_code: cell(STOCK_CODE_COLUMN).to_string(),
        stock_name: cell(STOCK_NAME_COLUMN).to_string(),
        usage: cell(USAGE_COLUMN).to_string(),
        features,
        cross_references,
        extra,
    }
}

/// First `{column}_{n}` (n = 1, 2, ...) not already taken.
fn unique_column_name(positions: &IndexMap<String, usize>, column: &str) -> String {
    (1..)
        .map(|n| format!("{column}_{n}"))
        .find(|candidate| !positions.contains_key(candidate))
        .unwrap_or_else(|| column.to_string())
}

fn cell_value<'r>(positions: &IndexMap<String, usize>, row: &'r [String], column: &str) -> &'r str {
    positions
        .get(column)
        .and_then(|&position| row.get(position))
        .map_or("", String::as_str)
}

fn is_schema_column(category: Category, column: &str) -> bool {
    REQUIRED_COLUMNS.contains(&column) || category.features().iter().any(|f| f.column() == column)
}
