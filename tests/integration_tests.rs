//! Integration tests for muadil
//!
//! These tests write a real workbook to disk and drive the loader, the
//! query engine, the equivalence resolver and the renderers through it.

use muadil::{
    catalog::{load_catalog, CatalogStore},
    cli::build_search_report,
    config::MatchingConfig,
    filter_catalog,
    reports::{create_reporter, OutputFormat, ReportConfig},
    CatalogQuery, Category, EquivalenceSource, Feature, MuadilError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Blank,
}

use Cell::{Blank, Bool, Number, Text};

fn write_rows(sheet: &mut Worksheet, rows: &[Vec<Cell>]) -> Result<(), XlsxError> {
    for (r, row) in rows.iter().enumerate() {
        let r = u32::try_from(r).unwrap();
        for (c, cell) in row.iter().enumerate() {
            let c = u16::try_from(c).unwrap();
            match cell {
                Text(s) => {
                    sheet.write_string(r, c, *s)?;
                }
                Number(n) => {
                    sheet.write_number(r, c, *n)?;
                }
                Bool(b) => {
                    sheet.write_boolean(r, c, *b)?;
                }
                Blank => {}
            }
        }
    }
    Ok(())
}

fn add_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<Cell>]) {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).unwrap();
    write_rows(sheet, rows).unwrap();
}

fn espresso_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            Text("MARKA"),
            Text("STOK KODU"),
            Text("STOK ADI"),
            Text("KULLANIM AMACI"),
            Text("BARİSTA TİPİ"),
            Text("YARI OTOMATİK"),
            Text("TAM OTOMATİK"),
            Text("ÖĞÜTÜCÜ"),
            Text("SÜTLÜ"),
            Text("BARDAK ISITICI"),
            Text("MUADİL 1"),
            Text("MUADİL 2"),
            Text("NOT"),
        ],
        vec![
            Text("Jura"),
            Text("E-100"),
            Text("Jura E8"),
            Text("Ev"),
            Number(0.0),
            Number(0.0),
            Number(1.0),
            Number(1.0),
            Number(1.0),
            Number(0.0),
            Text("E-200; E-999"),
            Text("E-300"),
            Text("stokta"),
        ],
        vec![
            Text("DeLonghi"),
            Text("E-200"),
            Text("Magnifica"),
            Text("Ev Tipi"),
            Number(0.0),
            Number(0.0),
            Number(1.0),
            Number(1.0),
            Number(1.0),
            Number(0.0),
        ],
        vec![
            Text("Philips"),
            Text("E-300"),
            Text("LatteGo"),
            Text("Ofis"),
            Number(0.0),
            Number(0.0),
            Number(1.0),
            Number(1.0),
            Number(1.0),
            Number(0.0),
        ],
        vec![
            Text("Rancilio"),
            Text("E-400"),
            Text("Silvia"),
            Text("Profesyonel"),
            Text("EVET"),
            Text("✔"),
        ],
        vec![],
        vec![
            Text("Gaggia"),
            Text("E-500"),
            Text("Classic"),
            Text("Profesyonel"),
            Bool(true),
            Text("1"),
            Blank,
            Text("nan"),
        ],
    ]
}

/// Turkish coffee sheet without a brand column.
fn turkish_coffee_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            Text("STOK KODU"),
            Text("STOK ADI"),
            Text("KULLANIM AMACI"),
            Text("SÜTLÜ"),
            Text("KÖZDE"),
            Text("ÖĞÜTÜCÜ"),
        ],
        vec![Text("TK-1"), Text("Arzum Okka"), Text("Ev"), Number(1.0), Number(1.0), Number(0.0)],
        vec![Text("TK-2"), Text("Fakir Kahve"), Text("Ev"), Number(0.0), Number(0.0), Number(0.0)],
        vec![Text("TK-3"), Text("Beko Okka"), Text("Ofis"), Number(1.0), Number(1.0), Number(0.0)],
    ]
}

fn filter_coffee_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![Text("STOK KODU"), Text("STOK ADI"), Text("ÖĞÜTÜCÜ"), Text("MUADİL")],
        vec![Text("F-1"), Text("Moccamaster"), Number(0.0), Text("F-2")],
        vec![Text("F-2"), Text("Bosch"), Number(0.0)],
    ]
}

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

fn write_workbook(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("KAHVEMUADİLLER.xlsx");
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        add_sheet(&mut workbook, name, rows);
    }
    workbook.save(&path).unwrap();
    Fixture { _dir: dir, path }
}

fn full_workbook() -> Fixture {
    write_workbook(&[
        ("ESPRESSO", espresso_rows()),
        ("TÜRK KAHVESİ", turkish_coffee_rows()),
        ("FILTRE_KAHVE", filter_coffee_rows()),
    ])
}

fn codes<'a>(products: impl IntoIterator<Item = &'a muadil::Product>) -> Vec<&'a str> {
    products.into_iter().map(|p| p.stock_code.as_str()).collect()
}

// ============================================================================
// Loader Tests
// ============================================================================

mod loader_tests {
    use super::*;

    #[test]
    fn test_load_all_categories() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).expect("catalog should load");

        assert_eq!(catalog.table(Category::Espresso).len(), 5);
        assert_eq!(catalog.table(Category::TurkishCoffee).len(), 3);
        assert_eq!(catalog.table(Category::FilterCoffee).len(), 2);
        assert_eq!(catalog.product_count(), 10);
        assert_eq!(catalog.source(), Some(fixture.path.as_path()));
    }

    #[test]
    fn test_sheet_names_resolved_after_normalization() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();

        assert_eq!(catalog.table(Category::TurkishCoffee).sheet_name(), "TÜRK KAHVESİ");
        assert_eq!(catalog.table(Category::FilterCoffee).sheet_name(), "FILTRE_KAHVE");
    }

    #[test]
    fn test_feature_coercion_from_mixed_cells() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let espresso = catalog.table(Category::Espresso);

        let jura = espresso.find_by_stock_code("E-100").unwrap();
        assert!(jura.has(Feature::FullyAutomatic));
        assert!(jura.has(Feature::Grinder));
        assert!(jura.has(Feature::Milk));
        assert!(!jura.has(Feature::BaristaType));

        let rancilio = espresso.find_by_stock_code("E-400").unwrap();
        assert!(rancilio.has(Feature::BaristaType));
        assert!(rancilio.has(Feature::SemiAutomatic));
        assert!(!rancilio.has(Feature::CupWarmer));

        let gaggia = espresso.find_by_stock_code("E-500").unwrap();
        assert!(gaggia.has(Feature::BaristaType), "boolean cell should be truthy");
        assert!(gaggia.has(Feature::SemiAutomatic));
        assert!(!gaggia.has(Feature::Grinder), "'nan' should be false");
        assert_eq!(gaggia.features, rancilio.features);
    }

    #[test]
    fn test_missing_brand_column_is_empty() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let turkish = catalog.table(Category::TurkishCoffee);

        assert!(turkish.iter().all(|p| p.brand.is_empty()));
        assert_eq!(turkish.products()[0].headline(), " | TK-1 | Arzum Okka");
    }

    #[test]
    fn test_cross_reference_columns_and_extras() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let espresso = catalog.table(Category::Espresso);

        assert_eq!(espresso.cross_reference_columns(), ["MUADIL_1", "MUADIL_2"]);
        let jura = espresso.find_by_stock_code("E-100").unwrap();
        assert!(jura.has_cross_references());
        assert_eq!(jura.extra.get("NOT").map(String::as_str), Some("stokta"));

        let delonghi = espresso.find_by_stock_code("E-200").unwrap();
        assert!(!delonghi.has_cross_references());
    }

    #[test]
    fn test_usage_tag_canonicalized_for_display() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let delonghi = catalog
            .table(Category::Espresso)
            .find_by_stock_code("E-200")
            .unwrap();

        assert_eq!(delonghi.usage, "Ev Tipi");
        assert_eq!(delonghi.usage_tag(), "Ev");
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let fixture = write_workbook(&[
            ("ESPRESSO", espresso_rows()),
            ("FILTRE_KAHVE", filter_coffee_rows()),
        ]);

        match load_catalog(&fixture.path) {
            Err(MuadilError::SheetNotFound {
                category,
                available,
                ..
            }) => {
                assert_eq!(category, Category::TurkishCoffee);
                assert_eq!(available, vec!["ESPRESSO", "FILTRE_KAHVE"]);
            }
            other => panic!("expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_workbook_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(&dir.path().join("yok.xlsx")).unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_store_loads_once() {
        let fixture = full_workbook();
        let store = CatalogStore::new(&fixture.path);
        assert!(!store.is_loaded());

        let first = store.get().unwrap();
        let second = store.get().unwrap();
        assert!(store.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.path(), Path::new(&fixture.path));
    }
}

// ============================================================================
// Query Tests
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn test_text_search_is_case_insensitive() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new().with_text("OKKA");

        let rows = filter_catalog(catalog.table(Category::TurkishCoffee), &query);
        assert_eq!(codes(rows), vec!["TK-1", "TK-3"]);
    }

    #[test]
    fn test_usage_matches_raw_value() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new().with_usage("Ev");

        let rows = filter_catalog(catalog.table(Category::Espresso), &query);
        assert_eq!(codes(rows), vec!["E-100"]);
    }

    #[test]
    fn test_features_and_usage_combined() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new()
            .with_feature(Feature::Milk)
            .with_feature(Feature::Grinder)
            .with_usage("Ev")
            .with_usage("Ofis");

        let rows = filter_catalog(catalog.table(Category::Espresso), &query);
        assert_eq!(codes(rows), vec!["E-100", "E-300"]);
    }

    #[test]
    fn test_feature_outside_category_matches_nothing() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new().with_feature(Feature::Milk);

        assert!(filter_catalog(catalog.table(Category::FilterCoffee), &query).is_empty());
    }
}

// ============================================================================
// Equivalence Tests
// ============================================================================

mod equivalence_tests {
    use super::*;

    fn search(
        catalog: &muadil::Catalog,
        category: Category,
        text: &str,
    ) -> Vec<(String, Vec<String>, EquivalenceSource)> {
        let query = CatalogQuery::new().with_text(text);
        let mut rng = StdRng::seed_from_u64(11);
        let report = build_search_report(
            catalog,
            category,
            &query,
            &MatchingConfig::default(),
            None,
            &mut rng,
        );
        report
            .matches
            .iter()
            .map(|m| {
                (
                    m.product.stock_code.clone(),
                    m.equivalents.iter().map(|e| e.stock_code.to_string()).collect(),
                    m.equivalence_source,
                )
            })
            .collect()
    }

    #[test]
    fn test_cross_reference_skips_unknown_codes() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();

        let results = search(&catalog, Category::Espresso, "E-100");
        assert_eq!(results.len(), 1);
        let (code, equivalents, source) = &results[0];
        assert_eq!(code, "E-100");
        assert_eq!(equivalents, &vec!["E-200".to_string(), "E-300".to_string()]);
        assert_eq!(*source, EquivalenceSource::CrossReference);
    }

    #[test]
    fn test_fallback_samples_same_fingerprint() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();

        let results = search(&catalog, Category::Espresso, "E-200");
        let (_, equivalents, source) = &results[0];
        assert_eq!(*source, EquivalenceSource::FeatureFingerprint);
        let mut sorted = equivalents.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["E-100", "E-300"]);

        let results = search(&catalog, Category::Espresso, "E-400");
        assert_eq!(results[0].1, vec!["E-500"]);
    }

    #[test]
    fn test_no_equivalents_when_fingerprint_is_unique() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();

        let results = search(&catalog, Category::TurkishCoffee, "TK-2");
        let (_, equivalents, source) = &results[0];
        assert!(equivalents.is_empty());
        assert_eq!(*source, EquivalenceSource::None);
    }

    #[test]
    fn test_filter_coffee_cross_reference_and_fallback() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();

        let results = search(&catalog, Category::FilterCoffee, "");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].1, vec!["F-2"]);
        assert_eq!(results[0].2, EquivalenceSource::CrossReference);
        assert_eq!(results[1].1, vec!["F-1"]);
        assert_eq!(results[1].2, EquivalenceSource::FeatureFingerprint);
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_json_report_end_to_end() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new().with_text("okka");
        let mut rng = StdRng::seed_from_u64(1);
        let report = build_search_report(
            &catalog,
            Category::TurkishCoffee,
            &query,
            &MatchingConfig::default(),
            None,
            &mut rng,
        );

        let output = create_reporter(OutputFormat::Json)
            .unwrap()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total_rows"], 3);
        assert_eq!(value["matches"].as_array().unwrap().len(), 2);
        assert_eq!(value["matches"][0]["product"]["stock_code"], "TK-1");
        assert_eq!(value["matches"][0]["equivalents"][0]["stock_code"], "TK-3");
        assert_eq!(value["matches"][0]["equivalence_source"], "feature_fingerprint");
    }

    #[test]
    fn test_table_report_end_to_end() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let query = CatalogQuery::new().with_text("E-100");
        let mut rng = StdRng::seed_from_u64(1);
        let report = build_search_report(
            &catalog,
            Category::Espresso,
            &query,
            &MatchingConfig::default(),
            None,
            &mut rng,
        );

        let output = create_reporter(OutputFormat::Table)
            .unwrap()
            .generate(&report, &ReportConfig::default())
            .unwrap();

        assert!(output.contains("Jura | E-100 | Jura E8"));
        assert!(output.contains("➡ DeLonghi | E-200 | Magnifica"));
        assert!(output.contains("➡ Philips | E-300 | LatteGo"));
        assert!(output.contains("KULLANIM AMACI: Ev"));
    }

    #[test]
    fn test_limit_truncates_listing() {
        let fixture = full_workbook();
        let catalog = load_catalog(&fixture.path).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = build_search_report(
            &catalog,
            Category::Espresso,
            &CatalogQuery::new(),
            &MatchingConfig::default(),
            Some(2),
            &mut rng,
        );

        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.total_rows, 5);
    }
}
