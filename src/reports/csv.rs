//! CSV report generator.

use super::escape::csv_escape;
use super::{OutputFormat, ReportConfig, ReportError, ReportGenerator, SearchReport};
use std::fmt::Write;

/// One line per matched product; equivalents are `;`-joined stock codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        report: &SearchReport<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let features = report.category.features();
        let mut out = String::from("Brand,Stock Code,Stock Name,Usage");
        if config.show_features {
            for feature in features {
                write!(out, ",{}", feature.column())?;
            }
        }
        out.push_str(",Equivalents,Equivalence Source\n");

        for m in &report.matches {
            write!(
                out,
                "{},{},{},{}",
                csv_escape(&m.product.brand),
                csv_escape(&m.product.stock_code),
                csv_escape(&m.product.stock_name),
                csv_escape(&m.usage_tag),
            )?;
            if config.show_features {
                for (_, set) in m.product.features.iter() {
                    write!(out, ",{set}")?;
                }
            }
            let codes: Vec<&str> = m.equivalents.iter().map(|e| e.stock_code).collect();
            writeln!(
                out,
                ",{},{}",
                csv_escape(&codes.join(";")),
                m.equivalence_source.label()
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}
