//! Report generation for search results.
//!
//! This module renders a [`SearchReport`] in several formats:
//! - Table: listing with feature ticks and equivalents for terminals
//! - JSON: structured data for programmatic integration
//! - CSV: one line per product for spreadsheet import

mod csv;
pub mod escape;
mod json;
mod search;
mod table;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use search::{ProductRef, SearchMatch, SearchReport};
pub use table::TableReporter;
pub use types::{OutputFormat, ReportConfig};

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(OutputFormat),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a search report
    fn generate(
        &self,
        report: &SearchReport<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> OutputFormat;
}

/// Create a report generator for the given format.
///
/// `Auto` must be resolved to a concrete format first.
pub fn create_reporter(format: OutputFormat) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        OutputFormat::Table => Ok(Box::new(TableReporter::new())),
        OutputFormat::Json => Ok(Box::new(JsonReporter::new())),
        OutputFormat::Csv => Ok(Box::new(CsvReporter::new())),
        OutputFormat::Auto => Err(ReportError::UnsupportedFormat(format)),
    }
}
