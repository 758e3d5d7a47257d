//! JSON report generator.

use super::{OutputFormat, ReportConfig, ReportError, ReportGenerator, SearchReport};

/// Pretty-printed JSON of the whole [`SearchReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        report: &SearchReport<'_>,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
