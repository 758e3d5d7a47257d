//! Terminal listing of search results.

use super::escape::{max_width, pad_to_width};
use super::{OutputFormat, ReportConfig, ReportError, ReportGenerator, SearchReport};
use crate::matching::EquivalenceSource;
use crate::normalize::tick;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Label printed before the usage tag.
const USAGE_LABEL: &str = "KULLANIM AMACI";
/// Heading of the equivalents block.
const EQUIVALENTS_LABEL: &str = "Muadiller";
/// Prefix of each equivalent line.
const EQUIVALENT_ARROW: &str = "➡";

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Human-readable listing: one block per product with feature ticks, usage
/// tag and equivalents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReporter;

impl TableReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        report: &SearchReport<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let colored = config.colored;
        let mut out = String::new();

        writeln!(
            out,
            "{}: {} of {} products match {}",
            report.category.display_name(),
            report.matches.len(),
            report.total_rows,
            report.filter
        )?;

        let labels: Vec<String> = report.category.features().iter().map(|f| f.label()).collect();
        let label_width = max_width(labels.iter().map(String::as_str).chain([USAGE_LABEL])) + 1;

        for m in &report.matches {
            out.push('\n');
            let headline = m.product.headline();
            writeln!(out, "{}", ansi_color(&headline, "bold", colored))?;
            writeln!(out, "{}", "─".repeat(UnicodeWidthStr::width(headline.as_str()).max(1)))?;

            if config.show_features {
                for (label, (_, set)) in labels.iter().zip(m.product.features.iter()) {
                    let mark = ansi_color(tick(set), if set { "green" } else { "red" }, colored);
                    writeln!(out, "  {} {mark}", pad_to_width(&format!("{label}:"), label_width))?;
                }
            }

            if !m.usage_tag.is_empty() {
                writeln!(
                    out,
                    "  {} {}",
                    pad_to_width(&format!("{USAGE_LABEL}:"), label_width),
                    m.usage_tag
                )?;
            }

            if m.equivalents.is_empty() {
                writeln!(out, "  {EQUIVALENTS_LABEL}: -")?;
                continue;
            }

            let source = match m.equivalence_source {
                EquivalenceSource::FeatureFingerprint => {
                    format!(" {}", ansi_color("(benzer özellikler)", "dim", colored))
                }
                EquivalenceSource::CrossReference | EquivalenceSource::None => String::new(),
            };
            writeln!(out, "  {EQUIVALENTS_LABEL}:{source}")?;
            for equivalent in &m.equivalents {
                writeln!(out, "    {EQUIVALENT_ARROW} {}", equivalent.headline())?;
            }
        }

        if report.is_empty() {
            writeln!(out, "\n0 products found")?;
        }

        Ok(out)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Table
    }
}
