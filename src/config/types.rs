//! Configuration types for muadil operations.
//!
//! Provides structured configuration for the catalog source, equivalence
//! resolution and output.

use crate::matching::ResolverConfig;
use crate::model::Category;
use crate::query::CatalogQuery;
use crate::reports::{OutputFormat, ReportConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File settings are loaded first and CLI arguments are merged over them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog source
    pub catalog: CatalogConfig,
    /// Equivalence resolution
    pub matching: MatchingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the workbook path.
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog.path = path.into();
        self
    }

    /// Set the fallback sample size.
    pub const fn sample_size(mut self, sample_size: usize) -> Self {
        self.config.matching.sample_size = sample_size;
        self
    }

    /// Seed the fallback sampling.
    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.matching.seed = seed;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Show or hide feature ticks.
    pub const fn show_features(mut self, show: bool) -> Self {
        self.config.output.show_features = show;
        self
    }

    /// Limit the number of listed products.
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.output.limit = limit;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the workbook
    pub path: PathBuf,
}

/// Equivalence resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// How many feature-fingerprint equivalents to sample per product
    #[schemars(range(min = 1))]
    pub sample_size: usize,
    /// Seed for the fallback sampling; unset means a fresh random seed per run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl MatchingConfig {
    /// Resolver settings for this configuration.
    #[must_use]
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default().with_sample_size(self.sample_size)
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Print feature ticks for each product
    pub show_features: bool,
    /// Maximum number of products to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl OutputConfig {
    /// Renderer options for this configuration.
    #[must_use]
    pub const fn report_config(&self, colored: bool) -> ReportConfig {
        ReportConfig {
            show_features: self.show_features,
            colored,
        }
    }
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Configuration for the `search` command.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Workbook to load
    pub catalog_path: PathBuf,
    /// Category to search
    pub category: Category,
    /// Filter criteria
    pub query: CatalogQuery,
    /// Equivalence resolution settings
    pub matching: MatchingConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl SearchConfig {
    /// Combine the effective application config with the command's criteria.
    #[must_use]
    pub fn from_app_config(config: &AppConfig, category: Category, query: CatalogQuery) -> Self {
        Self {
            catalog_path: config.catalog.path.clone(),
            category,
            query,
            matching: config.matching.clone(),
            output: config.output.clone(),
        }
    }
}

/// Configuration for the `categories` command.
#[derive(Debug, Clone)]
pub struct CategoriesConfig {
    /// Workbook to load
    pub catalog_path: PathBuf,
    /// Output settings
    pub output: OutputConfig,
}
