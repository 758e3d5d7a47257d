//! Configuration module for muadil.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use muadil::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .catalog_path("KAHVEMUADİLLER.xlsx")
//!     .sample_size(5)
//!     .build();
//!
//! // Load from file
//! use muadil::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.muadil.yaml` file in your working directory or `~/.config/muadil/`:
//!
//! ```yaml
//! catalog:
//!   path: /srv/katalog/KAHVEMUADİLLER.xlsx
//! matching:
//!   sample_size: 3
//! output:
//!   format: table
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_CATALOG_FILE, DEFAULT_SAMPLE_SIZE};
pub use types::{
    AppConfig, AppConfigBuilder, CatalogConfig, CategoriesConfig, MatchingConfig, OutputConfig,
    SearchConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.muadil.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"catalog\""));
        assert!(schema.contains("\"sample_size\""));
        assert!(schema.contains("\"show_features\""));
    }
}
