//! Pipeline orchestration for catalog commands.
//!
//! Shared load → filter → resolve → report steps used by the CLI command
//! handlers.

mod catalog_stage;
mod output;

pub use catalog_stage::load_catalog_with_context;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success - at least one product matched
    pub const SUCCESS: i32 = 0;
    /// The search matched no products
    pub const NO_MATCHES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NO_MATCHES, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_missing_catalog_has_context() {
        let err = load_catalog_with_context(std::path::Path::new("/nonexistent/x.xlsx"))
            .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Failed to load catalog"), "{chain}");
        assert!(chain.contains("Workbook not found"), "{chain}");
    }
}
