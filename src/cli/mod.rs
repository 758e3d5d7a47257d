//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod categories;
mod search;

pub use categories::{run_categories, summarize, CategorySummary};
pub use search::{build_search_report, run_search, sampling_rng};

// Re-export config types used by handlers
pub use crate::config::{CategoriesConfig, SearchConfig};
