//! Canonicalisation of spreadsheet headers and cell values.
//!
//! Every spreadsheet header goes through [`normalize_column_name`] before it
//! is compared against the fixed schema, and every cell goes through
//! [`to_display_string`] before it is stored. Boolean feature flags are
//! coerced with [`is_truthy`]; usage-purpose tags are canonicalised with
//! [`normalize_usage`].
//!
//! All functions here are pure and total: any input produces an output.

mod column;
mod usage;
mod value;

pub use column::{fold_turkish, normalize_column_name};
pub use usage::{normalize_usage, title_case, UsageTag};
pub use value::{is_truthy, tick, to_display_string, DisplayValue, TRUTH_TOKENS};
