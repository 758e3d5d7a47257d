//! Unified error types for muadil.
//!
//! This module provides the error hierarchy for the library, with enough
//! context to tell a user which workbook, sheet, or setting is at fault.

use crate::model::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for muadil operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MuadilError {
    /// The configured workbook does not exist
    #[error("Workbook not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The workbook exists but could not be opened or read
    #[error("Failed to read workbook {}: {context}", .path.display())]
    Workbook {
        path: PathBuf,
        context: String,
        #[source]
        source: WorkbookErrorKind,
    },

    /// No sheet in the workbook matches any candidate name of a category
    #[error(
        "No sheet found for category {category} (tried: {}; available: {}){}",
        .candidates.join(", "),
        .available.join(", "),
        did_you_mean(.suggestion.as_deref())
    )]
    SheetNotFound {
        category: Category,
        candidates: Vec<String>,
        available: Vec<String>,
        suggestion: Option<String>,
    },

    /// A resolved sheet could not be turned into a table
    #[error("Failed to read sheet '{sheet}': {context}")]
    Sheet {
        sheet: String,
        context: String,
        #[source]
        source: WorkbookErrorKind,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific workbook error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WorkbookErrorKind {
    #[error("cannot open workbook: {0}")]
    Open(String),

    #[error("cannot read worksheet: {0}")]
    Read(String),

    #[error("no sheet named '{0}'")]
    UnknownSheet(String),
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" - did you mean '{s}'?"))
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for muadil operations
pub type Result<T> = std::result::Result<T, MuadilError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MuadilError {
    /// Create a workbook error with context
    pub fn workbook(
        path: impl Into<PathBuf>,
        context: impl Into<String>,
        source: WorkbookErrorKind,
    ) -> Self {
        Self::Workbook {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Create a sheet error with context
    pub fn sheet(
        sheet: impl Into<String>,
        context: impl Into<String>,
        source: WorkbookErrorKind,
    ) -> Self {
        Self::Sheet {
            sheet: sheet.into(),
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error means the catalog source itself is missing.
    #[must_use]
    pub const fn is_missing_source(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is chained in front of whatever context the error
/// already carries, so nested calls read outermost-first.
///
/// ```ignore
/// use muadil::error::ErrorContext;
///
/// let catalog = load_catalog(&path)
///     .with_context(|| format!("loading catalog from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MuadilError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Variants that describe a missing file or sheet carry structured data
/// instead of free text and are passed through untouched.
fn add_context_to_error(err: MuadilError, new_ctx: &str) -> MuadilError {
    match err {
        MuadilError::Workbook {
            path,
            context: existing,
            source,
        } => MuadilError::Workbook {
            path,
            context: chain_context(new_ctx, &existing),
            source,
        },
        MuadilError::Sheet {
            sheet,
            context: existing,
            source,
        } => MuadilError::Sheet {
            sheet,
            context: chain_context(new_ctx, &existing),
            source,
        },
        MuadilError::Validation(msg) => MuadilError::Validation(chain_context(new_ctx, &msg)),
        other @ (MuadilError::FileNotFound { .. } | MuadilError::SheetNotFound { .. }) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = MuadilError::FileNotFound {
            path: PathBuf::from("KAHVEMUADİLLER.xlsx"),
        };
        assert!(err.to_string().contains("KAHVEMUADİLLER.xlsx"));
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_sheet_not_found_display_with_suggestion() {
        let err = MuadilError::SheetNotFound {
            category: Category::TurkishCoffee,
            candidates: vec!["TÜRK_KAHVESİ".to_string(), "TURK_KAHVESI".to_string()],
            available: vec!["ESPRESSO".to_string(), "TURK KAHVE".to_string()],
            suggestion: Some("TURK KAHVE".to_string()),
        };
        let display = err.to_string();
        assert!(display.contains("TURK_KAHVESI"), "{display}");
        assert!(display.contains("did you mean 'TURK KAHVE'"), "{display}");
        assert!(!err.is_missing_source());
    }

    #[test]
    fn test_sheet_not_found_display_without_suggestion() {
        let err = MuadilError::SheetNotFound {
            category: Category::Espresso,
            candidates: vec!["ESPRESSO".to_string()],
            available: vec![],
            suggestion: None,
        };
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_workbook_error_chain() {
        let err = MuadilError::workbook(
            "/data/catalog.xlsx",
            "opening",
            WorkbookErrorKind::Open("not a zip archive".to_string()),
        );

        assert!(err.to_string().contains("/data/catalog.xlsx"));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("cannot open workbook: not a zip archive"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MuadilError::sheet(
                "ESPRESSO",
                "base",
                WorkbookErrorKind::Read("truncated".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(MuadilError::Sheet { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Sheet error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_leaves_file_not_found_untouched() {
        let result: Result<()> = Err(MuadilError::FileNotFound {
            path: PathBuf::from("missing.xlsx"),
        });
        let err = result.context("loading catalog").unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MuadilError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
