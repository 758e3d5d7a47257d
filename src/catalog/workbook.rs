//! Workbook access.
//!
//! The loader only needs two things from a workbook: the list of sheet names
//! and the cells of one sheet. [`WorkbookSource`] captures that, with a
//! calamine-backed implementation for files on disk and an in-memory one for
//! tests and embedding callers.

use crate::error::{MuadilError, Result, WorkbookErrorKind};
use crate::normalize::{to_display_string, DisplayValue};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use indexmap::IndexMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A sheet as plain display strings: one header row plus data rows.
///
/// Data rows are padded to the header width; rows with no content are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    /// Build a sheet from display-ready cells, applying the padding and
    /// blank-row rules.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let mut headers = headers;
        headers.resize(width, String::new());

        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }
}

/// Read-only access to a workbook's sheets.
pub trait WorkbookSource {
    /// Sheet names, in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Read one sheet by its exact name.
    fn read_sheet(&mut self, name: &str) -> Result<RawSheet>;
}

impl DisplayValue for Data {
    fn display_string(&self) -> String {
        match self {
            Data::Empty | Data::Error(_) => String::new(),
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.display_string(),
            Data::Float(f) => f.display_string(),
            Data::Int(i) => i.display_string(),
            Data::Bool(b) => b.display_string(),
            other => other.to_string().display_string(),
        }
    }
}

/// A spreadsheet file opened with calamine (xlsx, xlsm, xlsb, xls, ods).
pub struct XlsxWorkbook {
    path: PathBuf,
    inner: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Open the workbook at `path`.
    ///
    /// A missing file is reported as [`MuadilError::FileNotFound`] so callers
    /// can tell it apart from a corrupt workbook.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MuadilError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let inner = open_workbook_auto(path).map_err(|e| {
            MuadilError::workbook(path, "opening", WorkbookErrorKind::Open(e.to_string()))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawSheet> {
        let range = self.inner.worksheet_range(name).map_err(|e| {
            MuadilError::sheet(name, "reading cells", WorkbookErrorKind::Read(e.to_string()))
        })?;
        Ok(sheet_from_range(name, &range))
    }
}

fn sheet_from_range(name: &str, range: &Range<Data>) -> RawSheet {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(to_display_string).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(to_display_string).collect())
        .collect();
    RawSheet::new(name, headers, rows)
}

/// Workbook held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: IndexMap<String, (Vec<String>, Vec<Vec<String>>)>,
}

impl MemoryWorkbook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet. Cells go through the same display normalisation as
    /// cells read from a file.
    #[must_use]
    pub fn with_sheet<H, R, C>(mut self, name: &str, headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers = headers
            .into_iter()
            .map(|h| to_display_string(h.as_ref()))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| to_display_string(cell.as_ref()))
                    .collect()
            })
            .collect();
        self.sheets.insert(name.to_string(), (headers, rows));
        self
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawSheet> {
        let (headers, rows) = self.sheets.get(name).ok_or_else(|| {
            MuadilError::sheet(
                name,
                "reading cells",
                WorkbookErrorKind::UnknownSheet(name.to_string()),
            )
        })?;
        Ok(RawSheet::new(name, headers.clone(), rows.clone()))
    }
}
