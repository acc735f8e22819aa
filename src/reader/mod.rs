//! Table readers and format dispatch.
//!
//! Most callers should use [`read_table`], which picks a reader from the file
//! extension and loads the whole file into an in-memory
//! [`crate::types::Table`]. Format-specific functions are available under:
//!
//! - [`delimited`] (CSV/TSV, or any delimiter)
//! - [`excel`] (first sheet of an `.xlsx`/`.xls` workbook)

use std::path::Path;

use crate::error::ConvertResult;
use crate::types::Table;

pub mod delimited;
pub mod excel;

pub use delimited::{read_delimited_from_path, read_delimited_from_reader};
pub use excel::read_excel_from_path;

/// How a table file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Character-delimited text with a header row.
    Delimited {
        /// Field delimiter byte (`b','` for CSV, `b'\t'` for TSV).
        delimiter: u8,
    },
    /// Spreadsheet workbook; only the first sheet is read.
    Excel,
}

impl TableFormat {
    /// Pick a format from a path's extension (case-insensitive).
    ///
    /// `.xlsx`/`.xls` select [`TableFormat::Excel`], `.tsv`/`.tab` select
    /// tab-delimited text. Everything else, including `.csv`, unknown
    /// extensions, and paths with no extension at all, is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx") | Some("xls") => Self::Excel,
            Some("tsv") | Some("tab") => Self::Delimited { delimiter: b'\t' },
            _ => Self::Delimited { delimiter: b',' },
        }
    }
}

/// Read a table file, dispatching on the file extension.
pub fn read_table(path: impl AsRef<Path>) -> ConvertResult<Table> {
    let path = path.as_ref();
    match TableFormat::from_path(path) {
        TableFormat::Delimited { delimiter } => delimited::read_delimited_from_path(path, delimiter),
        TableFormat::Excel => excel::read_excel_from_path(path),
    }
}
