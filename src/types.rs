//! Core data model types.
//!
//! Input files are read into an in-memory [`Table`] whose cells are dynamically
//! typed [`Value`]s. Nothing is validated against a schema: the readers infer a
//! scalar type per cell and the converter coerces on demand.

use chrono::{DateTime, FixedOffset};

/// A single dynamically-typed cell value in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Structured date/time with a UTC offset. Produced by the spreadsheet
    /// reader; delimited readers leave time-like cells as numbers or strings.
    Timestamp(DateTime<FixedOffset>),
}

impl Value {
    /// `true` for [`Value::Null`] and for NaN floats.
    ///
    /// Missing values never become coordinates and are omitted from feature
    /// properties entirely (no `null` key in the output).
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float64(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Coerce this value to a finite `f64`, for coordinate extraction.
    ///
    /// Returns `None` when the value is missing, non-numeric, NaN, or
    /// infinite. Numeric strings are parsed; booleans coerce to 0.0/1.0.
    pub fn as_finite_f64(&self) -> Option<f64> {
        let v = match self {
            Value::Int64(i) => *i as f64,
            Value::Float64(f) => *f,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Utf8(s) => s.trim().parse::<f64>().ok()?,
            Value::Null | Value::Timestamp(_) => return None,
        };
        if v.is_finite() { Some(v) } else { None }
    }
}

/// In-memory tabular dataset.
///
/// Column names keep their original spelling and order; rows are stored
/// row-major in the same order as `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names, as spelled in the input file.
    pub columns: Vec<String>,
    /// Row-major cell storage; each row has one cell per column.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by exact (case-sensitive) name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Select the rows to convert.
    ///
    /// - `None`: all rows
    /// - `Some(0)`: no rows
    /// - `Some(n)` with `n > 0`: the first `n` rows
    /// - `Some(n)` with `n < 0`: the last `|n|` rows
    ///
    /// A count larger than the table is clamped to the full table.
    pub fn select_rows(&self, nrows: Option<i64>) -> &[Vec<Value>] {
        let Some(n) = nrows else {
            return &self.rows;
        };
        let len = self.rows.len();
        if n >= 0 {
            let take = (n as usize).min(len);
            &self.rows[..take]
        } else {
            let take = n.unsigned_abs().min(len as u64) as usize;
            &self.rows[len - take..]
        }
    }
}
