use thiserror::Error;

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error type shared by every stage of the pipeline.
///
/// All variants are fatal: the run aborts on the first error and no output
/// file is written (the writer only runs after read/resolve succeed).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Underlying I/O error (e.g. file not found, destination not writable).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet parse error.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// JSON serialization error while writing the output file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is structurally unusable (e.g. a workbook with no sheets).
    #[error("malformed input: {message}")]
    Malformed { message: String },

    /// Neither an explicit override nor the heuristic candidate lists matched
    /// a longitude/latitude column.
    #[error(
        "could not find lon/lat columns. columns in file: {columns:?}. \
         try specifying --lon and --lat explicitly"
    )]
    ColumnResolution { columns: Vec<String> },
}
