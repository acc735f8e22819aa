//! Pipeline observers.
//!
//! The converter is deliberately quiet by default: dropped rows and omitted
//! properties produce no output of any kind. An observer is the opt-in way to
//! see what happened — the CLI wires up [`StdErrObserver`] under `--verbose`.

use std::path::Path;

use crate::error::ConvertError;

/// Pipeline stage, for failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the input table.
    Read,
    /// Resolving lon/lat columns.
    Resolve,
    /// Writing the output file. Conversion itself cannot fail, so there is
    /// no stage between these two.
    Write,
}

/// Counters for one completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Rows in the input table.
    pub rows_read: usize,
    /// Rows selected by the row-count policy.
    pub rows_selected: usize,
    /// Features written to the output file.
    pub features_written: usize,
    /// Selected rows dropped for missing/invalid coordinates.
    pub rows_skipped: usize,
}

/// Observer interface for pipeline outcomes.
///
/// Implementors can record metrics or logs. All methods default to no-ops.
pub trait PipelineObserver: Send + Sync {
    /// Called after the input table has been read.
    fn on_table_read(&self, _path: &Path, _rows: usize, _columns: &[String]) {}

    /// Called after the output file has been written.
    fn on_conversion(&self, _stats: &ConvertStats) {}

    /// Called when any stage fails; the error is still returned to the caller.
    fn on_failure(&self, _stage: Stage, _error: &ConvertError) {}
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_table_read(&self, path: &Path, rows: usize, columns: &[String]) {
        eprintln!(
            "[read][ok] path={} rows={} columns={:?}",
            path.display(),
            rows,
            columns
        );
    }

    fn on_conversion(&self, stats: &ConvertStats) {
        eprintln!(
            "[convert][ok] selected={} features={} skipped={}",
            stats.rows_selected, stats.features_written, stats.rows_skipped
        );
    }

    fn on_failure(&self, stage: Stage, error: &ConvertError) {
        eprintln!("[{stage:?}][fail] err={error}");
    }
}
