//! The sequential Reader → Resolver → Converter → Writer pipeline.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::columns::resolve_columns;
use crate::error::{ConvertError, ConvertResult};
use crate::features::table_to_feature_collection;
use crate::observe::{ConvertStats, PipelineObserver, Stage};
use crate::reader::read_table;
use crate::writer::write_feature_collection;

/// One conversion run: input path, output path, and options.
///
/// ```no_run
/// use tab2geojson::pipeline::ConvertRequest;
///
/// # fn main() -> Result<(), tab2geojson::ConvertError> {
/// let mut request = ConvertRequest::new("cities.csv", "cities.geojson");
/// request.nrows = Some(100);
/// let stats = request.run()?;
/// println!("wrote {} features", stats.features_written);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConvertRequest {
    /// Path to the input table file.
    pub input: PathBuf,
    /// Destination path for the GeoJSON file (overwritten if present).
    pub output: PathBuf,
    /// Explicit longitude column name; `None` uses heuristic detection.
    pub lon: Option<String>,
    /// Explicit latitude column name; `None` uses heuristic detection.
    pub lat: Option<String>,
    /// Row-count selection; `None` converts all rows, negative takes the tail.
    pub nrows: Option<i64>,
    /// Optional observer for stage events.
    pub observer: Option<Arc<dyn PipelineObserver>>,
}

impl fmt::Debug for ConvertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertRequest")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("lon", &self.lon)
            .field("lat", &self.lat)
            .field("nrows", &self.nrows)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl ConvertRequest {
    /// Create a request with default options (all rows, heuristic columns).
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            lon: None,
            lat: None,
            nrows: None,
            observer: None,
        }
    }

    /// Run the pipeline to completion.
    ///
    /// The output file is only created once reading and column resolution
    /// have succeeded, so an unresolvable input never truncates an existing
    /// output file.
    pub fn run(&self) -> ConvertResult<ConvertStats> {
        let table = read_table(&self.input).inspect_err(|e| self.fail(Stage::Read, e))?;
        if let Some(obs) = self.observer.as_ref() {
            obs.on_table_read(&self.input, table.row_count(), &table.columns);
        }

        let (lon_col, lat_col) =
            resolve_columns(&table.columns, self.lon.as_deref(), self.lat.as_deref())
                .inspect_err(|e| self.fail(Stage::Resolve, e))?;

        let collection = table_to_feature_collection(&table, &lon_col, &lat_col, self.nrows);
        let rows_selected = table.select_rows(self.nrows).len();

        let features_written = write_feature_collection(&collection, &self.output)
            .inspect_err(|e| self.fail(Stage::Write, e))?;

        let stats = ConvertStats {
            rows_read: table.row_count(),
            rows_selected,
            features_written,
            rows_skipped: rows_selected - features_written,
        };
        if let Some(obs) = self.observer.as_ref() {
            obs.on_conversion(&stats);
        }
        Ok(stats)
    }

    fn fail(&self, stage: Stage, error: &ConvertError) {
        if let Some(obs) = self.observer.as_ref() {
            obs.on_failure(stage, error);
        }
    }
}
