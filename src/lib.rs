//! `tab2geojson` converts tabular data (CSV, TSV, Excel) into a GeoJSON
//! `FeatureCollection` of Point features.
//!
//! The pipeline is strictly sequential and fully in-memory:
//!
//! 1. **Read** — [`reader::read_table`] loads the file into a
//!    [`types::Table`], picking a parser from the file extension
//!    (`.xlsx`/`.xls` → first workbook sheet, `.tsv`/`.tab` → tab-delimited,
//!    anything else → CSV).
//! 2. **Resolve** — [`columns::resolve_columns`] finds the longitude/latitude
//!    columns, either from explicit overrides or by case-insensitive matching
//!    against ordered candidate lists (`longitude`, `lon`, `lng`, `x` /
//!    `latitude`, `lat`, `y`).
//! 3. **Convert** — [`features::table_to_feature_collection`] turns each row
//!    with finite coordinates into a Point feature; remaining columns pass
//!    through as properties, with time-like columns normalized to ISO-8601
//!    ([`time::normalize_time`]) and null/NaN values omitted.
//! 4. **Write** — [`writer::write_feature_collection`] serializes the
//!    collection as pretty-printed UTF-8 JSON.
//!
//! Rows without valid coordinates are dropped silently; any read, resolution,
//! or write failure aborts the run ([`ConvertError`]).
//!
//! The `tab2geojson` binary wraps all of this behind a CLI; library callers
//! use [`pipeline::ConvertRequest`] or the per-stage functions directly:
//!
//! ```
//! use tab2geojson::columns::resolve_columns;
//! use tab2geojson::features::table_to_feature_collection;
//! use tab2geojson::types::{Table, Value};
//!
//! let table = Table::new(
//!     vec!["lng".to_string(), "lat".to_string(), "name".to_string()],
//!     vec![vec![
//!         Value::Float64(10.75),
//!         Value::Float64(59.91),
//!         Value::Utf8("Oslo".to_string()),
//!     ]],
//! );
//!
//! let (lon_col, lat_col) = resolve_columns(&table.columns, None, None).unwrap();
//! let fc = table_to_feature_collection(&table, &lon_col, &lat_col, None);
//! assert_eq!(fc.features.len(), 1);
//! ```

pub mod columns;
pub mod error;
pub mod features;
pub mod observe;
pub mod pipeline;
pub mod reader;
pub mod time;
pub mod types;
pub mod writer;

pub use error::{ConvertError, ConvertResult};
