//! GeoJSON output writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geojson::FeatureCollection;

use crate::error::ConvertResult;

/// Serialize a `FeatureCollection` to `path` as pretty-printed UTF-8 JSON
/// (2-space indentation, non-ASCII characters written literally).
///
/// An existing file is overwritten. Returns the number of features written.
pub fn write_feature_collection(
    collection: &FeatureCollection,
    path: impl AsRef<Path>,
) -> ConvertResult<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection)?;
    writer.flush()?;
    Ok(collection.features.len())
}
