//! Row-to-feature conversion.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};

use crate::time::{is_time_column, normalize_time};
use crate::types::{Table, Value};

/// Convert a table into a GeoJSON `FeatureCollection` of points.
///
/// Row selection (`nrows`) happens once up front, then each selected row is
/// converted independently:
///
/// 1. The `lon_col`/`lat_col` cells are coerced to finite floats. Rows where
///    either coordinate is missing or invalid are dropped silently.
/// 2. All other columns become properties, in table column order. Values in
///    recognized time columns are normalized to ISO-8601 first
///    ([`normalize_time`]). Keys whose value is null or NaN are omitted, not
///    emitted as JSON `null`.
///
/// Coordinate columns that do not exist in the table (possible with explicit
/// overrides) make every row drop; the result is then an empty collection.
pub fn table_to_feature_collection(
    table: &Table,
    lon_col: &str,
    lat_col: &str,
    nrows: Option<i64>,
) -> FeatureCollection {
    let lon_idx = table.index_of(lon_col);
    let lat_idx = table.index_of(lat_col);

    let mut features = Vec::new();
    for row in table.select_rows(nrows) {
        let lon = lon_idx.and_then(|i| row.get(i)).and_then(Value::as_finite_f64);
        let lat = lat_idx.and_then(|i| row.get(i)).and_then(Value::as_finite_f64);
        let (Some(lon), Some(lat)) = (lon, lat) else {
            continue;
        };

        let mut properties = JsonObject::new();
        for (idx, name) in table.columns.iter().enumerate() {
            if Some(idx) == lon_idx || Some(idx) == lat_idx {
                continue;
            }
            let cell = row.get(idx).unwrap_or(&Value::Null);
            let normalized;
            let cell = if is_time_column(name) {
                normalized = normalize_time(cell);
                &normalized
            } else {
                cell
            };
            if let Some(json) = value_to_json(cell) {
                properties.insert(name.clone(), json);
            }
        }

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::Point(vec![lon, lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Render a cell as a JSON property value.
///
/// Returns `None` for values that must be omitted from the properties map:
/// nulls, NaN, and floats JSON cannot represent (infinities).
fn value_to_json(value: &Value) -> Option<JsonValue> {
    match value {
        Value::Null => None,
        Value::Int64(i) => Some(JsonValue::from(*i)),
        Value::Float64(f) => serde_json::Number::from_f64(*f).map(JsonValue::Number),
        Value::Bool(b) => Some(JsonValue::Bool(*b)),
        Value::Utf8(s) => Some(JsonValue::String(s.clone())),
        Value::Timestamp(dt) => Some(JsonValue::String(dt.to_rfc3339())),
    }
}
