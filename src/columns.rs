//! Longitude/latitude column resolution.

use crate::error::{ConvertError, ConvertResult};

/// Longitude column candidates, checked in priority order.
pub const LON_CANDIDATES: [&str; 4] = ["longitude", "lon", "lng", "x"];

/// Latitude column candidates, checked in priority order.
pub const LAT_CANDIDATES: [&str; 3] = ["latitude", "lat", "y"];

/// Resolve the coordinate columns of a table.
///
/// An explicit override is used verbatim, without case-folding and without
/// checking that the column exists (a missing override column simply makes
/// every row drop during extraction). Without an override, candidates are
/// matched case-insensitively against the table's columns, first candidate
/// wins, and the matched column's original spelling is returned.
///
/// Fails with [`ConvertError::ColumnResolution`] listing the available
/// columns when either axis cannot be resolved.
pub fn resolve_columns(
    columns: &[String],
    lon_override: Option<&str>,
    lat_override: Option<&str>,
) -> ConvertResult<(String, String)> {
    let lon = match lon_override {
        Some(name) => Some(name.to_owned()),
        None => find_column(columns, &LON_CANDIDATES),
    };
    let lat = match lat_override {
        Some(name) => Some(name.to_owned()),
        None => find_column(columns, &LAT_CANDIDATES),
    };

    match (lon, lat) {
        (Some(lon), Some(lat)) => Ok((lon, lat)),
        _ => Err(ConvertError::ColumnResolution {
            columns: columns.to_vec(),
        }),
    }
}

fn find_column(columns: &[String], candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|cand| {
        columns
            .iter()
            .find(|col| col.to_lowercase() == *cand)
            .cloned()
    })
}

#[cfg(test)]
mod tests {
    use super::resolve_columns;
    use crate::error::ConvertError;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_case_insensitively_and_keeps_original_spelling() {
        let (lon, lat) = resolve_columns(&cols(&["id", "Longitude", "LAT"]), None, None).unwrap();
        assert_eq!(lon, "Longitude");
        assert_eq!(lat, "LAT");
    }

    #[test]
    fn candidate_priority_order_is_respected() {
        // Both `lon` and `x` match the longitude list; `lon` comes first.
        let (lon, lat) = resolve_columns(&cols(&["x", "lon", "y", "lat"]), None, None).unwrap();
        assert_eq!(lon, "lon");
        assert_eq!(lat, "lat");
    }

    #[test]
    fn falls_back_to_xy() {
        let (lon, lat) = resolve_columns(&cols(&["x", "y", "value"]), None, None).unwrap();
        assert_eq!(lon, "x");
        assert_eq!(lat, "y");
    }

    #[test]
    fn overrides_are_used_verbatim_even_when_absent() {
        let (lon, lat) =
            resolve_columns(&cols(&["a", "b"]), Some("easting"), Some("northing")).unwrap();
        assert_eq!(lon, "easting");
        assert_eq!(lat, "northing");
    }

    #[test]
    fn override_on_one_axis_still_resolves_the_other() {
        let (lon, lat) = resolve_columns(&cols(&["easting", "lat"]), Some("easting"), None).unwrap();
        assert_eq!(lon, "easting");
        assert_eq!(lat, "lat");
    }

    #[test]
    fn unresolved_axis_reports_available_columns() {
        let err = resolve_columns(&cols(&["id", "name"]), None, None).unwrap_err();
        match &err {
            ConvertError::ColumnResolution { columns } => {
                assert_eq!(columns, &cols(&["id", "name"]));
            }
            other => panic!("expected ColumnResolution, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("could not find lon/lat columns"));
        assert!(msg.contains("\"name\""));
    }
}
