//! Delimited-text (CSV/TSV) reading.

use std::path::Path;

use crate::error::ConvertResult;
use crate::types::{Table, Value};

/// Read a delimited file into an in-memory [`Table`].
///
/// The first record is taken as the header row. Cell types are inferred per
/// cell (see [`infer_value`]); short records are padded with nulls.
pub fn read_delimited_from_path(path: impl AsRef<Path>, delimiter: u8) -> ConvertResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    read_delimited_from_reader(&mut rdr)
}

/// Read delimited data from an existing CSV reader.
pub fn read_delimited_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ConvertResult<Table> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..columns.len())
            .map(|i| infer_value(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

/// Infer a scalar type for a raw text cell.
///
/// Empty (after trimming) is null; integers before floats so that `7` stays an
/// integer while `7.5` and `1e9` become floats; `true`/`false` in any casing
/// become booleans; everything else is kept as a trimmed string.
pub fn infer_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int64(i);
    }
    // Also catches "nan"/"inf" spellings; those surface as non-finite floats
    // and are filtered out downstream.
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float64(f);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Utf8(trimmed.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::infer_value;
    use crate::types::Value;

    #[test]
    fn infers_integers_before_floats() {
        assert_eq!(infer_value("7"), Value::Int64(7));
        assert_eq!(infer_value("-3"), Value::Int64(-3));
        assert_eq!(infer_value("7.5"), Value::Float64(7.5));
        assert_eq!(infer_value("1e3"), Value::Float64(1000.0));
    }

    #[test]
    fn infers_null_bool_and_string() {
        assert_eq!(infer_value(""), Value::Null);
        assert_eq!(infer_value("   "), Value::Null);
        assert_eq!(infer_value("TRUE"), Value::Bool(true));
        assert_eq!(infer_value("false"), Value::Bool(false));
        assert_eq!(infer_value(" Oslo "), Value::Utf8("Oslo".to_string()));
    }

    #[test]
    fn nan_spelling_becomes_a_nan_float() {
        match infer_value("NaN") {
            Value::Float64(f) => assert!(f.is_nan()),
            other => panic!("expected float, got {other:?}"),
        }
    }
}
