//! Spreadsheet reading via `calamine`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{TimeZone, Utc};

use crate::error::{ConvertError, ConvertResult};
use crate::types::{Table, Value};

/// Read the first sheet of a workbook (`.xlsx`, `.xls`) into a [`Table`].
///
/// The first non-empty row is taken as the header row; everything below it
/// becomes data. Date/time cells carry through as [`Value::Timestamp`]
/// (assumed UTC, since workbook cells have no timezone).
pub fn read_excel_from_path(path: impl AsRef<Path>) -> ConvertResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::Malformed {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut iter = range.rows();
    let header = iter.find(|row| row.iter().any(|c| !matches!(c, Data::Empty)));
    let Some(header_row) = header else {
        // Entirely empty sheet: an empty table, which later fails column
        // resolution rather than erroring here.
        return Ok(Table::new(Vec::new(), Vec::new()));
    };
    let columns: Vec<String> = header_row.iter().map(cell_to_header_string).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for row in iter {
        let out = (0..columns.len())
            .map(|i| cell_to_value(row.get(i).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out);
    }

    Ok(Table::new(columns, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}

fn cell_to_value(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::Utf8(trimmed.to_owned())
            }
        }
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            // Workbook timestamps are naive; treat them as UTC.
            Some(naive) => Value::Timestamp(Utc.from_utc_datetime(&naive).fixed_offset()),
            None => Value::Float64(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match chrono::DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Value::Timestamp(dt),
            Err(_) => Value::Utf8(s.clone()),
        },
        Data::DurationIso(s) => Value::Utf8(s.clone()),
        // Formula/reference errors behave like missing cells.
        Data::Error(_) => Value::Null,
    }
}
