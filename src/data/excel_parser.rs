//! Excel (.xlsx/.xls) loading via calamine.
//!
//! The first worksheet is read; its first row becomes the header. Excel
//! stores most numbers as floats, so whole-valued floats collapse back
//! to integers when the whole column is whole-valued.

use crate::constants::MAX_TABLE_ROWS;
use crate::data::error::{DataError, DataResult};
use crate::data::infer_value_column_type;
use crate::types::{Column, DataOrigin, DynamicValue, Row, TableSource};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Load the first worksheet of a spreadsheet into a TableSource
pub fn parse_excel_file(path: &Path) -> DataResult<TableSource> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataError::EmptyFile)??;

    let mut cell_rows = range.rows();
    let header = cell_rows.next().ok_or(DataError::EmptyFile)?;
    let names: Vec<String> = header.iter().map(header_text).collect();
    if names.iter().all(|n| n.is_empty()) {
        return Err(DataError::NoColumns);
    }

    let mut rows: Vec<Row> = Vec::new();
    for cells in cell_rows {
        if rows.len() >= MAX_TABLE_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1,
                max_rows: MAX_TABLE_ROWS,
            });
        }
        let values = (0..names.len())
            .map(|i| cells.get(i).map(cell_to_dynamic).unwrap_or(DynamicValue::Null))
            .collect();
        rows.push(Row::new(values));
    }

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name, infer_value_column_type(&rows, i)))
        .collect();

    Ok(TableSource {
        name: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Data")
            .to_string(),
        columns,
        rows,
        origin: DataOrigin::Excel {
            path: path.to_path_buf(),
        },
    })
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{}", other),
    }
}

fn cell_to_dynamic(cell: &Data) -> DynamicValue {
    match cell {
        Data::Empty => DynamicValue::Null,
        Data::String(s) => DynamicValue::Text(s.clone()),
        Data::Int(i) => DynamicValue::Integer(*i),
        Data::Float(f) => {
            // Whole-valued floats are almost always integer data that
            // Excel widened.
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                DynamicValue::Integer(*f as i64)
            } else {
                DynamicValue::Float(*f)
            }
        }
        Data::Bool(b) => DynamicValue::Boolean(*b),
        Data::DateTime(dt) => DynamicValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => DynamicValue::Text(s.clone()),
        Data::Error(e) => DynamicValue::Text(format!("#ERR:{:?}", e)),
    }
}
