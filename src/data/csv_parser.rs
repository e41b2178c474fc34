//! CSV and TSV file parsing
//!
//! Parses CSV/TSV files into [`TableSource`] structs with automatic
//! type inference. The delimiter is taken from the extension (.tsv uses
//! tab) or from content analysis.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than [`MAX_FILE_SIZE_MB`] are rejected
//! - Files with more than [`MAX_TABLE_ROWS`] rows are rejected

use crate::constants::{MAX_FILE_SIZE_MB, MAX_TABLE_ROWS, TYPE_INFERENCE_SAMPLE};
use crate::data::error::{DataError, DataResult};
use crate::types::{Column, DataOrigin, DataType, DynamicValue, Row, TableSource};
use std::path::Path;

/// Parse a CSV or TSV file into a TableSource
pub fn parse_csv_file(path: &Path) -> DataResult<TableSource> {
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_FILE_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_FILE_SIZE_MB,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let delimiter = detect_delimiter(path, &content);
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string();

    let mut table = parse_csv_content(&content, delimiter)?;
    table.name = name;
    table.origin = DataOrigin::Csv {
        path: path.to_path_buf(),
        delimiter,
    };
    Ok(table)
}

/// Parse CSV/TSV content from a string
pub fn parse_csv_content(content: &str, delimiter: char) -> DataResult<TableSource> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(DataError::EmptyFile)?;
    let headers = split_csv_line(header_line, delimiter);
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DataError::NoColumns);
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if raw_rows.len() >= MAX_TABLE_ROWS {
            return Err(DataError::TooManyRows {
                rows: raw_rows.len() + 1,
                max_rows: MAX_TABLE_ROWS,
            });
        }
        raw_rows.push(
            split_csv_line(line, delimiter)
                .into_iter()
                .map(|s| s.trim().to_string())
                .collect(),
        );
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.trim(), infer_column_type(&raw_rows, i)))
        .collect();

    let rows: Vec<Row> = raw_rows
        .iter()
        .map(|cells| {
            Row::new(
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        cells
                            .get(i)
                            .map(|cell| parse_cell(cell, col.data_type))
                            .unwrap_or(DynamicValue::Null)
                    })
                    .collect(),
            )
        })
        .collect();

    Ok(TableSource {
        name: "Data".to_string(),
        columns,
        rows,
        origin: DataOrigin::Csv {
            path: Default::default(),
            delimiter,
        },
    })
}

/// Convert one raw text cell according to the column's declared type.
/// Values that do not parse fall back to text; empty cells become Null.
pub fn parse_cell(value: &str, data_type: DataType) -> DynamicValue {
    if value.is_empty() {
        return DynamicValue::Null;
    }
    match data_type {
        DataType::Integer => value
            .parse::<i64>()
            .map(DynamicValue::Integer)
            .unwrap_or_else(|_| DynamicValue::Text(value.to_string())),
        DataType::Float => value
            .parse::<f64>()
            .map(DynamicValue::Float)
            .unwrap_or_else(|_| DynamicValue::Text(value.to_string())),
        DataType::Boolean => match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => DynamicValue::Boolean(true),
            "false" | "no" | "0" => DynamicValue::Boolean(false),
            _ => DynamicValue::Text(value.to_string()),
        },
        DataType::Date | DataType::Text | DataType::Nested => {
            DynamicValue::Text(value.to_string())
        }
    }
}

/// Infer a column type from a sample of its raw values.
pub fn infer_column_type(rows: &[Vec<String>], index: usize) -> DataType {
    let sample: Vec<&str> = rows
        .iter()
        .take(TYPE_INFERENCE_SAMPLE)
        .filter_map(|row| row.get(index))
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    if sample.is_empty() {
        return DataType::Text;
    }

    if sample.iter().all(|s| s.parse::<i64>().is_ok()) {
        return DataType::Integer;
    }
    if sample.iter().all(|s| s.parse::<f64>().is_ok()) {
        return DataType::Float;
    }
    if sample.iter().all(|s| {
        matches!(
            s.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no"
        )
    }) {
        return DataType::Boolean;
    }
    if sample.iter().all(|s| looks_like_date(s)) {
        return DataType::Date;
    }
    DataType::Text
}

/// Check if a string looks like an ISO date (YYYY-MM-DD, optional time)
pub fn looks_like_date(s: &str) -> bool {
    if s.len() == 10 && s.chars().filter(|&c| c == '-').count() == 2 {
        let parts: Vec<&str> = s.split('-').collect();
        return parts.len() == 3
            && parts[0].len() == 4
            && parts[1].len() == 2
            && parts[2].len() == 2
            && parts.iter().all(|p| p.parse::<u32>().is_ok());
    }
    if s.len() > 10 && s.contains('T') {
        // Byte-range prefix; multibyte text can straddle offset 10.
        return s.get(..10).is_some_and(looks_like_date);
    }
    false
}

/// Detect the delimiter to use for parsing
fn detect_delimiter(path: &Path, content: &str) -> char {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if ext.to_lowercase() == "tsv" {
            return '\t';
        }
    }

    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");
    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}

/// Split a CSV line respecting quoted fields
fn split_csv_line(line: &str, delimiter: char) -> Vec<String> {
    let mut result = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            result.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    result.push(field);
    result
}
