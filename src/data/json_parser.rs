//! JSON data parsing
//!
//! Parses JSON arrays of objects into [`TableSource`] structs. Unlike
//! the flat CSV path, nested objects survive as [`DynamicValue::Mapping`]
//! values so the card view can traverse them, and arrays survive as
//! [`DynamicValue::Sequence`].

use crate::constants::TYPE_INFERENCE_SAMPLE;
use crate::data::csv_parser::looks_like_date;
use crate::data::error::{DataError, DataResult};
use crate::types::{Column, DataOrigin, DataType, DynamicValue, Row, TableSource};
use serde_json::Value;
use std::path::Path;

/// Parse a JSON file into a TableSource
pub fn parse_json_file(path: &Path) -> DataResult<TableSource> {
    let content = std::fs::read_to_string(path)?;
    let mut table = parse_json_content(&content)?;

    table.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data")
        .to_string();
    table.origin = DataOrigin::Json {
        path: path.to_path_buf(),
    };
    Ok(table)
}

/// Parse JSON content from a string
pub fn parse_json_content(json: &str) -> DataResult<TableSource> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(&value)?;

    let origin = DataOrigin::Json {
        path: Default::default(),
    };
    if array.is_empty() {
        return Ok(TableSource {
            name: "Data".to_string(),
            columns: vec![],
            rows: vec![],
            origin,
        });
    }

    let first_obj = array[0]
        .as_object()
        .ok_or_else(|| DataError::InvalidData("Array elements must be objects".into()))?;
    let column_names: Vec<String> = first_obj.keys().cloned().collect();

    let columns: Vec<Column> = column_names
        .iter()
        .map(|name| Column::new(name, infer_json_column_type(array, name)))
        .collect();

    let rows: Vec<Row> = array
        .iter()
        .filter_map(|v| {
            let obj = v.as_object()?;
            let values = columns
                .iter()
                .map(|col| {
                    obj.get(&col.name)
                        .map(json_to_dynamic)
                        .unwrap_or(DynamicValue::Null)
                })
                .collect();
            Some(Row::new(values))
        })
        .collect();

    Ok(TableSource {
        name: "Data".to_string(),
        columns,
        rows,
        origin,
    })
}

/// Convert a JSON value into the renderer's value model.
///
/// Object key order is preserved (serde_json is built with
/// `preserve_order`), which is what keeps child node identity stable
/// across re-renders.
pub fn json_to_dynamic(value: &Value) -> DynamicValue {
    match value {
        Value::Null => DynamicValue::Null,
        Value::Bool(b) => DynamicValue::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DynamicValue::Integer(i)
            } else {
                DynamicValue::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => DynamicValue::Text(s.clone()),
        Value::Array(items) => {
            DynamicValue::Sequence(items.iter().map(json_to_dynamic).collect())
        }
        Value::Object(obj) => DynamicValue::Mapping(
            obj.iter()
                .map(|(k, v)| (k.clone(), json_to_dynamic(v)))
                .collect(),
        ),
    }
}

/// Extract the array from a JSON value, handling common wrapper patterns
fn extract_array(value: &Value) -> DataResult<&Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Object(obj) => {
            let wrapper_keys = ["data", "rows", "items", "records", "results"];
            for key in wrapper_keys {
                if let Some(Value::Array(arr)) = obj.get(key) {
                    return Ok(arr);
                }
            }
            Err(DataError::InvalidData(
                "JSON must be an array or have a data/rows/items/records/results array".into(),
            ))
        }
        _ => Err(DataError::InvalidData(
            "JSON must be an array of objects".into(),
        )),
    }
}

/// Infer the declared type of a column from JSON values
fn infer_json_column_type(array: &[Value], key: &str) -> DataType {
    for item in array.iter().take(TYPE_INFERENCE_SAMPLE) {
        let Some(obj) = item.as_object() else { continue };
        let Some(value) = obj.get(key) else { continue };
        match value {
            Value::Number(n) => {
                return if n.is_i64() {
                    DataType::Integer
                } else {
                    DataType::Float
                };
            }
            Value::Bool(_) => return DataType::Boolean,
            Value::String(s) => {
                if looks_like_date(s) {
                    return DataType::Date;
                }
                return DataType::Text;
            }
            Value::Array(_) | Value::Object(_) => return DataType::Nested,
            Value::Null => continue,
        }
    }
    DataType::Text
}
