//! Data loading module
//!
//! This module provides parsers for the supported tabular formats and
//! the extension-dispatched [`load_table`] entry point.
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError`
//! type. Common errors include:
//! - `UnsupportedFormat`: unrecognized file extension
//! - `TooLarge` / `TooManyRows`: file exceeds eager-loading limits
//! - `Io` / `Json` / `Excel` / `Sql`: parse and read errors

mod csv_parser;
mod error;
mod excel_parser;
mod json_parser;
mod loader;
mod sample;
mod sql_parser;

pub use csv_parser::*;
pub use error::*;
pub use excel_parser::*;
pub use json_parser::*;
pub use loader::*;
pub use sample::*;
pub use sql_parser::*;

use crate::types::{DataType, DynamicValue, Row};

/// Infer a column's declared type from already-typed cell values.
/// Used by loaders whose cells arrive typed (Excel, SQL) rather than as
/// raw text.
pub(crate) fn infer_value_column_type(rows: &[Row], index: usize) -> DataType {
    use crate::constants::TYPE_INFERENCE_SAMPLE;

    for row in rows.iter().take(TYPE_INFERENCE_SAMPLE) {
        match row.values.get(index) {
            Some(DynamicValue::Integer(_)) => return DataType::Integer,
            Some(DynamicValue::Float(_)) => return DataType::Float,
            Some(DynamicValue::Boolean(_)) => return DataType::Boolean,
            Some(DynamicValue::Text(s)) => {
                if csv_parser::looks_like_date(s) {
                    return DataType::Date;
                }
                return DataType::Text;
            }
            Some(DynamicValue::Mapping(_)) | Some(DynamicValue::Sequence(_)) => {
                return DataType::Nested;
            }
            Some(DynamicValue::Null) | None => continue,
        }
    }
    DataType::Text
}
