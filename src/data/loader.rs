//! Extension-dispatched table loading.
//!
//! The single entry point the application layer uses. Formats
//! themselves are opaque here; this module only routes to a parser and
//! names the extension when it cannot.

use crate::data::csv_parser::parse_csv_file;
use crate::data::error::{DataError, DataResult};
use crate::data::excel_parser::parse_excel_file;
use crate::data::json_parser::parse_json_file;
use crate::data::sql_parser::parse_sql_file;
use crate::types::TableSource;
use std::path::Path;

/// Load a tabular source, picking the parser from the file extension.
///
/// Extensions without a parser produce
/// [`DataError::UnsupportedFormat`] naming the extension.
pub fn load_table(path: &Path) -> DataResult<TableSource> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    tracing::info!(path = %path.display(), %extension, "loading table");

    match extension.as_str() {
        "csv" | "tsv" => parse_csv_file(path),
        "json" => parse_json_file(path),
        "xlsx" | "xls" => parse_excel_file(path),
        "sql" => parse_sql_file(path),
        _ => Err(DataError::UnsupportedFormat { extension }),
    }
}
