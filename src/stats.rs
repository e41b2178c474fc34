//! Summary statistics over integer columns.
//!
//! Mirrors the analysis view: mean, median, and population variance for
//! every column whose declared type is [`DataType::Integer`]. Columns of
//! other types are skipped entirely.

use crate::types::{DataType, TableSource};

/// Statistics of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    pub median: f64,
    /// Population variance (divide by N, not N-1).
    pub variance: f64,
}

impl ColumnStats {
    /// All three measures are NaN when the column held no numeric rows.
    pub fn is_undefined(&self) -> bool {
        self.mean.is_nan()
    }
}

/// Compute statistics for every integer-declared column, in column order.
///
/// A column with zero numeric rows reports NaN for all three measures
/// instead of dividing by zero.
pub fn compute_statistics(table: &TableSource) -> Vec<(String, ColumnStats)> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, col)| col.data_type == DataType::Integer)
        .map(|(index, col)| {
            let values = table.numeric_column(index);
            (col.name.clone(), column_stats(&values))
        })
        .collect()
}

fn column_stats(values: &[f64]) -> ColumnStats {
    if values.is_empty() {
        return ColumnStats {
            mean: f64::NAN,
            median: f64::NAN,
            variance: f64::NAN,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let middle = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    };

    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    ColumnStats {
        mean,
        median,
        variance,
    }
}
