//! Cell value formatting shared by all exporters.

use aggregator::TableCell;

/// Formats a cell value at the given precision. Small non-zero magnitudes
/// (occupancies) switch to scientific notation so they do not round to a
/// column of zeros.
pub fn format_value(value: f64, precision: usize) -> String {
    if value != 0.0 && value.abs() < 1e-3 {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}

/// Formats a cell, with `missing` standing in for quantities that are
/// undefined for the table's metric group.
pub fn format_cell(cell: &TableCell, precision: usize, missing: &str) -> String {
    match cell.value {
        Some(value) => format_value(value, precision),
        None => missing.to_string(),
    }
}

/// Turns a table key into a safe file-name fragment: `/` becomes `per` and
/// spaces are dropped.
pub fn sanitize(label: &str) -> String {
    label.replace('/', "per").replace(' ', "")
}
