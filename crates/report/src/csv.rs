//! Semicolon-separated export, one file per table.

use aggregator::Table;

use crate::format::format_cell;

/// Renders a table as semicolon-separated text. The first column carries
/// the row labels under an empty header; undefined cells stay empty.
pub fn to_csv(table: &Table, precision: usize) -> String {
    let mut out = String::new();

    out.push(';');
    out.push_str(&table.column_labels.join(";"));
    out.push('\n');

    for (label, row) in table.row_labels.iter().zip(&table.cells) {
        out.push_str(label);
        for cell in row {
            out.push(';');
            out.push_str(&format_cell(cell, precision, ""));
        }
        out.push('\n');
    }

    out
}
