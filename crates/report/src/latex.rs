//! LaTeX `tabular` export, one file per table.

use aggregator::Table;

use crate::format::format_cell;

/// Renders a table as a booktabs-style `tabular` environment: one left
/// column for the row labels, one right-aligned column per metric.
pub fn to_latex(table: &Table, precision: usize) -> String {
    let mut out = String::new();

    let alignment: String = std::iter::once('l')
        .chain(std::iter::repeat_n('r', table.n_columns()))
        .collect();
    out.push_str(&format!("\\begin{{tabular}}{{{alignment}}}\n"));
    out.push_str("\\toprule\n");

    out.push_str("{}");
    for column in &table.column_labels {
        out.push_str(" & ");
        out.push_str(&escape(column));
    }
    out.push_str(" \\\\\n\\midrule\n");

    for (label, row) in table.row_labels.iter().zip(&table.cells) {
        out.push_str(&escape(label));
        for cell in row {
            out.push_str(" & ");
            out.push_str(&format_cell(cell, precision, "--"));
        }
        out.push_str(" \\\\\n");
    }

    out.push_str("\\bottomrule\n\\end{tabular}\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('_', "\\_").replace('%', "\\%")
}
