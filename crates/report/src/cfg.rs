//! INI-style export, one section per table row.

use aggregator::Table;

use crate::format::format_cell;

/// Renders a table as an INI-style config: every row becomes a section
/// named after its label, every column a `key = value` line.
pub fn to_cfg(table: &Table, precision: usize) -> String {
    let mut out = String::new();

    for (label, row) in table.row_labels.iter().zip(&table.cells) {
        out.push_str(&format!("[{label}]\n"));
        for (column, cell) in table.column_labels.iter().zip(row) {
            out.push_str(&format!(
                "{column} = {}\n",
                format_cell(cell, precision, "none")
            ));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use aggregator::TableCell;
    use core_types::Provenance;

    use super::*;

    #[test]
    fn one_section_per_row() {
        let mut table = Table::new(vec!["perModule".into(), "occupancy".into()]);
        table.push_row(
            "Layer1",
            vec![
                TableCell::new(Some(10.0), Provenance::Measured),
                TableCell::new(None, Provenance::Measured),
            ],
        );

        let cfg = to_cfg(&table, 1);
        assert!(cfg.contains("[Layer1]\n"));
        assert!(cfg.contains("perModule = 10.0\n"));
        assert!(cfg.contains("occupancy = none\n"));
    }
}
