//! Terminal rendering of a single table.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement};

use aggregator::Table;
use core_types::Provenance;

use crate::format::format_cell;

/// Builds a comfy-table for terminal output. Cells whose source histogram
/// was missing are marked with an asterisk.
pub fn console_table(table: &Table, precision: usize) -> comfy_table::Table {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(table.column_labels.iter().map(Cell::new));
    out.set_header(header);

    for (label, row) in table.row_labels.iter().zip(&table.cells) {
        let mut cells = vec![Cell::new(label)];
        for cell in row {
            let mut text = format_cell(cell, precision, "n/a");
            if cell.provenance == Provenance::DefaultedMissing {
                text.push('*');
            }
            cells.push(Cell::new(text));
        }
        out.add_row(cells);
    }

    out
}

#[cfg(test)]
mod tests {
    use aggregator::TableCell;

    use super::*;

    #[test]
    fn rendering_includes_labels_and_missing_marker() {
        let mut table = Table::new(vec!["perModule".into()]);
        table.push_row(
            "Layer1",
            vec![TableCell::new(Some(0.0), Provenance::DefaultedMissing)],
        );

        let rendered = console_table(&table, 2).to_string();
        assert!(rendered.contains("Layer1"));
        assert!(rendered.contains("0.00*"));
    }
}
