use serde::Serialize;

use core_types::{DerivedMetrics, MetricGroup, Provenance};

/// One value in a table.
///
/// `None` marks a quantity that is undefined for the metric group (cluster
/// occupancy), which is distinct from a defined value of zero. The
/// provenance lets renderers flag cells whose source histogram was missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableCell {
    pub value: Option<f64>,
    pub provenance: Provenance,
}

impl TableCell {
    pub fn new(value: Option<f64>, provenance: Provenance) -> Self {
        Self { value, provenance }
    }
}

/// A plain labelled grid of cells. This is the whole contract between the
/// aggregation layer and the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<TableCell>>,
}

impl Table {
    pub fn new(column_labels: Vec<String>) -> Self {
        Self {
            row_labels: Vec::new(),
            column_labels,
            cells: Vec::new(),
        }
    }

    pub fn push_row(&mut self, label: impl Into<String>, cells: Vec<TableCell>) {
        debug_assert_eq!(cells.len(), self.column_labels.len());
        self.row_labels.push(label.into());
        self.cells.push(cells);
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_columns(&self) -> usize {
        self.column_labels.len()
    }
}

/// The column labels of one metric group. Cluster groups have no occupancy
/// column at all, rather than a column of blanks.
pub fn metric_columns(group: MetricGroup) -> Vec<String> {
    let mut columns = vec![
        "perModule".to_string(),
        "perArea".to_string(),
        "perAreaSec".to_string(),
    ];
    if !group.is_cluster() {
        columns.push("occupancy".to_string());
    }
    columns
}

/// The cells of one derived metric set, in `metric_columns` order.
pub fn metric_cells(metrics: &DerivedMetrics, group: MetricGroup) -> Vec<TableCell> {
    let mut cells = vec![
        TableCell::new(Some(metrics.per_module), metrics.provenance),
        TableCell::new(Some(metrics.per_area), metrics.provenance),
        TableCell::new(Some(metrics.per_area_sec), metrics.provenance),
    ];
    if !group.is_cluster() {
        cells.push(TableCell::new(metrics.occupancy, metrics.provenance));
    }
    cells
}
