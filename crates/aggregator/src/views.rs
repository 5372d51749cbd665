//! The three detector views, each reshaped into two table families:
//! per-run tables (one table per run) and cross-run comparison tables (one
//! table per layer with a row per run, in processing order).

use serde::Serialize;

use analytics::RunContainer;
use core_types::{DerivedMetrics, Ladder, Layer, MetricGroup, ZPosition};

use crate::collection::RunCollection;
use crate::table::{Table, metric_cells, metric_columns};

/// A table describing one run, keyed by its metric group and, for the
/// partial-detector views, the layer it is restricted to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerRunTable {
    pub run: String,
    pub group: MetricGroup,
    pub layer: Option<Layer>,
    pub table: Table,
}

/// A table comparing all runs side by side for one layer and metric group
/// and, for the partial-detector views, one substructure label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub layer: Layer,
    pub group: MetricGroup,
    pub substructure: Option<String>,
    pub table: Table,
}

fn group_metrics(container: &RunContainer, group: MetricGroup, layer: Layer) -> &DerivedMetrics {
    match group {
        MetricGroup::PixPerLayer => &container.pix_per_layer[layer],
        MetricGroup::PixPerDet => &container.pix_per_det[layer],
        MetricGroup::ClusPerLayer => &container.clus_per_layer[layer],
        MetricGroup::ClusPerDet => &container.clus_per_det[layer],
    }
}

/// Full-detector view: per-run tables with a row per layer, and comparison
/// tables with a row per run, for all four metric groups.
pub fn full_detector_tables(runs: &RunCollection) -> (Vec<PerRunTable>, Vec<ComparisonTable>) {
    let mut per_run = Vec::new();
    for container in runs.iter() {
        for group in MetricGroup::ALL {
            let mut table = Table::new(metric_columns(group));
            for layer in Layer::ALL {
                table.push_row(
                    layer.label(),
                    metric_cells(group_metrics(container, group, layer), group),
                );
            }
            per_run.push(PerRunTable {
                run: container.name.clone(),
                group,
                layer: None,
                table,
            });
        }
    }

    let mut comparison = Vec::new();
    for layer in Layer::ALL {
        for group in MetricGroup::ALL {
            let mut table = Table::new(metric_columns(group));
            for container in runs.iter() {
                table.push_row(
                    container.name.clone(),
                    metric_cells(group_metrics(container, group, layer), group),
                );
            }
            comparison.push(ComparisonTable {
                layer,
                group,
                substructure: None,
                table,
            });
        }
    }

    (per_run, comparison)
}

/// Z-position view: pixel-per-layer metrics split by half-z module
/// position. Per-run tables carry a row per z position; comparison tables
/// compare runs for one layer and z position.
pub fn z_dependency_tables(runs: &RunCollection) -> (Vec<PerRunTable>, Vec<ComparisonTable>) {
    let group = MetricGroup::PixPerLayer;

    let mut per_run = Vec::new();
    for container in runs.iter() {
        for layer in Layer::ALL {
            let mut table = Table::new(metric_columns(group));
            for (z, metrics) in container.z_pix_per_layer[layer].iter() {
                table.push_row(z.label(), metric_cells(metrics, group));
            }
            per_run.push(PerRunTable {
                run: container.name.clone(),
                group,
                layer: Some(layer),
                table,
            });
        }
    }

    let mut comparison = Vec::new();
    for layer in Layer::ALL {
        for z in ZPosition::ALL {
            let mut table = Table::new(metric_columns(group));
            for container in runs.iter() {
                table.push_row(
                    container.name.clone(),
                    metric_cells(container.z_pix_per_layer[layer].get(z), group),
                );
            }
            comparison.push(ComparisonTable {
                layer,
                group,
                substructure: Some(z.label()),
                table,
            });
        }
    }

    (per_run, comparison)
}

/// Inner/outer-ladder view: pixel-per-layer metrics split radially.
/// Per-run tables carry an inner and an outer row; comparison tables
/// compare runs for one layer and ladder.
pub fn ladder_tables(runs: &RunCollection) -> (Vec<PerRunTable>, Vec<ComparisonTable>) {
    let group = MetricGroup::PixPerLayer;

    let mut per_run = Vec::new();
    for container in runs.iter() {
        for layer in Layer::ALL {
            let mut table = Table::new(metric_columns(group));
            for ladder in Ladder::ALL {
                table.push_row(
                    ladder.label(),
                    metric_cells(container.ladder_pix_per_layer[layer].get(ladder), group),
                );
            }
            per_run.push(PerRunTable {
                run: container.name.clone(),
                group,
                layer: Some(layer),
                table,
            });
        }
    }

    let mut comparison = Vec::new();
    for layer in Layer::ALL {
        for ladder in Ladder::ALL {
            let mut table = Table::new(metric_columns(group));
            for container in runs.iter() {
                table.push_row(
                    container.name.clone(),
                    metric_cells(container.ladder_pix_per_layer[layer].get(ladder), group),
                );
            }
            comparison.push(ComparisonTable {
                layer,
                group,
                substructure: Some(ladder.label().to_string()),
                table,
            });
        }
    }

    (per_run, comparison)
}

#[cfg(test)]
mod tests {
    use core_types::DetectorConstants;
    use histogram_store::{MemoryStore, keys};

    use super::*;

    fn store_for(scale: f64) -> MemoryStore {
        let mut store = MemoryStore::new();
        for layer in Layer::ALL {
            let idx = layer.index() as f64;
            store.insert(keys::pix_per_layer(layer), scale * idx);
            store.insert(keys::pix_per_det(layer), scale * idx / 100.0);
            store.insert(keys::clus_per_layer(layer), scale * idx / 5.0);
            store.insert(keys::clus_per_det(layer), scale * idx / 500.0);
            for z in ZPosition::ALL {
                store.insert(keys::pix_per_layer_z(layer, z), scale / 10.0);
            }
            for ladder in Ladder::ALL {
                store.insert(keys::pix_per_layer_ladder(layer, ladder), scale / 20.0);
            }
        }
        store
    }

    fn three_runs() -> RunCollection {
        let consts = DetectorConstants::default();
        let mut runs = RunCollection::new();
        for (name, scale) in [("RunZ", 1000.0), ("RunA", 2000.0), ("RunM", 3000.0)] {
            runs.push(RunContainer::build(name, &store_for(scale), 2000.0, consts));
        }
        runs
    }

    #[test]
    fn comparison_rows_follow_insertion_order() {
        let runs = three_runs();
        let (_, comparison) = full_detector_tables(&runs);

        let layer1_pix = comparison
            .iter()
            .find(|t| t.layer == Layer::Layer1 && t.group == MetricGroup::PixPerLayer)
            .unwrap();
        assert_eq!(layer1_pix.table.row_labels, vec!["RunZ", "RunA", "RunM"]);
        assert_eq!(layer1_pix.table.n_rows(), 3);
    }

    #[test]
    fn full_view_shapes() {
        let runs = three_runs();
        let (per_run, comparison) = full_detector_tables(&runs);

        // 3 runs x 4 groups, and 4 layers x 4 groups.
        assert_eq!(per_run.len(), 12);
        assert_eq!(comparison.len(), 16);

        for entry in &per_run {
            assert_eq!(entry.table.n_rows(), 4);
            let expected_cols = if entry.group.is_cluster() { 3 } else { 4 };
            assert_eq!(entry.table.n_columns(), expected_cols);
        }
    }

    #[test]
    fn partial_view_shapes() {
        let runs = three_runs();
        let (z_per_run, z_comparison) = z_dependency_tables(&runs);
        let (ladder_per_run, ladder_comparison) = ladder_tables(&runs);

        // 3 runs x 4 layers, and 4 layers x 8 z positions.
        assert_eq!(z_per_run.len(), 12);
        assert_eq!(z_comparison.len(), 32);
        assert_eq!(z_per_run[0].table.n_rows(), 8);

        // 3 runs x 4 layers, and 4 layers x 2 ladders.
        assert_eq!(ladder_per_run.len(), 12);
        assert_eq!(ladder_comparison.len(), 8);
        assert_eq!(ladder_per_run[0].table.row_labels, vec!["inner", "outer"]);
        assert_eq!(
            ladder_comparison[0].substructure.as_deref(),
            Some("inner")
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let runs = three_runs();

        assert_eq!(full_detector_tables(&runs), full_detector_tables(&runs));
        assert_eq!(z_dependency_tables(&runs), z_dependency_tables(&runs));
        assert_eq!(ladder_tables(&runs), ladder_tables(&runs));
    }

    #[test]
    fn missing_data_never_changes_the_shape() {
        let consts = DetectorConstants::default();
        let mut degraded_store = store_for(2000.0);
        degraded_store.remove(&keys::pix_per_layer(Layer::Layer2));

        let mut runs = RunCollection::new();
        runs.push(RunContainer::build("Good", &store_for(1000.0), 2000.0, consts));
        runs.push(RunContainer::build("Degraded", &degraded_store, 2000.0, consts));

        let (per_run, comparison) = full_detector_tables(&runs);
        let good = &per_run[0].table;
        let degraded = &per_run[4].table;
        assert_eq!(good.n_rows(), degraded.n_rows());
        assert_eq!(good.column_labels, degraded.column_labels);

        let layer2_pix = comparison
            .iter()
            .find(|t| t.layer == Layer::Layer2 && t.group == MetricGroup::PixPerLayer)
            .unwrap();
        // The degraded run still has its row; the cell is a flagged zero.
        assert_eq!(layer2_pix.table.n_rows(), 2);
        let cell = layer2_pix.table.cells[1][0];
        assert_eq!(cell.value, Some(0.0));
        assert_eq!(cell.provenance, core_types::Provenance::DefaultedMissing);
    }
}
