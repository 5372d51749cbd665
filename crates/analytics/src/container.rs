use std::fmt::Write as _;

use serde::Serialize;

use core_types::{
    DerivedMetrics, DetectorConstants, HistoMean, Ladder, Layer, LayerMap, ZPosition,
};
use histogram_store::{HistogramStore, fetch_mean, keys};

use crate::{formulas, module_counter};

/// Pixel metrics of one layer split into inner and outer ladders.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LadderSplit {
    pub inner: DerivedMetrics,
    pub outer: DerivedMetrics,
}

impl LadderSplit {
    pub fn get(&self, ladder: Ladder) -> &DerivedMetrics {
        match ladder {
            Ladder::Inner => &self.inner,
            Ladder::Outer => &self.outer,
        }
    }
}

/// Pixel metrics of one layer split by half-z module position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZSplit {
    values: [DerivedMetrics; 8],
}

impl ZSplit {
    /// Builds a split by evaluating `f` once per z position, negative side
    /// first.
    pub fn from_fn(mut f: impl FnMut(ZPosition) -> DerivedMetrics) -> Self {
        Self {
            values: ZPosition::ALL.map(&mut f),
        }
    }

    pub fn get(&self, z: ZPosition) -> &DerivedMetrics {
        let idx = ZPosition::ALL
            .iter()
            .position(|p| *p == z)
            .unwrap_or_default();
        &self.values[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZPosition, &DerivedMetrics)> {
        ZPosition::ALL.iter().copied().zip(self.values.iter())
    }
}

/// All derived occupancy values of one run.
///
/// Built once from a histogram-store handle and immutable afterwards. Every
/// layer always has an entry in every family; a missing histogram degrades
/// the affected values to flagged zeros instead of removing the layer.
#[derive(Debug, Clone, Serialize)]
pub struct RunContainer {
    pub name: String,
    pub colliding_bunches: f64,
    pub constants: DetectorConstants,
    pub n_working_modules: LayerMap<f64>,

    /// Raw pixel-hit means aggregated over each layer.
    pub hit_pix: LayerMap<HistoMean>,
    pub pix_per_layer: LayerMap<DerivedMetrics>,
    pub pix_per_det: LayerMap<DerivedMetrics>,

    /// Raw cluster-hit means aggregated over each layer.
    pub hit_clus: LayerMap<HistoMean>,
    pub clus_per_layer: LayerMap<DerivedMetrics>,
    pub clus_per_det: LayerMap<DerivedMetrics>,

    /// Pixel metrics split by half-z module position, per layer.
    pub z_pix_per_layer: LayerMap<ZSplit>,
    /// Pixel metrics split into inner/outer ladders, per layer.
    pub ladder_pix_per_layer: LayerMap<LadderSplit>,
}

impl RunContainer {
    /// Computes all derived metrics for all four layers from the store.
    pub fn build(
        name: impl Into<String>,
        store: &dyn HistogramStore,
        colliding_bunches: f64,
        constants: DetectorConstants,
    ) -> Self {
        let name = name.into();
        tracing::debug!(
            run = %name,
            colliding_bunches,
            "Initializing run container"
        );

        let n_working_modules = module_counter::working_modules(store);

        let mut hit_pix = LayerMap::default();
        let mut pix_per_layer = LayerMap::default();
        let mut pix_per_det = LayerMap::default();
        let mut hit_clus = LayerMap::default();
        let mut clus_per_layer = LayerMap::default();
        let mut clus_per_det = LayerMap::default();

        for layer in Layer::ALL {
            tracing::info!(run = %name, layer = layer.label(), "Setting base values");

            // Pixels aggregated over the layer.
            let mean = fetch_mean(store, &keys::pix_per_layer(layer));
            hit_pix[layer] = mean;
            pix_per_layer[layer] = formulas::layer_metrics(
                mean,
                n_working_modules[layer],
                colliding_bunches,
                false,
                &constants,
            );

            // Pixels per detector module.
            let mean = fetch_mean(store, &keys::pix_per_det(layer));
            pix_per_det[layer] = formulas::det_metrics(mean, colliding_bunches, false, &constants);

            // Clusters aggregated over the layer.
            let mean = fetch_mean(store, &keys::clus_per_layer(layer));
            hit_clus[layer] = mean;
            clus_per_layer[layer] = formulas::layer_metrics(
                mean,
                n_working_modules[layer],
                colliding_bunches,
                true,
                &constants,
            );

            // Clusters per detector module.
            let mean = fetch_mean(store, &keys::clus_per_det(layer));
            clus_per_det[layer] = formulas::det_metrics(mean, colliding_bunches, true, &constants);
        }

        // Substructure histograms hold per-module means, so the per-det
        // formula applies.
        let z_pix_per_layer = LayerMap::from_fn(|layer| {
            ZSplit::from_fn(|z| {
                let mean = fetch_mean(store, &keys::pix_per_layer_z(layer, z));
                formulas::det_metrics(mean, colliding_bunches, false, &constants)
            })
        });
        let ladder_pix_per_layer = LayerMap::from_fn(|layer| {
            let mut split = LadderSplit::default();
            for ladder in Ladder::ALL {
                let mean = fetch_mean(store, &keys::pix_per_layer_ladder(layer, ladder));
                let metrics = formulas::det_metrics(mean, colliding_bunches, false, &constants);
                match ladder {
                    Ladder::Inner => split.inner = metrics,
                    Ladder::Outer => split.outer = metrics,
                }
            }
            split
        });

        Self {
            name,
            colliding_bunches,
            constants,
            n_working_modules,
            hit_pix,
            pix_per_layer,
            pix_per_det,
            hit_clus,
            clus_per_layer,
            clus_per_det,
            z_pix_per_layer,
            ladder_pix_per_layer,
        }
    }

    /// A deterministic, human-readable summary of all computed values, by
    /// layer then metric family. For diagnostic eyes, not for parsing.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        for layer in Layer::ALL {
            let _ = writeln!(out, "-------- {} --------", layer.label());
            let _ = writeln!(out, "nWorkingModules: {}", self.n_working_modules[layer]);

            let _ = writeln!(out, "Pixels per Layer");
            let _ = writeln!(out, "  Pixels hit: {}", describe_mean(&self.hit_pix[layer]));
            dump_metrics(&mut out, &self.pix_per_layer[layer]);

            let _ = writeln!(out, "Pixels per Det");
            dump_metrics(&mut out, &self.pix_per_det[layer]);

            let _ = writeln!(out, "Clusters per Layer");
            let _ = writeln!(out, "  Clusters hit: {}", describe_mean(&self.hit_clus[layer]));
            dump_metrics(&mut out, &self.clus_per_layer[layer]);

            let _ = writeln!(out, "Clusters per Det");
            dump_metrics(&mut out, &self.clus_per_det[layer]);

            let _ = writeln!(out, "Pixels per Det by z position");
            for (z, metrics) in self.z_pix_per_layer[layer].iter() {
                let _ = writeln!(out, "  z = {}: per module {}", z.label(), metrics.per_module);
            }

            let _ = writeln!(out, "Pixels per Det by ladder");
            for ladder in Ladder::ALL {
                let metrics = self.ladder_pix_per_layer[layer].get(ladder);
                let _ = writeln!(out, "  {}: per module {}", ladder.label(), metrics.per_module);
            }
        }
        out
    }
}

fn describe_mean(mean: &HistoMean) -> String {
    match mean.provenance {
        core_types::Provenance::Measured => mean.value.to_string(),
        core_types::Provenance::DefaultedMissing => format!("{} (histogram missing)", mean.value),
    }
}

fn dump_metrics(out: &mut String, metrics: &DerivedMetrics) {
    if let Some(occupancy) = metrics.occupancy {
        let _ = writeln!(out, "  Occupancy: {occupancy}");
    }
    let _ = writeln!(out, "  Hits per module: {}", metrics.per_module);
    let _ = writeln!(out, "  Hits per area: {}", metrics.per_area);
    let _ = writeln!(out, "  Hits per area per sec: {}", metrics.per_area_sec);
}
