//! Working-module counts per layer.
//!
//! The per-module rate divides by this count, so it must never be 0 for a
//! layer that carries data. When a store has no count histogram, or counts
//! 0 modules on a layer, the nominal layer population is used instead.

use core_types::{Layer, LayerMap};
use histogram_store::{HistogramStore, keys};

/// Looks up the number of working modules for every layer.
pub fn working_modules(store: &dyn HistogramStore) -> LayerMap<f64> {
    LayerMap::from_fn(|layer| {
        let key = keys::working_modules(layer);
        match store.mean(&key) {
            Some(count) if count > 0.0 => count,
            Some(_) => {
                tracing::error!(
                    layer = layer.label(),
                    "Working-module count is zero, using nominal module count"
                );
                layer.nominal_modules()
            }
            None => {
                tracing::debug!(
                    layer = layer.label(),
                    "No working-module histogram, using nominal module count"
                );
                layer.nominal_modules()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use histogram_store::MemoryStore;

    use super::*;

    #[test]
    fn counted_modules_win_over_nominal() {
        let mut store = MemoryStore::new();
        store.insert("d/hnWorkingModulesLay1", 92.0);

        let counts = working_modules(&store);
        assert_eq!(counts[Layer::Layer1], 92.0);
        // Layers without a count histogram fall back to nominal.
        assert_eq!(counts[Layer::Layer2], 224.0);
        assert_eq!(counts[Layer::Layer3], 352.0);
        assert_eq!(counts[Layer::Layer4], 512.0);
    }

    #[test]
    fn zero_count_falls_back_to_nominal() {
        let mut store = MemoryStore::new();
        store.insert("d/hnWorkingModulesLay2", 0.0);

        let counts = working_modules(&store);
        assert_eq!(counts[Layer::Layer2], 224.0);
    }
}
