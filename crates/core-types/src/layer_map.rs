use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::enums::Layer;

/// A fixed-size map from [`Layer`] to `T`.
///
/// Every layer always has an entry, so "missing layer" is unrepresentable
/// and iteration is always in physical layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerMap<T> {
    values: [T; 4],
}

impl<T> LayerMap<T> {
    /// Builds a map by evaluating `f` once per layer, in layer order.
    pub fn from_fn(mut f: impl FnMut(Layer) -> T) -> Self {
        Self {
            values: Layer::ALL.map(&mut f),
        }
    }

    pub fn get(&self, layer: Layer) -> &T {
        &self.values[layer.index() - 1]
    }

    pub fn get_mut(&mut self, layer: Layer) -> &mut T {
        &mut self.values[layer.index() - 1]
    }

    /// Iterates entries in physical layer order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &T)> {
        Layer::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<T> Index<Layer> for LayerMap<T> {
    type Output = T;

    fn index(&self, layer: Layer) -> &T {
        self.get(layer)
    }
}

impl<T> IndexMut<Layer> for LayerMap<T> {
    fn index_mut(&mut self, layer: Layer) -> &mut T {
        self.get_mut(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_every_layer_in_order() {
        let map = LayerMap::from_fn(|layer| layer.index() * 10);
        assert_eq!(map[Layer::Layer1], 10);
        assert_eq!(map[Layer::Layer4], 40);

        let order: Vec<Layer> = map.iter().map(|(layer, _)| layer).collect();
        assert_eq!(order, Layer::ALL.to_vec());
    }

    #[test]
    fn index_mut_updates_single_entry() {
        let mut map: LayerMap<f64> = LayerMap::default();
        map[Layer::Layer2] = 3.5;
        assert_eq!(map[Layer::Layer2], 3.5);
        assert_eq!(map[Layer::Layer1], 0.0);
    }
}
