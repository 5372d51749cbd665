//! Construction of histogram keys.
//!
//! Keys follow the `<namespace>/<metricKind><scope><index>` scheme of the
//! upstream analysis files, e.g. `d/hpixPerLay1` for pixel hits aggregated
//! over Layer1 and `d/hclusPerDet3` for cluster hits per module on Layer3.

use core_types::{Ladder, Layer, ZPosition};

const NAMESPACE: &str = "d";

/// Pixel hits aggregated over a layer.
pub fn pix_per_layer(layer: Layer) -> String {
    format!("{NAMESPACE}/hpixPerLay{}", layer.index())
}

/// Pixel hits per detector module of a layer.
pub fn pix_per_det(layer: Layer) -> String {
    format!("{NAMESPACE}/hpixPerDet{}", layer.index())
}

/// Cluster hits aggregated over a layer.
pub fn clus_per_layer(layer: Layer) -> String {
    format!("{NAMESPACE}/hclusPerLay{}", layer.index())
}

/// Cluster hits per detector module of a layer.
pub fn clus_per_det(layer: Layer) -> String {
    format!("{NAMESPACE}/hclusPerDet{}", layer.index())
}

/// Working-module count for a layer.
pub fn working_modules(layer: Layer) -> String {
    format!("{NAMESPACE}/hnWorkingModulesLay{}", layer.index())
}

/// Pixel hits per module, restricted to one half-z module position.
pub fn pix_per_layer_z(layer: Layer, z: ZPosition) -> String {
    format!("{NAMESPACE}/hpixPerLay{}Z{}", layer.index(), z.label())
}

/// Pixel hits per module, restricted to the inner or outer ladders.
pub fn pix_per_layer_ladder(layer: Layer, ladder: Ladder) -> String {
    format!("{NAMESPACE}/hpixPerLay{}{}", layer.index(), ladder.key_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_detector_keys() {
        assert_eq!(pix_per_layer(Layer::Layer1), "d/hpixPerLay1");
        assert_eq!(pix_per_det(Layer::Layer2), "d/hpixPerDet2");
        assert_eq!(clus_per_layer(Layer::Layer3), "d/hclusPerLay3");
        assert_eq!(clus_per_det(Layer::Layer4), "d/hclusPerDet4");
    }

    #[test]
    fn substructure_keys() {
        assert_eq!(pix_per_layer_z(Layer::Layer1, ZPosition(-4)), "d/hpixPerLay1Z-4");
        assert_eq!(pix_per_layer_z(Layer::Layer2, ZPosition(3)), "d/hpixPerLay2Z3");
        assert_eq!(pix_per_layer_ladder(Layer::Layer1, Ladder::Inner), "d/hpixPerLay1Inner");
        assert_eq!(pix_per_layer_ladder(Layer::Layer4, Ladder::Outer), "d/hpixPerLay4Outer");
    }
}
