use serde::{Deserialize, Serialize};

/// One of the four concentric barrel layers of the pixel detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Layer1,
    Layer2,
    Layer3,
    Layer4,
}

impl Layer {
    /// All layers in physical order, innermost first. This is the iteration
    /// order everywhere: containers, tables, and report pages.
    pub const ALL: [Layer; 4] = [Layer::Layer1, Layer::Layer2, Layer::Layer3, Layer::Layer4];

    /// The 1-based index used in histogram names (`d/hpixPerLay1`).
    pub fn index(&self) -> usize {
        match self {
            Layer::Layer1 => 1,
            Layer::Layer2 => 2,
            Layer::Layer3 => 3,
            Layer::Layer4 => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Layer::Layer1 => "Layer1",
            Layer::Layer2 => "Layer2",
            Layer::Layer3 => "Layer3",
            Layer::Layer4 => "Layer4",
        }
    }

    /// The number of modules the layer carries when fully operational.
    /// Used as a fallback when the histogram store has no working-module
    /// count for the layer.
    pub fn nominal_modules(&self) -> f64 {
        match self {
            Layer::Layer1 => 96.0,
            Layer::Layer2 => 224.0,
            Layer::Layer3 => 352.0,
            Layer::Layer4 => 512.0,
        }
    }
}

/// One of the four metric groups a run is reported under.
///
/// The first component names the hit kind (pixels or clusters), the second
/// the aggregation scope: over the whole layer or per detector module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricGroup {
    PixPerLayer,
    PixPerDet,
    ClusPerLayer,
    ClusPerDet,
}

impl MetricGroup {
    /// All groups in report order.
    pub const ALL: [MetricGroup; 4] = [
        MetricGroup::PixPerLayer,
        MetricGroup::PixPerDet,
        MetricGroup::ClusPerLayer,
        MetricGroup::ClusPerDet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricGroup::PixPerLayer => "Pix/Lay",
            MetricGroup::PixPerDet => "Pix/Det",
            MetricGroup::ClusPerLayer => "Clus/Lay",
            MetricGroup::ClusPerDet => "Clus/Det",
        }
    }

    /// Clusters have no occupancy denominator, so cluster groups carry no
    /// occupancy column.
    pub fn is_cluster(&self) -> bool {
        matches!(self, MetricGroup::ClusPerLayer | MetricGroup::ClusPerDet)
    }
}

/// Radial substructure of a layer: the inner or outer ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ladder {
    Inner,
    Outer,
}

impl Ladder {
    pub const ALL: [Ladder; 2] = [Ladder::Inner, Ladder::Outer];

    pub fn label(&self) -> &'static str {
        match self {
            Ladder::Inner => "inner",
            Ladder::Outer => "outer",
        }
    }

    /// The suffix used in histogram names (`d/hpixPerLay1Inner`).
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Ladder::Inner => "Inner",
            Ladder::Outer => "Outer",
        }
    }
}

/// One of the eight half-z module positions along a ladder, `-4..-1` on the
/// negative side and `1..4` on the positive side. There is no position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZPosition(pub i8);

impl ZPosition {
    /// All z positions, negative side first.
    pub const ALL: [ZPosition; 8] = [
        ZPosition(-4),
        ZPosition(-3),
        ZPosition(-2),
        ZPosition(-1),
        ZPosition(1),
        ZPosition(2),
        ZPosition(3),
        ZPosition(4),
    ];

    pub fn label(&self) -> String {
        self.0.to_string()
    }
}

/// Where a histogram mean actually came from.
///
/// A missing histogram degrades to a mean of 0 so the rest of the run can
/// still be computed, but the substitution is recorded here instead of only
/// in the logs. Table consumers can render or filter on data quality
/// without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// The mean was read from the histogram store.
    Measured,
    /// The histogram was absent; 0 was substituted and an error logged.
    DefaultedMissing,
}
