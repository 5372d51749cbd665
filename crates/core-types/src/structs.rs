use serde::{Deserialize, Serialize};

use crate::enums::Provenance;

/// The physical constants every derived quantity is scaled by.
///
/// These are threaded explicitly through each formula call instead of being
/// buried as default arguments, so substituting detector-specific constants
/// is a pure data change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConstants {
    /// LHC revolution frequency in Hz.
    pub rev_frequency: f64,
    /// Active area of one module in cm^2.
    pub active_module_area: f64,
    /// Number of pixels on one module.
    pub pixels_per_module: f64,
}

impl DetectorConstants {
    pub fn new(rev_frequency: f64, active_module_area: f64, pixels_per_module: f64) -> Self {
        Self {
            rev_frequency,
            active_module_area,
            pixels_per_module,
        }
    }
}

impl Default for DetectorConstants {
    fn default() -> Self {
        Self {
            rev_frequency: 11245.0,
            active_module_area: 10.45,
            pixels_per_module: 66560.0,
        }
    }
}

/// A histogram mean together with its provenance.
///
/// A mean of 0 with `Provenance::Measured` is a true (if suspicious) zero;
/// a mean of 0 with `Provenance::DefaultedMissing` stands in for a
/// histogram that was not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoMean {
    pub value: f64,
    pub provenance: Provenance,
}

impl HistoMean {
    pub fn measured(value: f64) -> Self {
        Self {
            value,
            provenance: Provenance::Measured,
        }
    }

    /// The stand-in for a histogram that was absent from the store.
    pub fn defaulted() -> Self {
        Self {
            value: 0.0,
            provenance: Provenance::DefaultedMissing,
        }
    }
}

impl Default for HistoMean {
    fn default() -> Self {
        Self::measured(0.0)
    }
}

/// The four derived quantities computed from one histogram mean.
///
/// `occupancy` is `None` for cluster-derived metrics: clusters have no
/// defined occupancy denominator, which is a distinct state from an
/// occupancy of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Hits per module.
    pub per_module: f64,
    /// Hits per cm^2.
    pub per_area: f64,
    /// Hits per cm^2 per second.
    pub per_area_sec: f64,
    /// Fraction of pixels hit, pixel metrics only.
    pub occupancy: Option<f64>,
    /// Inherited from the histogram mean the metrics were derived from.
    pub provenance: Provenance,
}

impl Default for DerivedMetrics {
    fn default() -> Self {
        Self {
            per_module: 0.0,
            per_area: 0.0,
            per_area_sec: 0.0,
            occupancy: None,
            provenance: Provenance::Measured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_match_detector() {
        let consts = DetectorConstants::default();
        assert_eq!(consts.rev_frequency, 11245.0);
        assert_eq!(consts.active_module_area, 10.45);
        assert_eq!(consts.pixels_per_module, 66560.0);
    }

    #[test]
    fn defaulted_mean_is_zero_but_flagged() {
        let mean = HistoMean::defaulted();
        assert_eq!(mean.value, 0.0);
        assert_eq!(mean.provenance, Provenance::DefaultedMissing);
        assert_ne!(mean, HistoMean::measured(0.0));
    }
}
