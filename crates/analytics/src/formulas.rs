//! The derivation formulas.
//!
//! Each quantity is derived from a histogram mean and the detector
//! constants. `per_area` and `per_area_sec` share one two-step formula for
//! every metric family; the layer and per-det entry points differ only in
//! whether the mean still has to be divided down to a per-module value.

use core_types::{DerivedMetrics, DetectorConstants, HistoMean};

/// Hits per module from a layer-aggregated total.
///
/// Degenerates to `inf`/`NaN` when `n_modules` is 0; the module counter
/// never reports 0 for a layer, so callers going through it are safe.
pub fn per_module_rate(total: f64, n_modules: f64) -> f64 {
    total / n_modules
}

/// The shared two-step formula: hits per cm^2, and hits per cm^2 per
/// second scaled by the colliding bunches and the revolution frequency.
pub fn per_area_and_rate(
    per_module: f64,
    colliding_bunches: f64,
    consts: &DetectorConstants,
) -> (f64, f64) {
    let per_area = per_module / consts.active_module_area;
    let per_area_sec = per_area * colliding_bunches * consts.rev_frequency;
    (per_area, per_area_sec)
}

/// Fraction of pixels hit on one module. Defined for pixel metrics only;
/// cluster counts have no occupancy denominator.
pub fn occupancy(per_module: f64, consts: &DetectorConstants) -> f64 {
    per_module / consts.pixels_per_module
}

/// Derives all quantities from a mean aggregated over a whole layer.
pub fn layer_metrics(
    mean: HistoMean,
    n_modules: f64,
    colliding_bunches: f64,
    is_cluster: bool,
    consts: &DetectorConstants,
) -> DerivedMetrics {
    let per_module = per_module_rate(mean.value, n_modules);
    let (per_area, per_area_sec) = per_area_and_rate(per_module, colliding_bunches, consts);

    DerivedMetrics {
        per_module,
        per_area,
        per_area_sec,
        occupancy: (!is_cluster).then(|| occupancy(per_module, consts)),
        provenance: mean.provenance,
    }
}

/// Derives all quantities from a mean that already is a per-module value,
/// so the module count factor is 1.
pub fn det_metrics(
    mean: HistoMean,
    colliding_bunches: f64,
    is_cluster: bool,
    consts: &DetectorConstants,
) -> DerivedMetrics {
    layer_metrics(mean, 1.0, colliding_bunches, is_cluster, consts)
}

#[cfg(test)]
mod tests {
    use core_types::Provenance;

    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn per_module_rate_is_plain_division() {
        assert_eq!(per_module_rate(100.0, 10.0), 10.0);
        assert_eq!(per_module_rate(0.0, 96.0), 0.0);
    }

    #[test]
    fn rate_ratio_is_bunches_times_frequency() {
        let consts = DetectorConstants::default();
        let (per_area, per_area_sec) = per_area_and_rate(3.7, 2544.0, &consts);
        assert!(per_area != 0.0);
        assert_close(per_area_sec / per_area, 2544.0 * 11245.0, 1e-6);
    }

    #[test]
    fn layer_metrics_worked_example() {
        // n=100 hits over 10 modules at 2000 colliding bunches with the
        // default constants.
        let consts = DetectorConstants::default();
        let metrics = layer_metrics(HistoMean::measured(100.0), 10.0, 2000.0, false, &consts);

        assert_eq!(metrics.per_module, 10.0);
        assert_close(metrics.per_area, 10.0 / 10.45, 1e-9);
        assert_close(metrics.per_area_sec, 10.0 / 10.45 * 2000.0 * 11245.0, 1e-3);
        assert_close(metrics.occupancy.unwrap(), 10.0 / 66560.0, 1e-12);
        assert_eq!(metrics.provenance, Provenance::Measured);
    }

    #[test]
    fn cluster_metrics_have_no_occupancy() {
        let consts = DetectorConstants::default();
        let layer = layer_metrics(HistoMean::measured(50.0), 5.0, 2000.0, true, &consts);
        let det = det_metrics(HistoMean::measured(50.0), 2000.0, true, &consts);

        assert_eq!(layer.occupancy, None);
        assert_eq!(det.occupancy, None);
    }

    #[test]
    fn det_metrics_keep_the_mean_as_per_module() {
        let consts = DetectorConstants::default();
        let metrics = det_metrics(HistoMean::measured(3.25), 2000.0, false, &consts);

        assert_eq!(metrics.per_module, 3.25);
        assert_close(metrics.occupancy.unwrap(), 3.25 / 66560.0, 1e-12);
    }

    #[test]
    fn missing_provenance_flows_into_derived_metrics() {
        let consts = DetectorConstants::default();
        let metrics = layer_metrics(HistoMean::defaulted(), 96.0, 2000.0, false, &consts);

        assert_eq!(metrics.per_module, 0.0);
        assert_eq!(metrics.per_area, 0.0);
        assert_eq!(metrics.per_area_sec, 0.0);
        assert_eq!(metrics.occupancy, Some(0.0));
        assert_eq!(metrics.provenance, Provenance::DefaultedMissing);
    }
}
