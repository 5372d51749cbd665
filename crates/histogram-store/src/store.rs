use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use core_types::HistoMean;

use crate::error::StoreError;

/// The histogram store a run is computed from.
///
/// The occupancy calculation only ever needs two things from its input
/// files: whether a named histogram exists, and its mean.
pub trait HistogramStore {
    fn contains(&self, key: &str) -> bool;

    /// The mean of the named histogram, or `None` if it is absent.
    fn mean(&self, key: &str) -> Option<f64>;
}

/// One histogram as it appears in a summary file: the mean plus the entry
/// count it was computed from.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HistogramSummary {
    pub mean: f64,
    #[serde(default)]
    pub entries: u64,
}

/// A [`HistogramStore`] backed by a JSON summary file mapping histogram
/// keys to [`HistogramSummary`] records.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    histograms: HashMap<String, HistogramSummary>,
}

impl JsonStore {
    /// Opens and parses a summary file. An unreadable or malformed file is
    /// fatal for the run that uses it; the batch driver decides whether to
    /// continue with the other runs.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = %path.display(), "Opening histogram store");

        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let histograms: HashMap<String, HistogramSummary> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            histograms = histograms.len(),
            "Histogram store loaded"
        );
        Ok(Self { path, histograms })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistogramStore for JsonStore {
    fn contains(&self, key: &str) -> bool {
        self.histograms.contains_key(key)
    }

    fn mean(&self, key: &str) -> Option<f64> {
        self.histograms.get(key).map(|h| h.mean)
    }
}

/// An in-memory [`HistogramStore`] for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    means: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, mean: f64) {
        self.means.insert(key.into(), mean);
    }

    pub fn remove(&mut self, key: &str) {
        self.means.remove(key);
    }
}

impl HistogramStore for MemoryStore {
    fn contains(&self, key: &str) -> bool {
        self.means.contains_key(key)
    }

    fn mean(&self, key: &str) -> Option<f64> {
        self.means.get(key).copied()
    }
}

/// Fetches a histogram mean with the missing-data policy applied.
///
/// An absent histogram yields a flagged zero and an error log entry rather
/// than a hard failure, so one missing histogram cannot prevent the rest of
/// the run from being computed. A present-but-zero mean is physically
/// suspicious and logged as a warning, but it stays a measured value.
pub fn fetch_mean(store: &dyn HistogramStore, key: &str) -> HistoMean {
    tracing::debug!(key, "Getting mean from histogram");
    match store.mean(key) {
        Some(mean) => {
            if mean == 0.0 {
                tracing::warn!(key, "Mean of histogram is zero! Please check.");
            }
            HistoMean::measured(mean)
        }
        None => {
            tracing::error!(key, "Histogram not in store! Please check.");
            HistoMean::defaulted()
        }
    }
}

#[cfg(test)]
mod tests {
    use core_types::Provenance;

    use super::*;

    #[test]
    fn memory_store_lookup() {
        let mut store = MemoryStore::new();
        store.insert("d/hpixPerLay1", 123.5);

        assert!(store.contains("d/hpixPerLay1"));
        assert_eq!(store.mean("d/hpixPerLay1"), Some(123.5));
        assert!(!store.contains("d/hpixPerLay2"));
        assert_eq!(store.mean("d/hpixPerLay2"), None);
    }

    #[test]
    fn fetch_mean_marks_missing_histograms() {
        let mut store = MemoryStore::new();
        store.insert("d/hpixPerLay1", 42.0);

        let present = fetch_mean(&store, "d/hpixPerLay1");
        assert_eq!(present.value, 42.0);
        assert_eq!(present.provenance, Provenance::Measured);

        let absent = fetch_mean(&store, "d/hpixPerLay2");
        assert_eq!(absent.value, 0.0);
        assert_eq!(absent.provenance, Provenance::DefaultedMissing);
    }

    #[test]
    fn fetch_mean_keeps_true_zero_as_measured() {
        let mut store = MemoryStore::new();
        store.insert("d/hclusPerLay1", 0.0);

        let zero = fetch_mean(&store, "d/hclusPerLay1");
        assert_eq!(zero.value, 0.0);
        assert_eq!(zero.provenance, Provenance::Measured);
    }

    #[test]
    fn json_store_parses_summaries() {
        let raw = r#"{
            "d/hpixPerLay1": { "mean": 3501.25, "entries": 180000 },
            "d/hclusPerLay1": { "mean": 612.0 }
        }"#;
        let histograms: HashMap<String, HistogramSummary> = serde_json::from_str(raw).unwrap();
        let store = JsonStore {
            path: PathBuf::from("in-memory"),
            histograms,
        };

        assert_eq!(store.mean("d/hpixPerLay1"), Some(3501.25));
        assert_eq!(store.mean("d/hclusPerLay1"), Some(612.0));
        assert!(!store.contains("d/hpixPerLay2"));
    }
}
