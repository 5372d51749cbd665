use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;

use core_types::DetectorConstants;

use crate::error::ConfigError;

/// The root structure of a run-list file.
#[derive(Debug, Clone, Deserialize)]
pub struct RunListConfig {
    /// Title shown on the report index page.
    pub title: String,
    /// Free-text description shown under the title.
    #[serde(default)]
    pub description: String,
    /// Optional overrides for the detector constants.
    #[serde(default)]
    pub constants: ConstantsOverride,
    /// Optional table-style options for the exporters.
    #[serde(default)]
    pub style: StyleOptions,
    /// The runs to process, in processing (and report) order.
    pub runs: Vec<RunEntry>,
}

/// One run of the batch.
#[derive(Debug, Clone, Deserialize)]
pub struct RunEntry {
    /// The run identifier used as its name everywhere in the report.
    pub id: String,
    /// Path to the histogram summary file for this run.
    pub file: PathBuf,
    /// Number of colliding bunches during the run.
    pub colliding_bunches: f64,
    /// Free-text comment carried into the report.
    #[serde(default)]
    pub comment: String,
}

/// Per-file overrides for the detector constants. Anything left out keeps
/// its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConstantsOverride {
    pub rev_frequency: Option<f64>,
    pub active_module_area: Option<f64>,
    pub pixels_per_module: Option<f64>,
}

impl ConstantsOverride {
    /// Applies the overrides on top of the default constants.
    pub fn resolve(&self) -> DetectorConstants {
        let defaults = DetectorConstants::default();
        DetectorConstants {
            rev_frequency: self.rev_frequency.unwrap_or(defaults.rev_frequency),
            active_module_area: self
                .active_module_area
                .unwrap_or(defaults.active_module_area),
            pixels_per_module: self
                .pixels_per_module
                .unwrap_or(defaults.pixels_per_module),
        }
    }
}

/// Precision options for the table exporters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub latex_precision: usize,
    pub csv_precision: usize,
    pub html_precision: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            latex_precision: 4,
            csv_precision: 6,
            html_precision: 4,
        }
    }
}

impl RunListConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs.is_empty() {
            return Err(ConfigError::ValidationError(
                "run list contains no runs".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for run in &self.runs {
            if !seen.insert(run.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate run id '{}'",
                    run.id
                )));
            }
            if run.colliding_bunches <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "run '{}' has non-positive colliding bunches ({})",
                    run.id, run.colliding_bunches
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> RunListConfig {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    const MINIMAL: &str = r#"
        title = "Occupancy comparison"

        [[runs]]
        id = "Run297050"
        file = "histograms/297050.json"
        colliding_bunches = 2544.0
        comment = "reference fill"

        [[runs]]
        id = "Run297101"
        file = "histograms/297101.json"
        colliding_bunches = 1866.0
    "#;

    #[test]
    fn minimal_run_list_parses_and_validates() {
        let cfg = parse(MINIMAL);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.title, "Occupancy comparison");
        assert_eq!(cfg.runs.len(), 2);
        assert_eq!(cfg.runs[0].id, "Run297050");
        assert_eq!(cfg.runs[1].comment, "");
        assert_eq!(cfg.style.latex_precision, 4);
    }

    #[test]
    fn constants_overrides_merge_with_defaults() {
        let raw = r#"
            title = "t"

            [constants]
            rev_frequency = 11246.0

            [[runs]]
            id = "RunA"
            file = "a.json"
            colliding_bunches = 2000.0
        "#;
        let consts = parse(raw).constants.resolve();
        assert_eq!(consts.rev_frequency, 11246.0);
        assert_eq!(consts.active_module_area, 10.45);
        assert_eq!(consts.pixels_per_module, 66560.0);
    }

    #[test]
    fn duplicate_run_ids_are_rejected() {
        let raw = r#"
            title = "t"

            [[runs]]
            id = "RunA"
            file = "a.json"
            colliding_bunches = 2000.0

            [[runs]]
            id = "RunA"
            file = "b.json"
            colliding_bunches = 2000.0
        "#;
        assert!(matches!(
            parse(raw).validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn non_positive_bunches_are_rejected() {
        let raw = r#"
            title = "t"

            [[runs]]
            id = "RunA"
            file = "a.json"
            colliding_bunches = 0.0
        "#;
        assert!(parse(raw).validate().is_err());
    }
}
