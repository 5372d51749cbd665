use std::fs;
use std::path::{Path, PathBuf};

use aggregator::{ComparisonTable, PerRunTable, RunCollection, Table};
use configuration::StyleOptions;

use crate::error::ReportError;
use crate::format::sanitize;
use crate::html::{IndexSection, RunSummaryRow, render_index, render_table_page};
use crate::{cfg, csv, latex};

/// Which optional exports to produce next to the HTML report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportFlags {
    pub latex: bool,
    pub csv: bool,
    pub cfg: bool,
}

/// The six table families of one batch: per-run and run-comparison tables
/// for each of the three detector views.
#[derive(Debug, Clone)]
pub struct ReportTables {
    pub full_per_run: Vec<PerRunTable>,
    pub full_comparison: Vec<ComparisonTable>,
    pub z_per_run: Vec<PerRunTable>,
    pub z_comparison: Vec<ComparisonTable>,
    pub ladder_per_run: Vec<PerRunTable>,
    pub ladder_comparison: Vec<ComparisonTable>,
}

impl ReportTables {
    /// Runs all three aggregator views over a run collection.
    pub fn from_collection(runs: &RunCollection) -> Self {
        let (full_per_run, full_comparison) = aggregator::full_detector_tables(runs);
        let (z_per_run, z_comparison) = aggregator::z_dependency_tables(runs);
        let (ladder_per_run, ladder_comparison) = aggregator::ladder_tables(runs);
        Self {
            full_per_run,
            full_comparison,
            z_per_run,
            z_comparison,
            ladder_per_run,
            ladder_comparison,
        }
    }
}

/// Writes a report folder: `index.html`, one HTML page per table, and the
/// optional `tex/`, `csv/` and `cfg/` exports.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
    style: StyleOptions,
}

/// One table with its resolved file base name and page title.
struct NamedTable<'a> {
    base: String,
    title: String,
    table: &'a Table,
}

impl ReportWriter {
    pub fn new(root: impl Into<PathBuf>, style: StyleOptions) -> Self {
        Self {
            root: root.into(),
            style,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes all artifacts of a batch.
    pub fn write_all(
        &self,
        title: &str,
        description: &str,
        runs: &[RunSummaryRow],
        tables: &ReportTables,
        flags: ExportFlags,
        config_path: Option<&Path>,
    ) -> Result<(), ReportError> {
        tracing::info!(folder = %self.root.display(), "Starting file export");
        self.ensure_folder(&self.root)?;

        let families: Vec<(&str, Vec<NamedTable>)> = vec![
            ("Full detector, per run", name_per_run("fullPerRun", &tables.full_per_run)),
            ("Full detector, run comparison", name_comparison("fullRunComp", &tables.full_comparison)),
            ("Z dependency, per run", name_per_run("zPerRun", &tables.z_per_run)),
            ("Z dependency, run comparison", name_comparison("zRunComp", &tables.z_comparison)),
            ("Inner/outer ladders, per run", name_per_run("InOutPerRun", &tables.ladder_per_run)),
            ("Inner/outer ladders, run comparison", name_comparison("partialRunComp", &tables.ladder_comparison)),
        ];

        let mut sections = Vec::new();
        for (heading, named) in &families {
            let mut links = Vec::new();
            for entry in named {
                let file = format!("{}.html", entry.base);
                self.write_file(
                    &self.root.join(&file),
                    &render_table_page(&entry.title, entry.table, self.style.html_precision),
                )?;
                links.push((entry.title.clone(), file));
            }
            sections.push(IndexSection {
                heading: (*heading).to_string(),
                links,
            });
        }

        let copied_config = match config_path {
            Some(path) => Some(self.copy_config(path)?),
            None => None,
        };

        let index = render_index(title, description, runs, &sections, copied_config.as_deref());
        self.write_file(&self.root.join("index.html"), &index)?;

        if flags.latex {
            tracing::info!("LaTeX export initialized");
            let folder = self.root.join("tex");
            self.ensure_folder(&folder)?;
            for (_, named) in &families {
                for entry in named {
                    self.write_file(
                        &folder.join(format!("{}.txt", entry.base)),
                        &latex::to_latex(entry.table, self.style.latex_precision),
                    )?;
                }
            }
        }

        if flags.csv {
            tracing::info!("CSV export initialized");
            let folder = self.root.join("csv");
            self.ensure_folder(&folder)?;
            for (_, named) in &families {
                for entry in named {
                    self.write_file(
                        &folder.join(format!("{}.csv", entry.base)),
                        &csv::to_csv(entry.table, self.style.csv_precision),
                    )?;
                }
            }
        }

        if flags.cfg {
            tracing::info!("CFG export initialized");
            let folder = self.root.join("cfg");
            self.ensure_folder(&folder)?;
            for (_, named) in &families {
                for entry in named {
                    self.write_file(
                        &folder.join(format!("{}.txt", entry.base)),
                        &cfg::to_cfg(entry.table, self.style.csv_precision),
                    )?;
                }
            }
        }

        Ok(())
    }

    /// Copies the run-list config next to the artifacts it produced and
    /// returns its file name.
    fn copy_config(&self, config: &Path) -> Result<String, ReportError> {
        let file_name = config
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "runlist.toml".to_string());
        fs::copy(config, self.root.join(&file_name)).map_err(ReportError::CopyConfig)?;
        Ok(file_name)
    }

    fn ensure_folder(&self, path: &Path) -> Result<(), ReportError> {
        if !path.exists() {
            tracing::info!(folder = %path.display(), "Creating folder");
            fs::create_dir_all(path).map_err(|source| ReportError::CreateFolder {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), ReportError> {
        fs::write(path, contents).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn name_per_run<'a>(prefix: &str, entries: &'a [PerRunTable]) -> Vec<NamedTable<'a>> {
    entries
        .iter()
        .map(|entry| {
            let group = sanitize(entry.group.label());
            let run = sanitize(&entry.run);
            let (base, title) = match entry.layer {
                None => (
                    format!("{prefix}_{run}_{group}"),
                    format!("{} {}", entry.run, entry.group.label()),
                ),
                Some(layer) => (
                    format!("{prefix}_{run}_{group}_{}", layer.label()),
                    format!("{} {} {}", entry.run, entry.group.label(), layer.label()),
                ),
            };
            NamedTable {
                base,
                title,
                table: &entry.table,
            }
        })
        .collect()
}

fn name_comparison<'a>(prefix: &str, entries: &'a [ComparisonTable]) -> Vec<NamedTable<'a>> {
    entries
        .iter()
        .map(|entry| {
            let group = sanitize(entry.group.label());
            let layer = entry.layer.label();
            let (base, title) = match &entry.substructure {
                None => (
                    format!("{prefix}_{layer}_{group}"),
                    format!("{} {}", layer, entry.group.label()),
                ),
                Some(sub) => (
                    format!("{prefix}_{layer}_{group}_{}", sanitize(sub)),
                    format!("{} {} {}", layer, entry.group.label(), sub),
                ),
            };
            NamedTable {
                base,
                title,
                table: &entry.table,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use analytics::RunContainer;
    use core_types::DetectorConstants;
    use histogram_store::MemoryStore;

    use super::*;

    fn temp_folder() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("pixocc-report-test-{nanos}"))
    }

    #[test]
    fn writes_index_pages_and_exports() {
        let mut runs = RunCollection::new();
        runs.push(RunContainer::build(
            "RunA",
            &MemoryStore::new(),
            2000.0,
            DetectorConstants::default(),
        ));
        let tables = ReportTables::from_collection(&runs);

        let root = temp_folder();
        let writer = ReportWriter::new(&root, StyleOptions::default());
        let summary = vec![RunSummaryRow {
            id: "RunA".into(),
            colliding_bunches: 2000.0,
            comment: String::new(),
        }];
        let flags = ExportFlags {
            latex: true,
            csv: true,
            cfg: true,
        };
        writer
            .write_all("Test report", "", &summary, &tables, flags, None)
            .unwrap();

        assert!(root.join("index.html").is_file());
        assert!(root.join("fullPerRun_RunA_PixperLay.html").is_file());
        assert!(root.join("fullRunComp_Layer1_PixperLay.html").is_file());
        assert!(root.join("tex/fullPerRun_RunA_PixperLay.txt").is_file());
        assert!(root.join("csv/zPerRun_RunA_PixperLay_Layer1.csv").is_file());
        assert!(root.join("cfg/partialRunComp_Layer1_PixperLay_inner.txt").is_file());

        fs::remove_dir_all(&root).unwrap();
    }
}
