//! # Pixocc Report Renderer
//!
//! This crate turns the aggregator's tables into artifacts: an HTML report
//! folder, optional LaTeX/CSV/CFG exports, and comfy-table output for the
//! terminal.
//!
//! ## Architectural Principles
//!
//! - **Tables In, Files Out:** The renderer only ever sees the `Table`
//!   contract. It knows nothing about histograms, runs or formulas beyond
//!   the labels it is handed.
//! - **One Folder per Report:** All artifacts of a batch land under one
//!   output folder, with `tex/`, `csv/` and `cfg/` subfolders created on
//!   demand and the run-list config copied alongside for provenance.
//!
//! ## Public API
//!
//! - `ReportWriter`: folder management and file export.
//! - `ReportTables`: the six table families of one batch.
//! - `console_table`: terminal rendering of a single table.
//! - `ReportError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod cfg;
pub mod console;
pub mod csv;
pub mod error;
pub mod format;
pub mod html;
pub mod latex;
pub mod writer;

// Re-export the key components to create a clean, public-facing API.
pub use console::console_table;
pub use error::ReportError;
pub use html::{IndexSection, RunSummaryRow};
pub use writer::{ExportFlags, ReportTables, ReportWriter};
