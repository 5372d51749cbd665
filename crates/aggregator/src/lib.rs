//! # Pixocc Cross-Run Aggregator
//!
//! This crate reshapes a collection of run containers into the tabular
//! comparison structures the report renderer consumes.
//!
//! ## Architectural Principles
//!
//! - **Pure Reshaping:** Nothing here computes a metric. The aggregator
//!   only reorganizes values across runs, layers and substructures, so
//!   calling it twice on the same collection yields identical tables.
//! - **Uniform Shape:** Every run produces the same table shape. A value
//!   that was defaulted upstream stays a flagged cell; it never becomes a
//!   missing row or column.
//!
//! ## Public API
//!
//! - `RunCollection`: insertion-ordered collection of run containers.
//! - `Table` / `TableCell`: the plain tabular output contract.
//! - `views`: the full-detector, z-position and inner/outer-ladder table
//!   builders, each yielding per-run and cross-run comparison tables.

// Declare the modules that constitute this crate.
pub mod collection;
pub mod table;
pub mod views;

// Re-export the key components to create a clean, public-facing API.
pub use collection::RunCollection;
pub use table::{Table, TableCell};
pub use views::{
    ComparisonTable, PerRunTable, full_detector_tables, ladder_tables, z_dependency_tables,
};
