//! # Pixocc Analytics
//!
//! This crate turns raw per-layer and per-module histogram means into the
//! derived occupancy quantities, and holds them per run.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** The formula layer consists of total functions
//!   over finite floats. It has no I/O and no failure modes; the
//!   module-count-zero degenerate case is a caller precondition that the
//!   module counter upholds.
//! - **Build Once, Read Forever:** A [`RunContainer`] is fully populated at
//!   construction from a histogram-store handle and is immutable
//!   afterwards. Missing histograms degrade single values to flagged
//!   zeros; they never abort construction or remove a layer.
//!
//! ## Public API
//!
//! - `formulas`: the per-module / per-area / per-area-per-second /
//!   occupancy derivations.
//! - `RunContainer`: all derived metrics of one run, for all four layers.
//! - `module_counter`: working-module counts per layer.

// Declare the modules that constitute this crate.
pub mod container;
pub mod formulas;
pub mod module_counter;

// Re-export the key components to create a clean, public-facing API.
pub use container::{LadderSplit, RunContainer, ZSplit};
