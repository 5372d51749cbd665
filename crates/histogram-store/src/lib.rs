//! # Pixocc Histogram Store
//!
//! This crate is the adapter between the occupancy calculation and the
//! files that carry pre-aggregated histogram data. It is the system's only
//! source of measured numbers.
//!
//! ## Architectural Principles
//!
//! - **Adapter Crate:** Everything above this crate talks to the
//!   [`HistogramStore`] trait and never to a file format. Swapping the
//!   JSON summary format for another carrier touches only this crate.
//! - **Degrade, Don't Abort:** A single absent histogram must never sink a
//!   run. [`fetch_mean`] substitutes a flagged zero and logs an error; only
//!   an unreadable store file is fatal, and then only for that run.
//!
//! ## Public API
//!
//! - `HistogramStore`: the "does key exist / get mean scalar" trait.
//! - `JsonStore`: file-backed store reading `{key -> {mean, entries}}`.
//! - `MemoryStore`: in-memory store for tests and tooling.
//! - `fetch_mean`: mean lookup with the missing-data policy applied.
//! - `keys`: histogram key construction (`d/hpixPerLay1`, ...).
//! - `StoreError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod error;
pub mod keys;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use store::{HistogramStore, JsonStore, MemoryStore, fetch_mean};
