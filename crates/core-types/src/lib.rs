//! # Pixocc Core Types
//!
//! This crate defines the shared vocabulary of the occupancy measurement:
//! the detector geometry enums (layers, ladders, z positions), the metric
//! groups, the physical constants, and the small value types that every
//! other crate consumes.
//!
//! ## Architectural Principles
//!
//! - **Layer 0 Data:** This crate holds plain data and nothing else. It has
//!   no I/O, no logging, and no knowledge of where histogram means come
//!   from or where tables end up.
//! - **No Stringly-Typed Keys:** Per-layer values live in a fixed-size
//!   `LayerMap` indexed by the `Layer` enum, so iteration order is the
//!   physical layer order and lookups cannot misspell a layer name.

// Declare the modules that make up this crate.
pub mod enums;
pub mod layer_map;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Ladder, Layer, MetricGroup, Provenance, ZPosition};
pub use layer_map::LayerMap;
pub use structs::{DerivedMetrics, DetectorConstants, HistoMean};
