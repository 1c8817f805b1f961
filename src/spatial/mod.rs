//! Spatial partitioning of the RGB cube
//!
//! This module contains the nearest-color search structure:
//! - Grid-bucketed candidate capture per RGB sub-cube
//! - Approximate nearest-neighbor queries with an explicit distance margin

/// Grid-bucketed nearest-color index
pub mod index;

pub use index::SpatialColorIndex;
