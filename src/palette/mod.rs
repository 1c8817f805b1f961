//! Tile palettes and their reduction
//!
//! This module contains palette-related functionality including:
//! - Tile storage with stable insertion-order ids
//! - Nearest-tile lookup backed by the spatial color index
//! - Greedy near-duplicate removal

/// Tile storage and nearest-tile lookup
pub mod catalog;
/// Near-duplicate tile removal
pub mod reduce;

pub use catalog::{Tile, TileCatalog};
pub use reduce::reduce;
