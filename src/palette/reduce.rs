//! Near-duplicate tile removal
//!
//! An oversized tile library usually carries many caps of nearly identical
//! color. Dropping them keeps dithering quality while shrinking every later
//! nearest-color scan.

use crate::io::error::{Result, invalid_parameter};
use crate::palette::TileCatalog;

/// Reduce a catalog by dropping tiles within `threshold` of an earlier match
///
/// A single greedy pass in insertion order: each tile is queried against the
/// original catalog with itself excluded, and kept only when no other tile
/// sits within `threshold` (linear Euclidean distance) of its color. The
/// result is a new, independent catalog; the original is untouched. Output
/// size never exceeds the input size, and a zero threshold keeps every tile
/// whose color is unique.
///
/// # Errors
///
/// Returns an error when `threshold` is negative or not finite.
pub fn reduce(catalog: &TileCatalog, threshold: f64) -> Result<TileCatalog> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(invalid_parameter(
            "threshold",
            &threshold,
            &"must be a non-negative finite distance",
        ));
    }

    let mut reduced = TileCatalog::new(catalog.tile_width(), catalog.tile_height());
    for (id, tile) in catalog.tiles().iter().enumerate() {
        let keep = catalog
            .nearest(tile.color(), Some(id))
            .is_none_or(|(_, near)| {
                (tile.color().distance_squared(near) as f64).sqrt() > threshold
            });
        if keep {
            reduced.insert(tile.clone());
        }
    }
    Ok(reduced)
}
