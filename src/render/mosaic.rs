//! Final mosaic assembly from tile thumbnails

use crate::dither::IndexGrid;
use crate::io::error::{MosaicError, Result};
use crate::palette::TileCatalog;
use image::{RgbImage, imageops};

/// Paste one tile thumbnail per grid cell into the output image
///
/// The output measures exactly `(grid width x tile width,
/// grid height x tile height)` pixels, with each thumbnail placed at its
/// scaled offset.
///
/// # Errors
///
/// Returns an error when the grid references an id the catalog lacks. A
/// grid produced by dithering against the same catalog never does.
pub fn compose(grid: &IndexGrid, catalog: &TileCatalog) -> Result<RgbImage> {
    let tile_width = catalog.tile_width();
    let tile_height = catalog.tile_height();
    let mut output = RgbImage::new(grid.width() * tile_width, grid.height() * tile_height);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(id) = grid.get(x, y) else {
                continue;
            };
            let tile = catalog.tile(id).ok_or(MosaicError::InvalidTileIndex {
                index: id,
                tiles: catalog.len(),
            })?;
            imageops::replace(
                &mut output,
                tile.thumbnail(),
                i64::from(x) * i64::from(tile_width),
                i64::from(y) * i64::from(tile_height),
            );
        }
    }

    Ok(output)
}
