//! Diagnostic palette and quantization previews
//!
//! Neither output affects the mosaic itself; both exist so a user can judge
//! the color coverage of a tile library and the effect of reduction before
//! committing to a full render.

use crate::dither::IndexGrid;
use crate::io::error::{MosaicError, Result};
use crate::palette::TileCatalog;
use image::RgbImage;

/// Square swatch image with one pixel per tile color, ordered by hue
///
/// The image side is the smallest square accommodating every tile; trailing
/// pixels stay black.
///
/// # Errors
///
/// Returns an error when the catalog is empty.
pub fn palette_image(catalog: &TileCatalog) -> Result<RgbImage> {
    if catalog.is_empty() {
        return Err(MosaicError::EmptyCatalog {
            operation: "render a palette preview",
        });
    }

    let side = (catalog.len() as f64).sqrt().ceil() as u32;
    let mut colors: Vec<_> = catalog.tiles().iter().map(|tile| tile.color()).collect();
    colors.sort_by(|a, b| a.hue().total_cmp(&b.hue()));

    let mut image = RgbImage::new(side, side);
    for (i, color) in colors.iter().enumerate() {
        let x = i as u32 % side;
        let y = i as u32 / side;
        image.put_pixel(x, y, color.to_pixel());
    }
    Ok(image)
}

/// Per-pixel rendering of the snapped colors behind an index grid
///
/// Each grid cell becomes a single pixel of its tile's representative
/// color, showing the dithering result without the thumbnail texture.
///
/// # Errors
///
/// Returns an error when the grid references an id the catalog lacks.
pub fn quantized_image(grid: &IndexGrid, catalog: &TileCatalog) -> Result<RgbImage> {
    let mut image = RgbImage::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(id) = grid.get(x, y) else {
                continue;
            };
            let tile = catalog.tile(id).ok_or(MosaicError::InvalidTileIndex {
                index: id,
                tiles: catalog.len(),
            })?;
            image.put_pixel(x, y, tile.color().to_pixel());
        }
    }
    Ok(image)
}
