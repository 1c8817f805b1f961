//! Floyd–Steinberg error diffusion against an irregular tile palette
//!
//! Classic error diffusion assumes a small fixed palette; here every
//! quantization step is a nearest-color query against the catalog's spatial
//! index instead. The numeric contract is deliberately conservative:
//! diffused channel values are truncated toward zero and never clamped, so
//! working colors drift outside `[0, 255]` and are fed to the distance
//! function as-is.

use crate::color::Color;
use crate::dither::grid::IndexGrid;
use crate::io::error::{MosaicError, Result};
use crate::palette::TileCatalog;
use ndarray::Array2;

/// Diffusion kernel as `(x offset, y offset, error weight)`
///
/// Weights sum to one; offsets only reach pixels the raster scan has not
/// visited yet.
const KERNEL: [(i64, i64, f64); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Quantize an image to a grid of tile ids via error diffusion
///
/// # Errors
///
/// Returns an error when the catalog is empty.
pub fn dither(image: &image::RgbImage, catalog: &TileCatalog) -> Result<IndexGrid> {
    dither_with_progress(image, catalog, |_| {})
}

/// [`dither`] with a per-row progress callback
///
/// Pixels are processed in strict raster order, so `on_row` is invoked with
/// ascending row indices. Output is deterministic for a fixed image and
/// catalog insertion order.
///
/// # Errors
///
/// Returns an error when the catalog is empty.
pub fn dither_with_progress(
    image: &image::RgbImage,
    catalog: &TileCatalog,
    mut on_row: impl FnMut(u32),
) -> Result<IndexGrid> {
    if catalog.is_empty() {
        return Err(MosaicError::EmptyCatalog {
            operation: "dither",
        });
    }

    let (width, height) = image.dimensions();
    let mut working = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        Color::from_pixel(*image.get_pixel(x as u32, y as u32))
    });
    let mut grid = IndexGrid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let Some(old) = working.get([y as usize, x as usize]).copied() else {
                continue;
            };
            let (id, snapped) =
                catalog
                    .nearest(old, None)
                    .ok_or(MosaicError::EmptyCatalog {
                        operation: "dither",
                    })?;

            grid.set(x, y, id);
            // Later kernel taps read this location as already quantized
            if let Some(slot) = working.get_mut([y as usize, x as usize]) {
                *slot = snapped;
            }

            let error = old.difference(snapped);
            for (dx, dy, weight) in KERNEL {
                let nx = i64::from(x) + dx;
                let ny = i64::from(y) + dy;
                if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                    continue;
                }
                if let Some(neighbor) = working.get_mut([ny as usize, nx as usize]) {
                    *neighbor = neighbor.with_error(error, weight);
                }
            }
        }
        on_row(y);
    }

    Ok(grid)
}
