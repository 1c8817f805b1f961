//! Validates mosaic assembly and diagnostic previews

use capmosaic::MosaicError;
use capmosaic::dither;
use capmosaic::palette::{Tile, TileCatalog};
use capmosaic::render::{compose, preview};
use image::{Rgb, RgbImage};

fn catalog_of(colors: &[[u8; 3]]) -> capmosaic::Result<TileCatalog> {
    let mut catalog = TileCatalog::new(4, 4);
    for &rgb in colors {
        catalog.insert(Tile::new(RgbImage::from_pixel(4, 4, Rgb(rgb)))?);
    }
    Ok(catalog)
}

#[test]
fn test_compose_dimensions_scale_with_tile_size() -> capmosaic::Result<()> {
    let catalog = catalog_of(&[[0, 0, 0], [255, 255, 255]])?;
    let image = RgbImage::from_fn(3, 2, |x, _| {
        if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    });

    let grid = dither::dither(&image, &catalog)?;
    let mosaic = compose(&grid, &catalog)?;
    assert_eq!(mosaic.dimensions(), (12, 8));
    Ok(())
}

#[test]
fn test_compose_pastes_thumbnails_at_scaled_offsets() -> capmosaic::Result<()> {
    let catalog = catalog_of(&[[0, 0, 0], [255, 255, 255]])?;

    let mut image = RgbImage::new(2, 1);
    image.put_pixel(0, 0, Rgb([0, 0, 0]));
    image.put_pixel(1, 0, Rgb([255, 255, 255]));

    let grid = dither::dither(&image, &catalog)?;
    let mosaic = compose(&grid, &catalog)?;

    assert_eq!(mosaic.dimensions(), (8, 4));
    assert_eq!(*mosaic.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*mosaic.get_pixel(3, 3), Rgb([0, 0, 0]));
    assert_eq!(*mosaic.get_pixel(4, 0), Rgb([255, 255, 255]));
    assert_eq!(*mosaic.get_pixel(7, 3), Rgb([255, 255, 255]));
    Ok(())
}

#[test]
fn test_compose_rejects_foreign_ids() -> capmosaic::Result<()> {
    let two_tiles = catalog_of(&[[0, 0, 0], [255, 255, 255]])?;
    let one_tile = catalog_of(&[[0, 0, 0]])?;

    let image = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
    let grid = dither::dither(&image, &two_tiles)?;

    match compose(&grid, &one_tile) {
        Err(MosaicError::InvalidTileIndex { index: 1, tiles: 1 }) => {}
        _ => unreachable!("Expected InvalidTileIndex error type"),
    }
    Ok(())
}

#[test]
fn test_palette_preview_is_the_smallest_square() -> capmosaic::Result<()> {
    let catalog = catalog_of(&[
        [200, 10, 10],
        [10, 200, 10],
        [10, 10, 200],
        [200, 200, 10],
        [10, 200, 200],
    ])?;

    let swatches = preview::palette_image(&catalog)?;
    assert_eq!(swatches.dimensions(), (3, 3));

    for tile in catalog.tiles() {
        let expected = tile.color().to_pixel();
        assert!(
            swatches.pixels().any(|pixel| *pixel == expected),
            "palette preview is missing {expected:?}"
        );
    }
    Ok(())
}

#[test]
fn test_palette_preview_orders_by_hue() -> capmosaic::Result<()> {
    // Inserted out of hue order; the preview re-sorts red, green, blue
    let catalog = catalog_of(&[[0, 0, 255], [255, 0, 0], [0, 255, 0]])?;

    let swatches = preview::palette_image(&catalog)?;
    assert_eq!(swatches.dimensions(), (2, 2));
    assert_eq!(*swatches.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*swatches.get_pixel(1, 0), Rgb([0, 255, 0]));
    assert_eq!(*swatches.get_pixel(0, 1), Rgb([0, 0, 255]));
    assert_eq!(*swatches.get_pixel(1, 1), Rgb([0, 0, 0]));
    Ok(())
}

#[test]
fn test_palette_preview_requires_tiles() {
    let catalog = TileCatalog::new(4, 4);
    match preview::palette_image(&catalog) {
        Err(MosaicError::EmptyCatalog { .. }) => {}
        _ => unreachable!("Expected EmptyCatalog error type"),
    }
}

#[test]
fn test_quantized_preview_matches_grid_cells() -> capmosaic::Result<()> {
    let catalog = catalog_of(&[[0, 0, 0], [255, 255, 255]])?;

    let mut image = RgbImage::new(2, 1);
    image.put_pixel(0, 0, Rgb([0, 0, 0]));
    image.put_pixel(1, 0, Rgb([255, 255, 255]));

    let grid = dither::dither(&image, &catalog)?;
    let quantized = preview::quantized_image(&grid, &catalog)?;

    assert_eq!(quantized.dimensions(), (2, 1));
    assert_eq!(*quantized.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*quantized.get_pixel(1, 0), Rgb([255, 255, 255]));
    Ok(())
}
