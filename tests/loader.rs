//! Validates tile directory scanning, sampling, and decode tolerance

use capmosaic::MosaicError;
use capmosaic::color::Color;
use capmosaic::io::loader::{collect_tile_paths, load_catalog};
use capmosaic::palette::Tile;
use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;

fn write_solid_image(dir: &Path, name: &str, rgb: [u8; 3]) -> capmosaic::Result<()> {
    let path = dir.join(name);
    RgbImage::from_pixel(8, 8, Rgb(rgb))
        .save(&path)
        .map_err(|e| MosaicError::ImageExport { path, source: e })?;
    Ok(())
}

#[test]
fn test_collect_filters_and_sorts() -> capmosaic::Result<()> {
    let dir = tempfile::tempdir()?;
    write_solid_image(dir.path(), "b.png", [0, 0, 255])?;
    write_solid_image(dir.path(), "a.png", [255, 0, 0])?;
    write_solid_image(dir.path(), "photo.JPG", [0, 255, 0])?;
    fs::write(dir.path().join("notes.txt"), "not an image")?;

    let paths = collect_tile_paths(dir.path())?;
    let names: Vec<_> = paths
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "photo.JPG"]);
    Ok(())
}

#[test]
fn test_load_skips_undecodable_files() -> capmosaic::Result<()> {
    let dir = tempfile::tempdir()?;
    write_solid_image(dir.path(), "a.png", [255, 0, 0])?;
    fs::write(dir.path().join("broken.png"), "definitely not a png")?;

    let paths = collect_tile_paths(dir.path())?;
    assert_eq!(paths.len(), 2);

    let mut rng = StdRng::seed_from_u64(1);
    let mut visited = 0;
    let catalog = load_catalog(&paths, 4, 4, 1.0, &mut rng, true, || visited += 1)?;

    assert_eq!(visited, 2);
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.tile(0).map(Tile::color),
        Some(Color::new(255, 0, 0))
    );
    Ok(())
}

#[test]
fn test_probability_zero_selects_nothing() -> capmosaic::Result<()> {
    let dir = tempfile::tempdir()?;
    write_solid_image(dir.path(), "a.png", [1, 2, 3])?;
    write_solid_image(dir.path(), "b.png", [4, 5, 6])?;

    let paths = collect_tile_paths(dir.path())?;
    let mut rng = StdRng::seed_from_u64(1);
    let catalog = load_catalog(&paths, 4, 4, 0.0, &mut rng, true, || {})?;
    assert!(catalog.is_empty());
    Ok(())
}

#[test]
fn test_same_seed_reproduces_the_catalog() -> capmosaic::Result<()> {
    let dir = tempfile::tempdir()?;
    for (i, name) in ["a.png", "b.png", "c.png", "d.png", "e.png", "f.png"]
        .iter()
        .enumerate()
    {
        write_solid_image(dir.path(), name, [(i * 40) as u8, 0, 0])?;
    }

    let paths = collect_tile_paths(dir.path())?;
    let mut first_rng = StdRng::seed_from_u64(99);
    let first = load_catalog(&paths, 4, 4, 0.5, &mut first_rng, true, || {})?;

    let mut second_rng = StdRng::seed_from_u64(99);
    let second = load_catalog(&paths, 4, 4, 0.5, &mut second_rng, true, || {})?;

    assert_eq!(first.len(), second.len());
    let first_colors: Vec<_> = first.tiles().iter().map(Tile::color).collect();
    let second_colors: Vec<_> = second.tiles().iter().map(Tile::color).collect();
    assert_eq!(first_colors, second_colors);
    Ok(())
}

#[test]
fn test_tiles_are_resized_to_thumbnail_dimensions() -> capmosaic::Result<()> {
    let dir = tempfile::tempdir()?;
    write_solid_image(dir.path(), "a.png", [50, 60, 70])?;

    let paths = collect_tile_paths(dir.path())?;
    let mut rng = StdRng::seed_from_u64(1);
    let catalog = load_catalog(&paths, 5, 7, 1.0, &mut rng, true, || {})?;

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.tile(0).map(|tile| tile.thumbnail().dimensions()),
        Some((5, 7))
    );
    Ok(())
}

#[test]
fn test_missing_directory_is_a_filesystem_error() {
    match collect_tile_paths(Path::new("/definitely/not/a/real/directory")) {
        Err(MosaicError::FileSystem { operation, .. }) => {
            assert_eq!(operation, "read tile directory");
        }
        _ => unreachable!("Expected FileSystem error type"),
    }
}
