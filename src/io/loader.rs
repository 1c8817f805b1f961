//! Tile catalog construction from a directory of cap photographs

use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use crate::palette::{Tile, TileCatalog};
use image::imageops::{self, FilterType};
use rand::Rng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Candidate tile files in a directory, filtered by extension and sorted
///
/// Sorting makes catalog ids independent of directory enumeration order, so
/// a fixed seed reproduces the same catalog on every run.
///
/// # Errors
///
/// Returns an error when the directory cannot be read.
pub fn collect_tile_paths(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read tile directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: directory.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if TILE_EXTENSIONS
            .iter()
            .any(|accepted| extension.eq_ignore_ascii_case(accepted))
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Build a catalog by sampling, decoding, and shrinking tile images
///
/// Each path is accepted with probability `probability` (drawn from the
/// injected generator before any decoding work), decoded, resized to the
/// thumbnail dimensions, and inserted. Files that fail to decode are
/// reported and skipped. `on_file` fires once per visited path, accepted or
/// not.
///
/// # Errors
///
/// Returns an error when a thumbnail's sampling mask covers no pixels,
/// which only happens for degenerate tile dimensions.
// Skipped-file notices are user feedback, not diagnostics
#[allow(clippy::print_stderr)]
pub fn load_catalog(
    paths: &[PathBuf],
    tile_width: u32,
    tile_height: u32,
    probability: f64,
    rng: &mut StdRng,
    quiet: bool,
    mut on_file: impl FnMut(),
) -> Result<TileCatalog> {
    let mut catalog = TileCatalog::new(tile_width, tile_height);
    for path in paths {
        on_file();
        if rng.random::<f64>() > probability {
            continue;
        }
        let decoded = match image::open(path) {
            Ok(decoded) => decoded,
            Err(error) => {
                if !quiet {
                    eprintln!("Skipping {}: {error}", path.display());
                }
                continue;
            }
        };
        let thumbnail = imageops::resize(
            &decoded.to_rgb8(),
            tile_width,
            tile_height,
            FilterType::Triangle,
        );
        catalog.insert(Tile::new(thumbnail)?);
    }
    Ok(catalog)
}
