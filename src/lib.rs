//! Photomosaic generation from libraries of bottle cap photographs
//!
//! The pipeline samples a representative color for every cap image, prunes
//! near-duplicate colors from the resulting palette, error-diffuses a target
//! photograph against that palette, and pastes cap thumbnails into the final
//! mosaic image.

#![forbid(unsafe_code)]

/// Integer RGB color arithmetic and representative color sampling
pub mod color;
/// Floyd–Steinberg quantization against an irregular tile palette
pub mod dither;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Tile catalogs and palette reduction
pub mod palette;
/// Mosaic assembly and diagnostic previews
pub mod render;
/// Nearest-color search over the RGB cube
pub mod spatial;

pub use io::error::{MosaicError, Result};
