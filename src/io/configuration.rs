//! Pipeline constants and runtime configuration defaults

// Spatial index geometry
/// Per-axis subdivision of the RGB cube, as an exponent of two
///
/// Three bits give 8 cells per axis and 512 cells across the cube, which
/// keeps warm-up cheap while leaving candidate lists short for libraries of
/// a few thousand tiles.
pub const INDEX_CELL_BITS: u32 = 3;

// Default values for configurable parameters
/// Default edge length for square tile thumbnails in pixels
pub const DEFAULT_TILE_SIZE: u32 = 30;

/// Default mosaic width in tiles
pub const DEFAULT_GRID_WIDTH: u32 = 60;

/// Default mosaic height in tiles
pub const DEFAULT_GRID_HEIGHT: u32 = 80;

/// Default color distance below which tiles count as near-duplicates
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Default probability of accepting each tile file
pub const DEFAULT_PROBABILITY: f64 = 1.0;

/// Fixed seed for reproducible tile sampling
pub const DEFAULT_SEED: u64 = 42;

// Input settings
/// Accepted tile file extensions, matched without regard to ASCII case
pub const TILE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Output settings
/// Suffix for the full palette preview image
pub const PALETTE_PREVIEW_SUFFIX: &str = "_palette";
/// Suffix for the reduced palette preview image
pub const REDUCED_PREVIEW_SUFFIX: &str = "_palette_reduced";
/// Suffix for the quantized target preview image
pub const QUANTIZED_PREVIEW_SUFFIX: &str = "_quantized";
