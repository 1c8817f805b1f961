//! Tile storage and nearest-tile lookup

use crate::color::{Color, sample};
use crate::io::error::Result;
use crate::spatial::SpatialColorIndex;
use image::RgbImage;

/// A mosaic building block: one thumbnail and its representative color
#[derive(Debug, Clone)]
pub struct Tile {
    thumbnail: RgbImage,
    color: Color,
}

impl Tile {
    /// Build a tile from a pre-sized thumbnail, sampling its color
    ///
    /// # Errors
    ///
    /// Returns an error when the circular sampling mask covers no pixels.
    pub fn new(thumbnail: RgbImage) -> Result<Self> {
        let color = sample::representative_color(&thumbnail)?;
        Ok(Self { thumbnail, color })
    }

    /// The tile's representative color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The tile's thumbnail image
    pub const fn thumbnail(&self) -> &RgbImage {
        &self.thumbnail
    }
}

/// Ordered tile collection backed by a spatial color index
///
/// Ids are assigned by insertion order and never reused. The index is kept
/// consistent with the tile list on every insertion; once queries begin the
/// catalog is treated as read-only by the rest of the pipeline.
#[derive(Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    index: SpatialColorIndex,
    tile_width: u32,
    tile_height: u32,
}

impl TileCatalog {
    /// Create an empty catalog for thumbnails of the given dimensions
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tiles: Vec::new(),
            index: SpatialColorIndex::new(),
            tile_width,
            tile_height,
        }
    }

    /// Append a tile and register its color, returning the new id
    pub fn insert(&mut self, tile: Tile) -> usize {
        let id = self.index.insert(tile.color());
        self.tiles.push(tile);
        id
    }

    /// Nearest tile to `color`, optionally skipping one id
    ///
    /// Returns `None` when the catalog is empty or every candidate is
    /// excluded. A nonexistent `exclude` id is harmless.
    pub fn nearest(&self, color: Color, exclude: Option<usize>) -> Option<(usize, Color)> {
        self.index.find(color, exclude)
    }

    /// Number of tiles in the catalog
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile registered under `id`, if any
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All tiles in insertion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Width of every thumbnail in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of every thumbnail in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }
}
