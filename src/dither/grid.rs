//! Dense tile-id grid produced by quantization

use ndarray::Array2;

/// One tile id per destination pixel, in row-major layout
///
/// Produced once per dithering pass and consumed read-only by the composer
/// and the diagnostic previews. By construction every id refers to a tile of
/// the catalog the pass was run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    ids: Array2<usize>,
}

impl IndexGrid {
    /// Create a zero-filled grid of the given dimensions
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            ids: Array2::from_elem((height as usize, width as usize), 0),
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> u32 {
        self.ids.ncols() as u32
    }

    /// Grid height in cells
    pub fn height(&self) -> u32 {
        self.ids.nrows() as u32
    }

    /// Tile id at `(x, y)`, if in bounds
    pub fn get(&self, x: u32, y: u32) -> Option<usize> {
        self.ids.get([y as usize, x as usize]).copied()
    }

    /// Record the tile id chosen for `(x, y)`
    pub(crate) fn set(&mut self, x: u32, y: u32, id: usize) {
        if let Some(slot) = self.ids.get_mut([y as usize, x as usize]) {
            *slot = id;
        }
    }
}
