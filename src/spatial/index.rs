//! Grid-bucketed approximate nearest-color search
//!
//! Partitions the RGB cube into a fixed grid of sub-cubes. Each cell lazily
//! captures the subset of registered colors that could plausibly be nearest
//! to a query landing in that cell, so steady-state queries scan a short
//! candidate list instead of the whole color set.
//!
//! The capture radius is the distance from the cell center to its nearest
//! registered color plus a fixed slack spanning the cell. This biases toward
//! correctness near cell centers; a query close to a cell edge can still
//! receive a neighbor that is slightly farther than the true nearest. The
//! excess is bounded by the cell diagonal and is accepted as a deliberate
//! speed/quality trade.

use crate::color::Color;
use crate::io::configuration::INDEX_CELL_BITS;
use std::sync::OnceLock;

/// Cells along each axis of the RGB partition
const CELLS_PER_AXIS: u32 = 1 << INDEX_CELL_BITS;
/// Bits dropped from a channel to find its cell coordinate
const CHANNEL_SHIFT: u32 = 8 - INDEX_CELL_BITS;
/// Channel range covered by one cell
const CELL_SPAN: i32 = 256 >> INDEX_CELL_BITS;
/// Total cell count across the cube
const CELL_COUNT: usize = 1 << (3 * INDEX_CELL_BITS);
/// Per-axis cell coordinate mask
const AXIS_MASK: usize = (CELLS_PER_AXIS - 1) as usize;
/// Linear slack added to each cell's capture radius
const CAPTURE_SLACK: f64 = 2.0 * std::f64::consts::SQRT_2 * (128.0 / CELLS_PER_AXIS as f64);

/// Approximate nearest-color index over a growing set of RGB colors
///
/// The index owns the canonical color list; ids are assigned by insertion
/// order. Cells hold ids into that list, never color copies, and candidate
/// lists are rebuilt after any insertion, so queries always observe the
/// current color set.
#[derive(Debug)]
pub struct SpatialColorIndex {
    colors: Vec<Color>,
    cells: Vec<OnceLock<Vec<usize>>>,
}

impl Default for SpatialColorIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialColorIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            colors: Vec::new(),
            cells: (0..CELL_COUNT).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Register a color, returning its id
    ///
    /// Invalidates every initialized cell: candidate lists were computed
    /// against the previous color set and may no longer contain the true
    /// nearest neighbor.
    pub fn insert(&mut self, color: Color) -> usize {
        let id = self.colors.len();
        self.colors.push(color);
        for cell in &mut self.cells {
            let _ = cell.take();
        }
        id
    }

    /// Number of registered colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors have been registered
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color registered under `id`, if any
    pub fn color(&self, id: usize) -> Option<Color> {
        self.colors.get(id).copied()
    }

    /// Nearest registered color to `color`, skipping `exclude`
    ///
    /// Returns the winning id and its color, or `None` when the index is
    /// empty or every candidate is excluded. Query channels outside
    /// `[0, 255]` are clamped for cell selection only; the distance
    /// comparison sees the raw values.
    pub fn find(&self, color: Color, exclude: Option<usize>) -> Option<(usize, Color)> {
        let cell_id = owning_cell(color);
        let candidates = self
            .cells
            .get(cell_id)?
            .get_or_init(|| self.capture_candidates(cell_id));

        let mut best: Option<(usize, Color, i64)> = None;
        for &id in candidates {
            if exclude == Some(id) {
                continue;
            }
            let Some(candidate) = self.colors.get(id).copied() else {
                continue;
            };
            let distance = color.distance_squared(candidate);
            if best.is_none_or(|(_, _, nearest)| distance < nearest) {
                best = Some((id, candidate, distance));
                if distance == 0 {
                    break;
                }
            }
        }
        best.map(|(id, winner, _)| (id, winner))
    }

    /// Collect every color id within the cell's capture radius of its center
    ///
    /// The radius reaches from the center to its nearest registered color,
    /// extended by [`CAPTURE_SLACK`], so the list is a superset of the colors
    /// that can win a query near the center.
    fn capture_candidates(&self, cell_id: usize) -> Vec<usize> {
        let center = cell_center(cell_id);
        let Some(nearest_sq) = self
            .colors
            .iter()
            .map(|&color| center.distance_squared(color))
            .min()
        else {
            return Vec::new();
        };

        let reach = (nearest_sq as f64).sqrt() + CAPTURE_SLACK;
        let capture_sq = reach.mul_add(reach, 1.0);

        self.colors
            .iter()
            .enumerate()
            .filter(|&(_, &color)| (center.distance_squared(color) as f64) <= capture_sq)
            .map(|(id, _)| id)
            .collect()
    }
}

/// Cell owning a query color, with out-of-range channels clamped inward
fn owning_cell(color: Color) -> usize {
    let r = (color.r.clamp(0, 255) as usize) >> CHANNEL_SHIFT;
    let g = (color.g.clamp(0, 255) as usize) >> CHANNEL_SHIFT;
    let b = (color.b.clamp(0, 255) as usize) >> CHANNEL_SHIFT;
    (r << (2 * INDEX_CELL_BITS)) | (g << INDEX_CELL_BITS) | b
}

/// Geometric center of a cell's RGB sub-cube
const fn cell_center(cell_id: usize) -> Color {
    let half = CELL_SPAN / 2;
    let r = (cell_id >> (2 * INDEX_CELL_BITS)) as i32;
    let g = ((cell_id >> INDEX_CELL_BITS) & AXIS_MASK) as i32;
    let b = (cell_id & AXIS_MASK) as i32;
    Color::new(r * CELL_SPAN + half, g * CELL_SPAN + half, b * CELL_SPAN + half)
}
