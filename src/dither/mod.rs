//! Error-diffusion quantization of a target image
//!
//! This module contains dithering-related functionality including:
//! - The dense tile-id grid emitted by a quantization pass
//! - Floyd–Steinberg error diffusion driven by nearest-color queries

/// Floyd–Steinberg error diffusion
pub mod floyd_steinberg;
/// Dense tile-id grid
pub mod grid;

pub use floyd_steinberg::{dither, dither_with_progress};
pub use grid::IndexGrid;
