//! Command-line interface for the mosaic pipeline

use crate::dither;
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PROBABILITY, DEFAULT_SEED, DEFAULT_THRESHOLD,
    DEFAULT_TILE_SIZE, PALETTE_PREVIEW_SUFFIX, QUANTIZED_PREVIEW_SUFFIX, REDUCED_PREVIEW_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::loader;
use crate::io::progress::ProgressManager;
use crate::palette::reduce;
use crate::render::{self, preview};
use clap::Parser;
use image::RgbImage;
use image::imageops::{self, FilterType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capmosaic")]
#[command(
    author,
    version,
    about = "Render photomosaics from bottle cap image libraries"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Directory containing tile source images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Target photograph to mosaic
    #[arg(value_name = "IMAGE")]
    pub input: PathBuf,

    /// Output path for the rendered mosaic
    #[arg(short, long, default_value = "mosaic.png")]
    pub output: PathBuf,

    /// Edge length of the square tile thumbnails in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Mosaic width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: u32,

    /// Mosaic height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: u32,

    /// Color distance below which near-duplicate tiles are dropped
    #[arg(short = 'd', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Probability of accepting each tile file
    #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Random seed for reproducible tile sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export palette and quantization previews alongside the mosaic
    #[arg(long)]
    pub previews: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject out-of-range parameters before any catalog work begins
    ///
    /// # Errors
    ///
    /// Returns an error for a zero tile size or grid dimension, a sampling
    /// probability outside `[0, 1]`, or a negative or non-finite reduction
    /// threshold.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &self.tile_size,
                &"must be at least 1 pixel",
            ));
        }
        if self.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"must be at least 1 tile",
            ));
        }
        if self.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be at least 1 tile",
            ));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(invalid_parameter(
                "probability",
                &self.probability,
                &"must lie in [0, 1]",
            ));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must be a non-negative finite distance",
            ));
        }
        Ok(())
    }
}

/// Runs the load, reduce, dither, compose pipeline with progress tracking
pub struct MosaicProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate the mosaic according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, catalog construction,
    /// dithering, or image export fails, or when the tile directory yields
    /// no usable tiles.
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        let paths = loader::collect_tile_paths(&self.cli.tiles)?;
        if let Some(pm) = &mut self.progress {
            pm.start_stage("Loading tiles", paths.len() as u64);
        }
        let catalog = loader::load_catalog(
            &paths,
            self.cli.tile_size,
            self.cli.tile_size,
            self.cli.probability,
            &mut rng,
            self.cli.quiet,
            || {
                if let Some(pm) = &self.progress {
                    pm.inc();
                }
            },
        )?;
        if let Some(pm) = &mut self.progress {
            pm.finish_stage();
        }
        if catalog.is_empty() {
            return Err(MosaicError::EmptyCatalog {
                operation: "build a mosaic",
            });
        }
        self.report(&format!("Loaded {} tiles", catalog.len()));

        if self.cli.previews {
            self.save_preview(&preview::palette_image(&catalog)?, PALETTE_PREVIEW_SUFFIX)?;
        }

        let reduced = reduce(&catalog, self.cli.threshold)?;
        self.report(&format!("Reduced palette to {} tiles", reduced.len()));
        if self.cli.previews {
            self.save_preview(&preview::palette_image(&reduced)?, REDUCED_PREVIEW_SUFFIX)?;
        }

        let target = image::open(&self.cli.input)
            .map_err(|e| MosaicError::ImageLoad {
                path: self.cli.input.clone(),
                source: e,
            })?
            .to_rgb8();
        let resized = imageops::resize(
            &target,
            self.cli.width,
            self.cli.height,
            FilterType::Triangle,
        );

        if let Some(pm) = &mut self.progress {
            pm.start_stage("Dithering", u64::from(self.cli.height));
        }
        let grid = dither::dither_with_progress(&resized, &reduced, |_| {
            if let Some(pm) = &self.progress {
                pm.inc();
            }
        })?;
        if let Some(pm) = &mut self.progress {
            pm.finish_stage();
        }

        if self.cli.previews {
            self.save_preview(
                &preview::quantized_image(&grid, &reduced)?,
                QUANTIZED_PREVIEW_SUFFIX,
            )?;
        }

        let mosaic = render::compose(&grid, &reduced)?;
        mosaic.save(&self.cli.output).map_err(|e| MosaicError::ImageExport {
            path: self.cli.output.clone(),
            source: e,
        })?;
        self.report(&format!("Wrote {}", self.cli.output.display()));

        Ok(())
    }

    // Summary lines are user feedback, not diagnostics
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }

    fn save_preview(&self, image: &RgbImage, suffix: &str) -> Result<()> {
        let path = self.preview_path(suffix);
        image.save(&path).map_err(|e| MosaicError::ImageExport {
            path: path.clone(),
            source: e,
        })?;
        self.report(&format!("Wrote {}", path.display()));
        Ok(())
    }

    fn preview_path(&self, suffix: &str) -> PathBuf {
        let stem = self.cli.output.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.png", stem.to_string_lossy());
        self.cli
            .output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
