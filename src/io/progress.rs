//! Stage-by-stage progress reporting for the mosaic pipeline

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:<16} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Sequential progress bars for the pipeline stages
///
/// The pipeline runs one stage at a time (loading, dithering), so a single
/// bar is recycled: starting a stage finishes whatever bar came before it.
pub struct ProgressManager {
    current: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active stage
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Begin a stage with a known amount of work, closing any previous stage
    pub fn start_stage(&mut self, message: &'static str, len: u64) {
        self.finish_stage();
        let bar = ProgressBar::new(len);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(message);
        self.current = Some(bar);
    }

    /// Advance the active stage by one unit
    pub fn inc(&self) {
        if let Some(bar) = &self.current {
            bar.inc(1);
        }
    }

    /// Complete and clear the active stage, if any
    pub fn finish_stage(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
    }
}
