//! Single-image colorization
//!
//! Runs the stages in fixed order:
//!
//! 1. threshold to a binary foreground mask
//! 2. paint each 4-connected foreground region with one palette color
//! 3. (optional) fill remaining pixels from their nearest colored neighbor
//! 4. (optional) blend region seams

use crate::PipelineResult;
use linecolor_color::{LineFillStats, fill_lines, threshold_to_binary, validate_threshold};
use linecolor_core::{Palette, Pix};
use linecolor_filter::blend_edges;
use linecolor_region::fill_regions;
use rand::Rng;

/// Luminance threshold used when none is given.
pub const DEFAULT_THRESHOLD: u8 = 160;

/// Per-image pipeline options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Pixels with luminance above this become foreground
    pub threshold: u8,
    /// Run the nearest-color line fill
    pub fill_lines: bool,
    /// Run the seam blend
    pub blend: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fill_lines: true,
            blend: false,
        }
    }
}

impl PipelineOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold from an unchecked integer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PipelineError::Color`] wrapping `InvalidThreshold` if the
    /// value is outside `0..=255`.
    pub fn with_threshold(mut self, threshold: i64) -> PipelineResult<Self> {
        self.threshold = validate_threshold(threshold)?;
        Ok(self)
    }

    /// Enable or disable the line fill
    pub fn with_fill_lines(mut self, fill_lines: bool) -> Self {
        self.fill_lines = fill_lines;
        self
    }

    /// Enable or disable the seam blend
    pub fn with_blend(mut self, blend: bool) -> Self {
        self.blend = blend;
        self
    }
}

/// Output of [`colorize`]
#[derive(Debug, Clone)]
pub struct Colorized {
    /// 32 bpp result
    pub pix: Pix,
    /// Number of painted regions
    pub region_count: u32,
    /// Line fill statistics, if that stage ran
    pub line_fill: Option<LineFillStats>,
}

/// Colorize one image.
///
/// All randomness comes from `rng`, so a seeded generator makes the
/// result reproducible.
pub fn colorize<R: Rng + ?Sized>(
    pix: &Pix,
    palette: &Palette,
    options: &PipelineOptions,
    rng: &mut R,
) -> PipelineResult<Colorized> {
    let binary = threshold_to_binary(pix, options.threshold)?;
    let mut fill = fill_regions(&binary, palette, rng)?;

    let line_fill = if options.fill_lines {
        Some(fill_lines(&mut fill.pix, rng)?)
    } else {
        None
    };

    let mut out: Pix = fill.pix.into();
    if options.blend {
        out = blend_edges(&out)?;
    }

    Ok(Colorized {
        pix: out,
        region_count: fill.region_count,
        line_fill,
    })
}
