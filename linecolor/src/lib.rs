//! linecolor - Line-art colorizer
//!
//! Turns a scanned or drawn line-art page into a flat-colored image:
//!
//! - light areas between the lines are split into 4-connected regions and
//!   each region is painted with a random color from a palette
//! - the lines themselves take the color of the nearest painted pixel
//! - optionally, seams between regions are softened
//!
//! # Example
//!
//! ```
//! use linecolor::{Palette, Pix, PixelDepth, PipelineOptions, colorize};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // White page with one dark vertical line
//! let mut pm = Pix::new(8, 4, PixelDepth::Bit8).unwrap().into_mut();
//! for y in 0..4 {
//!     for x in 0..8 {
//!         pm.set_pixel(x, y, if x == 3 { 0 } else { 255 }).unwrap();
//!     }
//! }
//! let page: Pix = pm.into();
//!
//! let palette = Palette::new(vec![(250, 200, 80), (90, 160, 220)]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let out = colorize(&page, &palette, &PipelineOptions::default(), &mut rng).unwrap();
//! assert_eq!(out.region_count, 2);
//! assert_eq!(out.pix.depth(), PixelDepth::Bit32);
//! ```

pub mod batch;
mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use linecolor_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use linecolor_color as color_ops;
pub use linecolor_filter as filter;
pub use linecolor_io as io;
pub use linecolor_region as region;

pub use batch::{
    BatchConfig, DirSink, ImageReport, ImageSummary, PixSink, colorize_batch,
    default_worker_count, list_images, run,
};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Colorized, PipelineOptions, colorize};
