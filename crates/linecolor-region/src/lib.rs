//! linecolor-region - Region discovery and filling
//!
//! Partitions the foreground of a binary raster into maximal 4-connected
//! regions and paints each region with one color drawn from a palette.
//!
//! ```
//! use linecolor_core::{Palette, Pix, PixelDepth, color};
//! use linecolor_region::fill_regions;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut pm = Pix::new(4, 1, PixelDepth::Bit1).unwrap().into_mut();
//! pm.set_pixel(0, 0, 1).unwrap();
//! pm.set_pixel(1, 0, 1).unwrap();
//! pm.set_pixel(3, 0, 1).unwrap();
//! let binary: Pix = pm.into();
//!
//! let palette = Palette::new(vec![(200, 30, 30)]).unwrap();
//! let fill = fill_regions(&binary, &palette, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(fill.region_count, 2);
//! assert_eq!(fill.pix.get_pixel(2, 0), Some(color::UNCOLORED));
//! ```

mod error;
pub mod regionfill;

pub use error::{RegionError, RegionResult};
pub use regionfill::{RegionFill, count_regions, fill_regions};
