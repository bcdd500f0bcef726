//! linecolor core - raster and palette types
//!
//! This crate provides the data structures shared by every stage of the
//! line-art colorizer:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Palette`] - The ordered, non-empty set of candidate fill colors
//! - [`color`] - Helpers for packed 32-bit RGBA pixels
//!
//! # Example
//!
//! ```
//! use linecolor_core::{Pix, PixelDepth, color};
//!
//! let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
//! let mut pm = pix.try_into_mut().unwrap();
//! pm.set_rgb(1, 2, 200, 10, 30).unwrap();
//! let pix: Pix = pm.into();
//!
//! assert_eq!(pix.get_rgb(1, 2), Some((200, 10, 30)));
//! assert!(!color::is_colored(pix.get_pixel(0, 0).unwrap()));
//! ```

pub mod error;
pub mod palette;
pub mod pix;

pub use error::{Error, Result};
pub use palette::Palette;
pub use pix::{ImageFormat, Pix, PixMut, PixelDepth};

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// The colorizer uses the alpha byte as its "already colored" flag: every
/// color a stage writes carries alpha 255, and the all-zero word
/// [`UNCOLORED`] is the background label of a canvas.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Background label of a 32 bpp canvas.
    pub const UNCOLORED: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Whether a canvas pixel has been assigned a color.
    #[inline]
    pub fn is_colored(pixel: u32) -> bool {
        alpha(pixel) != 0
    }

    /// Luminance of an RGB triple, ITU-R 601 weights, rounded.
    #[inline]
    pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
        let sum = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        ((sum + 500) / 1000) as u8
    }

}
