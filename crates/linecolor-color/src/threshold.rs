//! Binary thresholding
//!
//! Converts a grayscale or RGB image into a 1 bpp foreground mask. A pixel
//! is foreground (1) when its luminance is strictly greater than the
//! threshold; the light paper between ink lines therefore becomes the
//! regions that get painted.

use crate::{ColorError, ColorResult};
use linecolor_core::{Pix, PixelDepth, color};

/// Check that a user-supplied threshold fits the 8-bit luminance range.
pub fn validate_threshold(threshold: i64) -> ColorResult<u8> {
    u8::try_from(threshold).map_err(|_| ColorError::InvalidThreshold(threshold))
}

/// Convert an image to binary using a fixed threshold
///
/// Pixels with luminance > threshold become foreground (1), all others
/// background (0). 32 bpp input is reduced to luminance first. A 1 bpp
/// input is already binary and is returned unchanged.
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    let luma: fn(u32) -> u8 = match pix.depth() {
        PixelDepth::Bit1 => return Ok(pix.clone()),
        PixelDepth::Bit8 => |v| v as u8,
        PixelDepth::Bit32 => |v| {
            let (r, g, b) = color::extract_rgb(v);
            color::luminance(r, g, b)
        },
    };

    let w = pix.width();
    let h = pix.height();
    let mut out = Pix::new(w, h, PixelDepth::Bit1)?.into_mut();
    let mut foreground = 0u64;

    for y in 0..h {
        for x in 0..w {
            if luma(pix.get_pixel_unchecked(x, y)) > threshold {
                out.set_pixel_unchecked(x, y, 1);
                foreground += 1;
            }
        }
    }

    log::debug!(
        "threshold {}: {} of {} pixels foreground",
        threshold,
        foreground,
        w as u64 * h as u64
    );
    Ok(out.into())
}

/// Expand a 1 bpp mask to 8 bpp (1 -> 255, 0 -> 0).
pub fn binary_to_gray(pix: &Pix) -> ColorResult<Pix> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(ColorError::UnsupportedDepth {
            expected: "1-bit",
            actual: pix.depth().bits(),
        });
    }
    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.into_mut();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get_pixel_unchecked(x, y) != 0 {
                out.set_pixel_unchecked(x, y, 255);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_threshold() {
        assert_eq!(validate_threshold(0).unwrap(), 0);
        assert_eq!(validate_threshold(255).unwrap(), 255);
        assert!(matches!(
            validate_threshold(256),
            Err(ColorError::InvalidThreshold(256))
        ));
        assert!(validate_threshold(-1).is_err());
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut pm = Pix::new(3, 1, PixelDepth::Bit8).unwrap().into_mut();
        pm.set_pixel(0, 0, 159).unwrap();
        pm.set_pixel(1, 0, 160).unwrap();
        pm.set_pixel(2, 0, 161).unwrap();
        let pix: Pix = pm.into();

        let bin = threshold_to_binary(&pix, 160).unwrap();
        assert_eq!(bin.depth(), PixelDepth::Bit1);
        assert_eq!(bin.get_pixel(0, 0), Some(0));
        assert_eq!(bin.get_pixel(1, 0), Some(0));
        assert_eq!(bin.get_pixel(2, 0), Some(1));
    }

    #[test]
    fn test_threshold_rgb_uses_luminance() {
        let mut pm = Pix::new(2, 1, PixelDepth::Bit32).unwrap().into_mut();
        // Pure green has luminance 150, pure white 255.
        pm.set_rgb(0, 0, 0, 255, 0).unwrap();
        pm.set_rgb(1, 0, 255, 255, 255).unwrap();
        let pix: Pix = pm.into();

        let bin = threshold_to_binary(&pix, 160).unwrap();
        assert_eq!(bin.get_pixel(0, 0), Some(0));
        assert_eq!(bin.get_pixel(1, 0), Some(1));
    }

    #[test]
    fn test_threshold_idempotent() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit8).unwrap().into_mut();
        for i in 0..4 {
            pm.set_pixel(i, i, 200).unwrap();
        }
        let pix: Pix = pm.into();

        let once = threshold_to_binary(&pix, 160).unwrap();
        let twice = threshold_to_binary(&once, 160).unwrap();
        assert!(once.equals(&twice));

        let via_gray = threshold_to_binary(&binary_to_gray(&once).unwrap(), 160).unwrap();
        assert!(once.equals(&via_gray));
    }

    #[test]
    fn test_binary_to_gray_rejects_gray() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(binary_to_gray(&pix).is_err());
    }
}
