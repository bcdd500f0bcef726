//! Fill palette
//!
//! A [`Palette`] is the fixed, ordered collection of candidate colors a
//! region may be painted with. It is built once per run and then only read,
//! so it can be shared across worker threads by reference or `Arc`.

use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// Ordered, non-empty list of RGB colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<(u8, u8, u8)>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<(u8, u8, u8)>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build a palette from every pixel of an image.
    ///
    /// Pixels are read column by column (x outer, y inner), so a palette
    /// strip of width 1 keeps its top-to-bottom order. 8 bpp pixels become
    /// gray colors; 32 bpp pixels keep their RGB components.
    pub fn from_pix(pix: &Pix) -> Result<Self> {
        if pix.depth() == PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(1));
        }
        let mut colors = Vec::with_capacity(pix.width() as usize * pix.height() as usize);
        for x in 0..pix.width() {
            for y in 0..pix.height() {
                let color = match pix.depth() {
                    PixelDepth::Bit32 => pix.get_rgb(x, y),
                    _ => pix.get_pixel(x, y).map(|v| (v as u8, v as u8, v as u8)),
                };
                if let Some(c) = color {
                    colors.push(c);
                }
            }
        }
        Self::new(colors)
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(u8, u8, u8)> {
        self.colors.get(index).copied()
    }

    /// All colors in order.
    #[inline]
    pub fn colors(&self) -> &[(u8, u8, u8)] {
        &self.colors
    }

    /// Whether `rgb` is one of the palette colors.
    pub fn contains(&self, rgb: (u8, u8, u8)) -> bool {
        self.colors.contains(&rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(Vec::new()), Err(Error::EmptyPalette)));
        let one = Palette::new(vec![(1, 2, 3)]).unwrap();
        assert_eq!(one.len(), 1);
        assert!(!one.is_empty());
    }

    #[test]
    fn test_from_pix_column_major() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(0, 0, 1, 0, 0).unwrap();
        pm.set_rgb(1, 0, 2, 0, 0).unwrap();
        pm.set_rgb(0, 1, 3, 0, 0).unwrap();
        pm.set_rgb(1, 1, 4, 0, 0).unwrap();
        let palette = Palette::from_pix(&pm.into()).unwrap();

        let reds: Vec<u8> = palette.colors().iter().map(|c| c.0).collect();
        assert_eq!(reds, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_from_gray_pix() {
        let pix = Pix::new(1, 1, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(0, 0, 77).unwrap();
        let palette = Palette::from_pix(&pm.into()).unwrap();
        assert_eq!(palette.get(0), Some((77, 77, 77)));
        assert!(palette.contains((77, 77, 77)));
    }

    #[test]
    fn test_binary_pix_rejected() {
        let pix = Pix::new(3, 3, PixelDepth::Bit1).unwrap();
        assert!(Palette::from_pix(&pix).is_err());
    }
}
