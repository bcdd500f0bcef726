//! Edge blending
//!
//! Each pixel that touches a differently colored 4-neighbor is pulled a
//! third of the way toward the mean of those neighbors:
//!
//! ```text
//! out = round((2 * own + mean(differing neighbors)) / 3)
//! ```
//!
//! All reads come from the input image and all writes go to a fresh one,
//! so the result does not depend on scan order.

use crate::{FilterError, FilterResult};
use linecolor_core::{Pix, PixelDepth, color};

/// Blend region seams in a 32 bpp image.
///
/// Pixels whose 4-neighbors all share their color are copied unchanged.
/// Blended pixels are written opaque; uncolored pixels keep their alpha.
pub fn blend_edges(pix: &Pix) -> FilterResult<Pix> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(FilterError::UnsupportedDepth {
            expected: "32-bit",
            actual: pix.depth().bits(),
        });
    }

    let w = pix.width();
    let h = pix.height();
    let mut out = pix.create_template().into_mut();
    let mut blended = 0u64;

    for y in 0..h {
        for x in 0..w {
            let own = pix.get_pixel_unchecked(x, y);

            let mut sum = [0u32; 3];
            let mut n = 0u32;
            let mut add = |nx: u32, ny: u32| {
                let v = pix.get_pixel_unchecked(nx, ny);
                if v != own {
                    let (r, g, b) = color::extract_rgb(v);
                    sum[0] += r as u32;
                    sum[1] += g as u32;
                    sum[2] += b as u32;
                    n += 1;
                }
            };
            if x > 0 {
                add(x - 1, y);
            }
            if x + 1 < w {
                add(x + 1, y);
            }
            if y > 0 {
                add(x, y - 1);
            }
            if y + 1 < h {
                add(x, y + 1);
            }

            if n == 0 {
                out.set_pixel_unchecked(x, y, own);
                continue;
            }

            let (r, g, b, a) = color::extract_rgba(own);
            // round((2 * own + sum / n) / 3) == round((2n * own + sum) / 3n)
            let mix = |c: u8, s: u32| {
                let num = 2 * n * c as u32 + s;
                let den = 3 * n;
                ((num + den / 2) / den).min(255) as u8
            };
            let alpha = if color::is_colored(own) { 255 } else { a };
            out.set_pixel_unchecked(
                x,
                y,
                color::compose_rgba(mix(r, sum[0]), mix(g, sum[1]), mix(b, sum[2]), alpha),
            );
            blended += 1;
        }
    }

    log::debug!("blended {} seam pixels", blended);
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rgb_pix(w: u32, h: u32, f: impl Fn(u32, u32) -> (u8, u8, u8)) -> Pix {
        let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().into_mut();
        for y in 0..h {
            for x in 0..w {
                let (r, g, b) = f(x, y);
                pm.set_rgb(x, y, r, g, b).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_uniform_is_unchanged() {
        let pix = rgb_pix(4, 3, |_, _| (12, 34, 56));
        let out = blend_edges(&pix).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn test_two_column_seam() {
        // Left column black, right column white.
        let pix = rgb_pix(2, 1, |x, _| if x == 0 { (0, 0, 0) } else { (255, 255, 255) });
        let out = blend_edges(&pix).unwrap();
        // (2*0 + 255) / 3 = 85; (2*255 + 0) / 3 = 170
        assert_eq!(out.get_rgb(0, 0), Some((85, 85, 85)));
        assert_eq!(out.get_rgb(1, 0), Some((170, 170, 170)));
    }

    #[test]
    fn test_reads_snapshot_not_output() {
        // Middle pixel sees the original left neighbor, not its blended value.
        let pix = rgb_pix(3, 1, |x, _| match x {
            0 => (0, 0, 0),
            _ => (90, 90, 90),
        });
        let out = blend_edges(&pix).unwrap();
        assert_eq!(out.get_rgb(1, 0), Some((60, 60, 60)));
        assert_eq!(out.get_rgb(2, 0), Some((90, 90, 90)));
    }

    #[test]
    fn test_mean_of_several_neighbors() {
        // Centre red, left and right blue, top and bottom green.
        let pix = rgb_pix(3, 3, |x, y| match (x, y) {
            (1, 1) => (255, 0, 0),
            (_, 1) => (0, 0, 255),
            _ => (0, 255, 0),
        });
        let out = blend_edges(&pix).unwrap();
        // mean = (0, 127.5, 127.5); (2*own + mean) / 3 rounded
        assert_eq!(out.get_rgb(1, 1), Some((170, 43, 43)));
    }

    #[test]
    fn test_rejects_gray() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(blend_edges(&pix).is_err());
    }

    proptest! {
        #[test]
        fn prop_channels_between_own_and_neighbors(
            colors in proptest::collection::vec(any::<(u8, u8, u8)>(), 16)
        ) {
            let pix = rgb_pix(4, 4, |x, y| colors[(y * 4 + x) as usize]);
            let out = blend_edges(&pix).unwrap();
            for y in 0..4 {
                for x in 0..4 {
                    let (r, _, _) = out.get_rgb(x, y).unwrap();
                    let mut lo = pix.get_rgb(x, y).unwrap().0;
                    let mut hi = lo;
                    let neighbors = [
                        (x.wrapping_sub(1), y),
                        (x + 1, y),
                        (x, y.wrapping_sub(1)),
                        (x, y + 1),
                    ];
                    for (nx, ny) in neighbors {
                        if let Some((nr, _, _)) = pix.get_rgb(nx, ny) {
                            lo = lo.min(nr);
                            hi = hi.max(nr);
                        }
                    }
                    prop_assert!(lo <= r && r <= hi);
                    prop_assert_eq!(color::alpha(out.get_pixel(x, y).unwrap()), 255);
                }
            }
        }
    }
}
