//! Palette fill of 4-connected foreground regions
//!
//! Pixels are visited in row-major order. The first unvisited foreground
//! pixel of each region seeds a depth-first traversal on an explicit
//! stack; once the whole region is collected a single palette color is
//! drawn for it and written to every member.

use crate::error::{RegionError, RegionResult};
use linecolor_core::{Palette, Pix, PixMut, PixelDepth, color};
use rand::Rng;

/// Result of [`fill_regions`]
#[derive(Debug)]
pub struct RegionFill {
    /// 32 bpp canvas; background pixels hold [`color::UNCOLORED`]
    pub pix: PixMut,
    /// Number of 4-connected foreground regions
    pub region_count: u32,
    /// Number of pixels painted (the foreground area)
    pub pixel_count: u64,
}

fn check_binary(pix: &Pix) -> RegionResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bit",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Walks every 4-connected foreground region of a binary image once.
///
/// `visit` receives the region's pixels; the slice is reused between calls.
fn for_each_region<F>(binary: &Pix, mut visit: F)
where
    F: FnMut(&[(u32, u32)]),
{
    let w = binary.width();
    let h = binary.height();
    let mut visited = vec![false; w as usize * h as usize];
    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut region: Vec<(u32, u32)> = Vec::new();

    let idx = |x: u32, y: u32| y as usize * w as usize + x as usize;
    let is_fg = |x: u32, y: u32| binary.get_pixel_unchecked(x, y) != 0;

    for y in 0..h {
        for x in 0..w {
            if visited[idx(x, y)] || !is_fg(x, y) {
                continue;
            }

            region.clear();
            visited[idx(x, y)] = true;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                region.push((cx, cy));

                let mut push = |nx: u32, ny: u32| {
                    let i = idx(nx, ny);
                    if !visited[i] && is_fg(nx, ny) {
                        visited[i] = true;
                        stack.push((nx, ny));
                    }
                };
                if cx > 0 {
                    push(cx - 1, cy);
                }
                if cx + 1 < w {
                    push(cx + 1, cy);
                }
                if cy > 0 {
                    push(cx, cy - 1);
                }
                if cy + 1 < h {
                    push(cx, cy + 1);
                }
            }

            visit(&region);
        }
    }
}

/// Paint every foreground region of `binary` with a random palette color.
///
/// Each region gets exactly one color, drawn uniformly from `palette`
/// with `rng`. Background pixels are left as [`color::UNCOLORED`].
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] unless `binary` is 1 bpp.
pub fn fill_regions<R: Rng + ?Sized>(
    binary: &Pix,
    palette: &Palette,
    rng: &mut R,
) -> RegionResult<RegionFill> {
    check_binary(binary)?;

    let mut canvas = Pix::new(binary.width(), binary.height(), PixelDepth::Bit32)?.into_mut();
    let colors = palette.colors();
    let mut region_count = 0u32;
    let mut pixel_count = 0u64;

    for_each_region(binary, |region| {
        let (r, g, b) = colors[rng.random_range(0..colors.len())];
        let val = color::compose_rgb(r, g, b);
        for &(x, y) in region {
            canvas.set_pixel_unchecked(x, y, val);
        }
        region_count += 1;
        pixel_count += region.len() as u64;
    });

    log::debug!(
        "filled {} regions ({} pixels) on {}x{}",
        region_count,
        pixel_count,
        binary.width(),
        binary.height()
    );

    Ok(RegionFill {
        pix: canvas,
        region_count,
        pixel_count,
    })
}

/// Count the 4-connected foreground regions of a binary image.
pub fn count_regions(binary: &Pix) -> RegionResult<u32> {
    check_binary(binary)?;
    let mut count = 0u32;
    for_each_region(binary, |_| count += 1);
    Ok(count)
}
