//! Nearest-color line filling
//!
//! After region filling the ink lines (and any other background pixels)
//! are still uncolored. Each one takes the color of the nearest colored
//! pixel found by a ring search: at radius `z` the eight compass points of
//! the `(2z+1) x (2z+1)` box around the pixel are probed in random order,
//! and the radius grows until one of them is colored.
//!
//! The canvas is filled in place in row-major order, so a pixel filled
//! earlier in the pass is a valid source for later ones. Pixels whose probes
//! find nothing are deferred and retried once their surroundings have been
//! filled; the pass only fails when a full retry round fills nothing.

use crate::{ColorError, ColorResult};
use linecolor_core::{PixMut, PixelDepth, color};
use rand::Rng;
use rand::seq::SliceRandom;

/// Summary of a [`fill_lines`] pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFillStats {
    /// Number of pixels that were uncolored and got filled
    pub filled: u64,
    /// Largest ring radius any pixel needed
    pub max_radius: u32,
}

/// Offsets of the eight ring probes at unit radius.
const RING: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Radius beyond which no ring can reach a new pixel.
fn max_search_radius(w: u32, h: u32) -> u32 {
    let (w, h) = (w as f64, h as f64);
    (w * w + h * h).sqrt().ceil() as u32
}

/// Find the color of the nearest colored pixel around `(x, y)`.
///
/// Returns the color and the radius at which it was found.
fn ring_search<R: Rng + ?Sized>(
    canvas: &PixMut,
    x: u32,
    y: u32,
    limit: u32,
    rng: &mut R,
) -> ColorResult<(u32, u32)> {
    let w = canvas.width() as i64;
    let h = canvas.height() as i64;
    let mut probes = RING;

    for z in 1..=limit {
        probes.shuffle(rng);
        let mut any_inside = false;
        for &(dx, dy) in &probes {
            let px = x as i64 + dx * z as i64;
            let py = y as i64 + dy * z as i64;
            if px < 0 || py < 0 || px >= w || py >= h {
                continue;
            }
            any_inside = true;
            let val = canvas.get_pixel_unchecked(px as u32, py as u32);
            if color::is_colored(val) {
                return Ok((val, z));
            }
        }
        if !any_inside {
            return Err(ColorError::SearchExhausted { x, y, radius: z });
        }
    }

    Err(ColorError::SearchExhausted {
        x,
        y,
        radius: limit,
    })
}

/// Fill every uncolored pixel of a 32 bpp canvas from its nearest colored
/// neighbor.
///
/// # Errors
///
/// - [`ColorError::UnsupportedDepth`] if the canvas is not 32 bpp.
/// - [`ColorError::SearchExhausted`] if some pixel can never be reached from
///   a colored pixel, e.g. when the canvas holds no colors at all. The error
///   names the first such pixel in row-major order. The canvas is left
///   partially filled in that case.
pub fn fill_lines<R: Rng + ?Sized>(canvas: &mut PixMut, rng: &mut R) -> ColorResult<LineFillStats> {
    if canvas.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32-bit",
            actual: canvas.depth().bits(),
        });
    }

    let w = canvas.width();
    let h = canvas.height();
    let limit = max_search_radius(w, h);
    let mut stats = LineFillStats::default();

    let mut pending = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if !color::is_colored(canvas.get_pixel_unchecked(x, y)) {
                pending.push((x, y));
            }
        }
    }

    let mut rounds = 0u32;
    while !pending.is_empty() {
        let mut deferred = Vec::new();
        let mut first_err = None;
        for &(x, y) in &pending {
            match ring_search(canvas, x, y, limit, rng) {
                Ok((val, radius)) => {
                    canvas.set_pixel_unchecked(x, y, val);
                    stats.filled += 1;
                    stats.max_radius = stats.max_radius.max(radius);
                }
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                    deferred.push((x, y));
                }
            }
        }
        rounds += 1;

        let stalled = deferred.len() == pending.len();
        match first_err {
            Some(e) if stalled => return Err(e),
            _ => pending = deferred,
        }
    }

    log::debug!(
        "line fill: {} pixels, max radius {}, {} rounds",
        stats.filled,
        stats.max_radius,
        rounds
    );
    Ok(stats)
}
