//! Region fill regression test
//!
//! Builds small binary rasters by hand and checks region counts, per-region
//! uniformity and background preservation.

use linecolor_core::{ImageFormat, Palette, Pix, PixelDepth, color};
use linecolor_region::{count_regions, fill_regions};
use linecolor_test::RegParams;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn palette() -> Palette {
    Palette::new(vec![
        (230, 25, 75),
        (60, 180, 75),
        (255, 225, 25),
        (0, 130, 200),
        (245, 130, 48),
        (145, 30, 180),
    ])
    .unwrap()
}

#[test]
fn regionfill_reg() {
    let mut rp = RegParams::new("regionfill");
    let pal = palette();

    // Part 1: an empty raster has no regions and paints nothing
    let empty = Pix::new(5, 5, PixelDepth::Bit1).unwrap();
    let fill = fill_regions(&empty, &pal, &mut StdRng::seed_from_u64(1)).unwrap();
    rp.compare_values(0.0, fill.region_count as f64, 0.0);
    rp.compare_values(0.0, fill.pixel_count as f64, 0.0);
    let canvas: Pix = fill.pix.into();
    rp.compare_pix(&Pix::new(5, 5, PixelDepth::Bit32).unwrap(), &canvas);

    // Part 2: a single centre pixel is one region of one pixel
    let mut pm = Pix::new(3, 3, PixelDepth::Bit1).unwrap().into_mut();
    pm.set_pixel(1, 1, 1).unwrap();
    let centre: Pix = pm.into();
    let fill = fill_regions(&centre, &pal, &mut StdRng::seed_from_u64(2)).unwrap();
    rp.compare_values(1.0, fill.region_count as f64, 0.0);
    let val = fill.pix.get_pixel(1, 1).unwrap();
    rp.compare_values(1.0, pal.contains(color::extract_rgb(val)) as u8 as f64, 0.0);
    rp.compare_values(0.0, fill.pix.get_pixel(0, 0).unwrap() as f64, 0.0);

    // Part 3: two one-pixel-wide columns split by a background column
    let mut pm = Pix::new(3, 6, PixelDepth::Bit1).unwrap().into_mut();
    for y in 0..6 {
        pm.set_pixel(0, y, 1).unwrap();
        pm.set_pixel(2, y, 1).unwrap();
    }
    let columns: Pix = pm.into();
    rp.compare_values(2.0, count_regions(&columns).unwrap() as f64, 0.0);
    for seed in 0..8 {
        let fill = fill_regions(&columns, &pal, &mut StdRng::seed_from_u64(seed)).unwrap();
        let canvas: Pix = fill.pix.into();
        let left = canvas.get_pixel(0, 0).unwrap();
        let right = canvas.get_pixel(2, 0).unwrap();
        let uniform = (0..6).all(|y| {
            canvas.get_pixel(0, y) == Some(left)
                && canvas.get_pixel(2, y) == Some(right)
                && canvas.get_pixel(1, y) == Some(color::UNCOLORED)
        });
        rp.compare_values(1.0, uniform as u8 as f64, 0.0);
        if seed == 0 {
            rp.write_pix(&canvas, ImageFormat::Png).unwrap();
        }
    }

    // Part 4: the same seed gives the same canvas
    let a = fill_regions(&columns, &pal, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = fill_regions(&columns, &pal, &mut StdRng::seed_from_u64(99)).unwrap();
    rp.compare_pix(&a.pix.into(), &b.pix.into());

    assert!(rp.cleanup());
}
