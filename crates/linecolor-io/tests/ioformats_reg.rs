//! Image and palette I/O regression test
//!
//! Round-trips each lossless format through memory and through files in
//! `tests/regout`, then checks that palettes load from both images and
//! text in the expected order.

use linecolor_core::{Palette, Pix, PixelDepth, color};
use linecolor_io::{
    ImageFormat, format_for_path, read_image, read_image_mem, read_palette, write_image,
    write_image_mem,
};
use linecolor_test::{RegParams, regout_dir};
use std::fs;

fn make_gray() -> Pix {
    let mut pm = Pix::new(17, 9, PixelDepth::Bit8).unwrap().into_mut();
    for y in 0..9 {
        for x in 0..17 {
            pm.set_pixel(x, y, (x * 13 + y * 7) % 256).unwrap();
        }
    }
    pm.into()
}

fn make_rgb() -> Pix {
    let mut pm = Pix::new(11, 6, PixelDepth::Bit32).unwrap().into_mut();
    for y in 0..6 {
        for x in 0..11 {
            pm.set_rgb(x, y, (x * 20) as u8, (y * 40) as u8, 77).unwrap();
        }
    }
    pm.into()
}

fn make_binary() -> Pix {
    let mut pm = Pix::new(35, 4, PixelDepth::Bit1).unwrap().into_mut();
    for x in (0..35).step_by(3) {
        pm.set_pixel(x, x % 4, 1).unwrap();
    }
    pm.into()
}

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    // Part 1: lossless memory roundtrips
    for (format, pix) in [
        (ImageFormat::Png, make_gray()),
        (ImageFormat::Png, make_rgb()),
        (ImageFormat::Pnm, make_gray()),
        (ImageFormat::Pnm, make_rgb()),
        (ImageFormat::Pnm, make_binary()),
    ] {
        let data = write_image_mem(&pix, format).unwrap();
        let back = read_image_mem(&data).unwrap();
        rp.compare_pix(&pix, &back);
    }

    // Part 2: file roundtrip, format chosen from the extension
    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");
    let path = format!("{}/ioformats.rgb.ppm", outdir);
    let rgb = make_rgb();
    write_image(&rgb, &path, format_for_path(&path)).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_pix(&rgb, &back);

    // Part 3: JPEG is lossy but keeps geometry and depth
    let data = write_image_mem(&rgb, ImageFormat::Jpeg).unwrap();
    let back = read_image_mem(&data).unwrap();
    rp.compare_values(rgb.width() as f64, back.width() as f64, 0.0);
    rp.compare_values(rgb.height() as f64, back.height() as f64, 0.0);
    rp.compare_values(32.0, back.depth().bits() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn palette_sources_reg() {
    let mut rp = RegParams::new("palette_sources");
    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    // A 2x2 palette image reads column by column.
    let mut pm = Pix::new(2, 2, PixelDepth::Bit32).unwrap().into_mut();
    pm.set_rgb(0, 0, 1, 0, 0).unwrap();
    pm.set_rgb(0, 1, 2, 0, 0).unwrap();
    pm.set_rgb(1, 0, 3, 0, 0).unwrap();
    pm.set_rgb(1, 1, 4, 0, 0).unwrap();
    let palette_pix: Pix = pm.into();
    let img_path = format!("{}/palette_sources.png", outdir);
    write_image(&palette_pix, &img_path, ImageFormat::Png).unwrap();

    let palette = read_palette(&img_path).unwrap();
    let reds: Vec<u8> = palette.colors().iter().map(|c| c.0).collect();
    rp.compare_values(4.0, palette.len() as f64, 0.0);
    rp.compare_values(1.0, if reds == [1, 2, 3, 4] { 1.0 } else { 0.0 }, 0.0);

    // Text palettes keep file order.
    let txt_path = format!("{}/palette_sources.txt", outdir);
    fs::write(&txt_path, "# two colors\n#102030\n200,100,0\n").unwrap();
    let palette = read_palette(&txt_path).unwrap();
    let expected = Palette::new(vec![(16, 32, 48), (200, 100, 0)]).unwrap();
    rp.compare_values(1.0, if palette == expected { 1.0 } else { 0.0 }, 0.0);

    // Missing files surface an I/O error rather than an empty palette.
    rp.compare_values(
        1.0,
        if read_palette(format!("{}/no_such_palette.png", outdir)).is_err() {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // Colors written by the fillers are always opaque.
    let (_, _, _, a) = color::extract_rgba(palette_pix.get_pixel(1, 1).unwrap());
    rp.compare_values(255.0, a as f64, 0.0);

    assert!(rp.cleanup());
}
