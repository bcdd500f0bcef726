//! PNG image format support
//!
//! Every PNG is decoded through the `png` crate's expand + strip-16
//! transformations, so indexed, low-bit and 16-bit files all arrive as
//! 8-bit samples. Gray files become 8 bpp; anything with color becomes
//! opaque 32 bpp RGB. Alpha is dropped on read because the 32 bpp alpha
//! byte is the canvas "colored" flag, not transparency.

use crate::{IoError, IoResult};
use linecolor_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, _) = reader.output_color_type();
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let depth = if color_type == ColorType::Grayscale {
        PixelDepth::Bit8
    } else {
        PixelDepth::Bit32
    };

    let mut pix_mut = Pix::new(width, height, depth)?.into_mut();
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            let val = match color_type {
                ColorType::Grayscale => data[idx] as u32,
                ColorType::GrayscaleAlpha => color::compose_rgb(data[idx], data[idx], data[idx]),
                _ => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// 1 bpp is written as 1-bit grayscale (foreground white), 8 bpp as 8-bit
/// grayscale and 32 bpp as 8-bit RGB.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, bit_depth, bytes_per_row) = match pix.depth() {
        PixelDepth::Bit1 => (ColorType::Grayscale, BitDepth::One, width.div_ceil(8)),
        PixelDepth::Bit8 => (ColorType::Grayscale, BitDepth::Eight, width),
        PixelDepth::Bit32 => (ColorType::Rgb, BitDepth::Eight, width * 3),
    };
    let bytes_per_row = bytes_per_row as usize;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0u8; bytes_per_row * height as usize];
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let val = pix.get_pixel_unchecked(x, y);
            match pix.depth() {
                PixelDepth::Bit1 => {
                    if val != 0 {
                        data[row_start + (x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
                PixelDepth::Bit8 => data[row_start + x as usize] = val as u8,
                PixelDepth::Bit32 => {
                    let (r, g, b) = color::extract_rgb(val);
                    let idx = row_start + x as usize * 3;
                    data[idx] = r;
                    data[idx + 1] = g;
                    data[idx + 2] = b;
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
