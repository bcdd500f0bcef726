//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale files decode to 8 bpp, color files to 32 bpp.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use linecolor_core::{Pix, PixelDepth, color};
use std::io::{Read, Write};

/// Quality used when encoding.
pub const DEFAULT_QUALITY: u8 = 95;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (depth, samples) = match info.pixel_format {
        PixelFormat::L8 => (PixelDepth::Bit8, 1),
        PixelFormat::L16 => (PixelDepth::Bit8, 2),
        PixelFormat::RGB24 => (PixelDepth::Bit32, 3),
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    let mut pix_mut = Pix::new(width, height, depth)?.into_mut();
    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize * width as usize + x as usize) * samples;
            let val = match info.pixel_format {
                PixelFormat::RGB24 => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
                _ => data[idx] as u32,
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as a baseline JPEG.
///
/// 1 bpp and 8 bpp images are written as luma (foreground white); 32 bpp
/// as RGB.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width too large: {}", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height too large: {}", pix.height())))?;

    let (color_type, samples) = match pix.depth() {
        PixelDepth::Bit32 => (ColorType::Rgb, 3),
        _ => (ColorType::Luma, 1),
    };

    let mut data = Vec::with_capacity(width as usize * height as usize * samples);
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let val = pix.get_pixel_unchecked(x, y);
            match pix.depth() {
                PixelDepth::Bit1 => data.push(if val != 0 { 255 } else { 0 }),
                PixelDepth::Bit8 => data.push(val as u8),
                PixelDepth::Bit32 => {
                    let (r, g, b) = color::extract_rgb(val);
                    data.extend_from_slice(&[r, g, b]);
                }
            }
        }
    }

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}
