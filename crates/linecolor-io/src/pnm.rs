//! PNM (Portable Any Map) format support
//!
//! Reads and writes PBM (P4 binary), PGM (P5 binary), and PPM (P6 binary)
//! with a maxval of 255. ASCII variants (P1/P2/P3) are not supported.
//!
//! PBM stores 1 as black; the colorizer's binary rasters store 1 as the
//! bright foreground, so bits are inverted on the way in and out.

use crate::{IoError, IoResult};
use linecolor_core::{Pix, PixelDepth, color};
use std::io::{BufRead, Write};

/// Read the next whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    let mut in_comment = false;
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if in_comment {
            in_comment = c != b'\n';
            continue;
        }
        if c == b'#' && token.is_empty() {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                break;
            }
        } else {
            token.push(c as char);
        }
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {what}: {token}")))
}

/// Read a PNM image (P4/P5/P6) from a reader.
///
/// Returns a `Pix` at 1 bpp (PBM), 8 bpp (PGM), or 32 bpp (PPM).
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    let depth = match magic.as_str() {
        "P4" => PixelDepth::Bit1,
        "P5" => PixelDepth::Bit8,
        "P6" => PixelDepth::Bit32,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {other} not supported"
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    if depth != PixelDepth::Bit1 {
        let maxval = read_number(&mut reader, "maxval")?;
        if maxval != 255 {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM maxval {maxval} not supported"
            )));
        }
    }

    let row_len = match depth {
        PixelDepth::Bit1 => Some(width.div_ceil(8)),
        PixelDepth::Bit8 => Some(width),
        PixelDepth::Bit32 => width.checked_mul(3),
    };
    let bytes_per_row = row_len
        .ok_or_else(|| IoError::InvalidData(format!("PNM width {width} too large")))?
        as usize;
    let mut pix_mut = Pix::new(width, height, depth)?.into_mut();
    let mut row = vec![0u8; bytes_per_row];

    for y in 0..height {
        reader.read_exact(&mut row)?;
        for x in 0..width {
            let val = match depth {
                PixelDepth::Bit1 => {
                    let bit = (row[(x / 8) as usize] >> (7 - (x % 8))) & 1;
                    (bit ^ 1) as u32
                }
                PixelDepth::Bit8 => row[x as usize] as u32,
                PixelDepth::Bit32 => {
                    let i = x as usize * 3;
                    color::compose_rgb(row[i], row[i + 1], row[i + 2])
                }
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P4 (1 bpp), P5 (8 bpp grayscale), or P6 (32 bpp RGB)
/// based on the pixel depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    match pix.depth() {
        PixelDepth::Bit1 => write!(writer, "P4\n{width} {height}\n")?,
        PixelDepth::Bit8 => write!(writer, "P5\n{width} {height}\n255\n")?,
        PixelDepth::Bit32 => write!(writer, "P6\n{width} {height}\n255\n")?,
    }

    for y in 0..height {
        let mut row = Vec::new();
        match pix.depth() {
            PixelDepth::Bit1 => {
                row.resize(width.div_ceil(8) as usize, 0u8);
                for x in 0..width {
                    if pix.get_pixel_unchecked(x, y) == 0 {
                        row[(x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
            }
            PixelDepth::Bit8 => {
                row.extend((0..width).map(|x| pix.get_pixel_unchecked(x, y) as u8));
            }
            PixelDepth::Bit32 => {
                for x in 0..width {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    row.extend_from_slice(&[r, g, b]);
                }
            }
        }
        writer.write_all(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pgm_with_comment() {
        let mut data = b"P5\n# made by hand\n3 1\n255\n".to_vec();
        data.extend_from_slice(&[0, 128, 255]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.get_pixel(1, 0), Some(128));
        assert_eq!(pix.get_pixel(2, 0), Some(255));
    }

    #[test]
    fn test_pbm_polarity() {
        // Leading bit set = black in PBM = background here.
        let data = [b"P4\n2 1\n".as_slice(), &[0b1000_0000]].concat();
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(1, 0), Some(1));

        let mut out = Vec::new();
        write_pnm(&pix, &mut out).unwrap();
        assert_eq!(out.last(), Some(&0b1000_0000));
    }

    #[test]
    fn test_ppm_roundtrip() {
        let mut pm = Pix::new(3, 2, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_rgb(2, 1, 10, 20, 30).unwrap();
        let pix: Pix = pm.into();

        let mut out = Vec::new();
        write_pnm(&pix, &mut out).unwrap();
        let pix2 = read_pnm(Cursor::new(out)).unwrap();
        assert_eq!(pix2.get_rgb(2, 1), Some((10, 20, 30)));
        assert_eq!(pix2.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_unsupported_maxval() {
        let data = b"P5\n1 1\n65535\n\x00\x00".to_vec();
        assert!(read_pnm(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_oversized_ppm_width() {
        // 3 * width does not fit a u32 row length
        let data = b"P6
1431655766 1
255
".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }
}
