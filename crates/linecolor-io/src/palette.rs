//! Palette sources
//!
//! A palette is either an image (every pixel contributes one color, in
//! column-major order) or a text file with one color per line.
//!
//! Text lines are `R,G,B` decimal triples or `#RRGGBB` hex. Blank lines
//! and lines starting with `#` followed by a non-hex token are ignored.

use crate::{IoError, IoResult, read_image};
use linecolor_core::Palette;
use std::fs;
use std::path::Path;

/// Load a palette from `path`.
///
/// A `.txt` extension selects the text format; anything else is decoded as
/// an image.
pub fn read_palette<P: AsRef<Path>>(path: P) -> IoResult<Palette> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    let palette = if is_text {
        let text = fs::read_to_string(path)?;
        parse_palette_text(&text)?
    } else {
        let pix = read_image(path)?;
        Palette::from_pix(&pix)?
    };
    log::debug!("loaded {} palette colors from {}", palette.len(), path.display());
    Ok(palette)
}

/// Parse the text palette format.
///
/// One color per line, either `R,G,B` in decimal or `#RRGGBB`. Blank lines
/// and lines where `#` is not directly followed by hex digits (`# notes`)
/// are skipped.
pub fn parse_palette_text(text: &str) -> IoResult<Palette> {
    let mut colors = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('#') {
            // A hex token right after '#' is a color; anything else is a comment
            let token = rest.split(char::is_whitespace).next().unwrap_or("");
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
                continue;
            }
            let rgb = parse_hex(token).ok_or_else(|| {
                IoError::InvalidData(format!(
                    "palette line {}: hex color {:?} needs 6 digits",
                    lineno + 1,
                    line
                ))
            })?;
            colors.push(rgb);
            continue;
        }
        let rgb = parse_triple(line).ok_or_else(|| {
            IoError::InvalidData(format!("palette line {}: bad color {:?}", lineno + 1, line))
        })?;
        colors.push(rgb);
    }
    Ok(Palette::new(colors)?)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn parse_triple(line: &str) -> Option<(u8, u8, u8)> {
    let mut parts = line.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_lines() {
        let text = "# warm colors\n255,0,0\n\n#00FF00\n 10, 20 ,30 \n";
        let palette = parse_palette_text(text).unwrap();
        assert_eq!(palette.colors(), &[(255, 0, 0), (0, 255, 0), (10, 20, 30)]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_palette_text("255,0\n").is_err());
        assert!(parse_palette_text("256,0,0\n").is_err());
        assert!(parse_palette_text("1,2,3,4\n").is_err());
    }

    #[test]
    fn test_parse_short_hex_is_error() {
        assert!(matches!(
            parse_palette_text("#12345\n"),
            Err(IoError::InvalidData(_))
        ));
        assert!(parse_palette_text("#1234567\n").is_err());
        // Trailing text after a full hex color is allowed
        let palette = parse_palette_text("#0000ff blue\n#comment\n").unwrap();
        assert_eq!(palette.colors(), &[(0, 0, 255)]);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(
            parse_palette_text("# nothing here\n"),
            Err(IoError::Core(linecolor_core::Error::EmptyPalette))
        ));
    }
}
