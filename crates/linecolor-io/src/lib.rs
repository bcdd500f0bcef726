//! linecolor-io - Image and palette I/O
//!
//! Reading dispatches on the file's magic number, writing on the format
//! the caller asks for (usually derived from the output path's extension
//! via [`format_for_path`]).
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg`       |
//! | PNM    | yes  | yes   | `pnm`        |

mod error;
mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
pub mod palette;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_for_path};
pub use linecolor_core::ImageFormat;
pub use palette::{parse_palette_text, read_palette};

use linecolor_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let pix = read_image_format(BufReader::new(file), format)?;
    log::trace!(
        "read {} ({}x{}, {} bpp)",
        path.display(),
        pix.width(),
        pix.height(),
        pix.depth().bits()
    );
    Ok(pix)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        _ => {
            drop(reader);
            Err(IoError::UnsupportedFormat(format!(
                "{:?} reading not enabled",
                format
            )))
        }
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        _ => {
            drop(writer);
            Err(IoError::UnsupportedFormat(format!(
                "{:?} writing not enabled",
                format
            )))
        }
    }
}
