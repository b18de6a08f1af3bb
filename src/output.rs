//! # Output Module
//!
//! This module writes rendered images in the two PPM flavors:
//! - Plain text PPM (P3) with one line of decimal triples per image row
//! - Binary PPM (P6) with raw RGB bytes
//!
//! ## Destination Defaults
//!
//! Images written to a file default to the binary flavor, while images
//! written to standard output default to the text flavor so a render can
//! be piped straight into a pager or another tool. An explicit format
//! choice overrides both defaults.
//!
//! Rows are written from the top of the image down in both flavors.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::RgbImage;
use log::info;

use crate::cli::PpmFormat;

/// Write an image as plain text PPM (P3)
///
/// Each pixel becomes a `r g b` triple followed by two spaces, and each
/// image row ends with a newline.
///
/// # Arguments
///
/// * `image` - 8-bit RGB image to write
/// * `writer` - Destination for the PPM text
///
/// # Errors
///
/// Returns any I/O error raised by the underlying writer.
pub fn write_ascii_ppm<W: Write>(image: &RgbImage, writer: &mut W) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for row in image.rows() {
        for pixel in row {
            write!(writer, "{} {} {}  ", pixel[0], pixel[1], pixel[2])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write an image as binary PPM (P6)
///
/// The header matches the text flavor and is followed by the raw
/// interleaved RGB bytes.
///
/// # Arguments
///
/// * `image` - 8-bit RGB image to write
/// * `writer` - Destination for the PPM data
///
/// # Errors
///
/// Returns any I/O error raised by the underlying writer.
pub fn write_binary_ppm<W: Write>(image: &RgbImage, writer: &mut W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.as_raw())?;
    Ok(())
}

/// Save an image to a file or standard output
///
/// With no explicit format, files get binary PPM and standard output
/// gets text PPM.
///
/// # Arguments
///
/// * `image` - 8-bit RGB image to save
/// * `output` - Target file path, or None for standard output
/// * `format` - PPM flavor override
///
/// # Errors
///
/// Returns any error from creating the file or writing the image data.
pub fn save_image(
    image: &RgbImage,
    output: Option<&str>,
    format: Option<PpmFormat>,
) -> io::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_with_format(image, &mut writer, format.unwrap_or(PpmFormat::Binary))?;
            writer.flush()?;
            info!("Image saved as {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_with_format(image, &mut writer, format.unwrap_or(PpmFormat::Ascii))?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_with_format<W: Write>(
    image: &RgbImage,
    writer: &mut W,
    format: PpmFormat,
) -> io::Result<()> {
    match format {
        PpmFormat::Ascii => write_ascii_ppm(image, writer),
        PpmFormat::Binary => write_binary_ppm(image, writer),
    }
}
