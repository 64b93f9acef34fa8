//! Deterministic PNG writer for rendered text.
//!
//! Uses fixed compression settings so the same canvas always encodes to the
//! same bytes.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::raster::{IndexedCanvas, RgbaCanvas};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest output (slower).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Fastest output (larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), PngError> {
    if width == 0 || height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} canvas cannot be encoded",
            width, height
        )));
    }
    Ok(())
}

/// Write an RGBA canvas to any writer.
pub fn write_rgba_to_writer<W: Write>(
    canvas: &RgbaCanvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_dimensions(canvas.width, canvas.height)?;

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;

    Ok(())
}

/// Write an indexed canvas (with `PLTE` and `tRNS` chunks) to any writer.
pub fn write_indexed_to_writer<W: Write>(
    canvas: &IndexedCanvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_dimensions(canvas.width, canvas.height)?;
    if canvas.palette.is_empty() || canvas.palette.len() > IndexedCanvas::MAX_ENTRIES {
        return Err(PngError::InvalidDimensions(format!(
            "palette of {} entries does not fit an 8-bit indexed image",
            canvas.palette.len()
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_palette(canvas.palette_bytes());
    encoder.set_trns(canvas.alpha.clone());
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a Vec<u8> and return the hash.
pub fn write_rgba_to_vec_with_hash(
    canvas: &RgbaCanvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Write an indexed canvas to a Vec<u8> and return the hash.
pub fn write_indexed_to_vec_with_hash(
    canvas: &IndexedCanvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_indexed_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
