//! BMF decoder.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use super::glyph::{read_glyph, BMF_MAX_GLYPHS};
use super::header::BmfHeader;
use super::io::{read_vec, truncated};
use crate::color::Rgb;
use crate::error::{BmfError, BmfResult, Section};
use crate::model::Font;

/// Decode a font from an in-memory buffer.
pub fn decode(data: &[u8]) -> BmfResult<Font> {
    let mut reader = data;
    decode_from(&mut reader)
}

/// Decode a font from a reader.
///
/// The font is built in a local value and only returned once every section
/// has been read, so a failure never exposes a partially filled font.
pub fn decode_from<R: Read>(mut reader: R) -> BmfResult<Font> {
    let header = BmfHeader::read(&mut reader)?;

    let mut font = Font::new();
    header.apply(&mut font);
    log::debug!(
        "BMF header: version 0x{:02X}, line height {}, {} colors",
        header.version,
        header.line_height,
        header.colors
    );

    let raw_palette = read_vec(&mut reader, header.colors as usize * 3, Section::Palette)?;
    font.palette = raw_palette
        .chunks_exact(3)
        .map(|c| Rgb::from_stored([c[0], c[1], c[2]]))
        .collect();

    let title_len = reader
        .read_u8()
        .map_err(|e| truncated(e, Section::Title, 1))?;
    font.title = read_vec(&mut reader, title_len as usize, Section::Title)?;

    let num_chars = reader
        .read_u16::<LittleEndian>()
        .map_err(|e| truncated(e, Section::GlyphCount, 2))?;
    if num_chars > BMF_MAX_GLYPHS {
        return Err(BmfError::TooManyGlyphs {
            count: num_chars,
            max: BMF_MAX_GLYPHS,
        });
    }
    font.num_chars = num_chars;

    let mut seen = [false; 256];
    for _ in 0..num_chars {
        let (code, glyph) = read_glyph(&mut reader)?;
        if seen[code as usize] {
            log::warn!("glyph code {} appears more than once; keeping the last record", code);
        }
        seen[code as usize] = true;
        font.set_glyph(code, glyph);
    }

    log::debug!(
        "decoded BMF font {:?}: {} glyph records",
        font.title_str(),
        num_chars
    );
    Ok(font)
}
