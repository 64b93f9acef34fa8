//! Glyph records: a 6-byte descriptor followed by the bitmap.

use std::io::{self, Read, Write};

use super::io::{read_section, read_vec};
use crate::error::{BmfResult, Section};
use crate::model::Glyph;

/// Size of a glyph descriptor on disk.
pub const BMF_GLYPH_RECORD_SIZE: usize = 6;

/// Maximum number of glyph records (one per byte code).
pub const BMF_MAX_GLYPHS: u16 = 256;

/// Read one glyph record and its pixel data. Returns the code it belongs to.
pub fn read_glyph<R: Read>(reader: &mut R) -> BmfResult<(u8, Glyph)> {
    let mut record = [0u8; BMF_GLYPH_RECORD_SIZE];
    read_section(reader, &mut record, Section::GlyphRecord)?;

    let code = record[0];
    let mut glyph = Glyph {
        width: record[1],
        height: record[2],
        rel_x: record[3] as i8,
        rel_y: record[4] as i8,
        shift: record[5],
        data: Vec::new(),
    };

    let area = glyph.area();
    if area > 0 {
        glyph.data = read_vec(reader, area, Section::GlyphBitmap)?;
    }

    Ok((code, glyph))
}

/// Write one glyph record and its pixel data.
pub fn write_glyph<W: Write>(writer: &mut W, code: u8, glyph: &Glyph) -> io::Result<()> {
    writer.write_all(&[
        code,
        glyph.width,
        glyph.height,
        glyph.rel_x as u8,
        glyph.rel_y as u8,
        glyph.shift,
    ])?;
    if glyph.has_bitmap() {
        writer.write_all(&glyph.data)?;
    }
    Ok(())
}
