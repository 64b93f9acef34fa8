//! BMF encoder.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::glyph::{write_glyph, BMF_GLYPH_RECORD_SIZE};
use super::header::{BmfHeader, BMF_HEADER_SIZE};
use crate::error::BmfResult;
use crate::model::Font;

/// Encode a font to a byte vector.
pub fn encode(font: &Font) -> BmfResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(encoded_len(font));
    encode_to(font, &mut buffer)?;
    Ok(buffer)
}

/// Encode a font to a writer.
///
/// The font is validated before anything is written. Only glyphs with a
/// bitmap or a nonzero shift are emitted, and the glyph count written is the
/// number of emitted records.
pub fn encode_to<W: Write>(font: &Font, writer: &mut W) -> BmfResult<()> {
    font.validate()?;

    BmfHeader::from_font(font).write(writer)?;

    for color in &font.palette {
        writer.write_all(&color.to_stored())?;
    }

    writer.write_u8(font.title.len() as u8)?;
    writer.write_all(&font.title)?;

    let present = font.glyphs().present_count();
    writer.write_u16::<LittleEndian>(present as u16)?;
    for (code, glyph) in font.glyphs().present() {
        write_glyph(writer, code, glyph)?;
    }

    log::debug!("encoded BMF font with {} glyph records", present);
    Ok(())
}

/// Number of bytes [`encode`] produces for a valid font.
pub fn encoded_len(font: &Font) -> usize {
    let glyphs: usize = font
        .glyphs()
        .present()
        .map(|(_, g)| BMF_GLYPH_RECORD_SIZE + g.area())
        .sum();
    BMF_HEADER_SIZE + font.palette.len() * 3 + 1 + font.title.len() + 2 + glyphs
}
