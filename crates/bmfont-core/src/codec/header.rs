//! BMF fixed header: signature, version, metrics and palette size.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use super::io::{read_section, truncated};
use crate::error::{BmfError, BmfResult, Section};
use crate::model::Font;

/// BMF file signature.
pub const BMF_MAGIC: &[u8; 4] = b"\xE1\xE6\xD5\x1A";

/// Highest format revision understood (v1.1).
pub const BMF_MAX_VERSION: u8 = 0x11;

/// Size of everything up to and including the palette size byte.
pub const BMF_HEADER_SIZE: usize = 17;

/// Bytes following the version byte, up to and including the palette size.
pub const BMF_HEADER_FIELDS_SIZE: usize = 12;

/// Maximum palette entries (one count byte).
pub const BMF_MAX_COLORS: usize = 255;

/// Maximum title length (one length byte).
pub const BMF_MAX_TITLE_LEN: usize = 255;

/// Fixed-size portion of a BMF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BmfHeader {
    pub version: u8,
    pub line_height: i8,
    pub size_over: i8,
    pub size_under: i8,
    pub add_space: i8,
    pub size_inner: i8,
    pub used_colors: u8,
    pub highest_color: u8,
    pub reserved: [u8; 4],
    /// Number of palette triples that follow.
    pub colors: u8,
}

impl BmfHeader {
    /// Capture the header fields of a font. The palette size must already
    /// have been validated.
    pub fn from_font(font: &Font) -> Self {
        Self {
            version: font.version,
            line_height: font.line_height,
            size_over: font.size_over,
            size_under: font.size_under,
            add_space: font.add_space,
            size_inner: font.size_inner,
            used_colors: font.used_colors,
            highest_color: font.highest_color,
            reserved: font.reserved,
            colors: font.palette.len().min(BMF_MAX_COLORS) as u8,
        }
    }

    /// Copy the header fields into a font.
    pub fn apply(&self, font: &mut Font) {
        font.version = self.version;
        font.line_height = self.line_height;
        font.size_over = self.size_over;
        font.size_under = self.size_under;
        font.add_space = self.add_space;
        font.size_inner = self.size_inner;
        font.used_colors = self.used_colors;
        font.highest_color = self.highest_color;
        font.reserved = self.reserved;
    }

    /// Read and check the signature, version and fixed fields.
    pub fn read<R: Read>(reader: &mut R) -> BmfResult<Self> {
        read_magic(reader)?;

        let version = reader
            .read_u8()
            .map_err(|e| truncated(e, Section::Version, 1))?;
        if version > BMF_MAX_VERSION {
            return Err(BmfError::UnsupportedVersion {
                version,
                max: BMF_MAX_VERSION,
            });
        }

        let mut fields = [0u8; BMF_HEADER_FIELDS_SIZE];
        read_section(reader, &mut fields, Section::Header)?;

        Ok(Self {
            version,
            line_height: fields[0] as i8,
            size_over: fields[1] as i8,
            size_under: fields[2] as i8,
            add_space: fields[3] as i8,
            size_inner: fields[4] as i8,
            used_colors: fields[5],
            highest_color: fields[6],
            reserved: [fields[7], fields[8], fields[9], fields[10]],
            colors: fields[11],
        })
    }

    /// Write the header to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(BMF_MAGIC)?;
        writer.write_u8(self.version)?;

        // Metrics are signed on disk
        writer.write_i8(self.line_height)?;
        writer.write_i8(self.size_over)?;
        writer.write_i8(self.size_under)?;
        writer.write_i8(self.add_space)?;
        writer.write_i8(self.size_inner)?;

        writer.write_u8(self.used_colors)?;
        writer.write_u8(self.highest_color)?;
        writer.write_all(&self.reserved)?;
        writer.write_u8(self.colors)?;

        Ok(())
    }
}

/// Read the 4-byte signature.
///
/// Input that stops early is reported as truncated only while what was read
/// still matches the signature; otherwise it is not a BMF stream at all.
fn read_magic<R: Read>(reader: &mut R) -> BmfResult<()> {
    let mut magic = [0u8; 4];
    let mut filled = 0;
    while filled < magic.len() {
        match reader.read(&mut magic[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(BmfError::Io(e)),
        }
    }

    if magic[..filled] != BMF_MAGIC[..filled] {
        return Err(BmfError::InvalidMagic { found: magic });
    }
    if filled < magic.len() {
        return Err(BmfError::TruncatedInput {
            section: Section::Magic,
            needed: magic.len(),
        });
    }
    Ok(())
}
