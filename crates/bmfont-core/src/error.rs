//! Error types for the BMF codec and renderer.

use std::fmt;

use thiserror::Error;

/// Result type for BMF operations.
pub type BmfResult<T> = Result<T, BmfError>;

/// Stage of the decoder that ran out of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The 4-byte signature.
    Magic,
    /// The version byte.
    Version,
    /// Fixed header fields plus the palette size byte.
    Header,
    /// Palette triples.
    Palette,
    /// Title length byte and title bytes.
    Title,
    /// The 16-bit glyph count.
    GlyphCount,
    /// A 6-byte glyph record.
    GlyphRecord,
    /// Pixel data following a glyph record.
    GlyphBitmap,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Magic => "magic",
            Section::Version => "version",
            Section::Header => "header",
            Section::Palette => "palette",
            Section::Title => "title",
            Section::GlyphCount => "glyph count",
            Section::GlyphRecord => "glyph record",
            Section::GlyphBitmap => "glyph bitmap",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while decoding, encoding or rendering a font.
#[derive(Debug, Error)]
pub enum BmfError {
    /// The first four bytes are not the BMF signature.
    #[error("invalid magic: expected E1 E6 D5 1A, found {found:02X?}")]
    InvalidMagic {
        /// The bytes that were read instead.
        found: [u8; 4],
    },

    /// The version byte is newer than any known revision.
    #[error("unsupported version 0x{version:02X} (maximum 0x{max:02X})")]
    UnsupportedVersion {
        /// Version byte from the stream.
        version: u8,
        /// Highest supported version.
        max: u8,
    },

    /// A required read came back short.
    #[error("truncated input in {section}: needed {needed} bytes")]
    TruncatedInput {
        /// Decoder stage that failed.
        section: Section,
        /// Bytes required by that stage.
        needed: usize,
    },

    /// The declared glyph count exceeds the 256-slot table.
    #[error("too many glyphs: {count} (maximum {max})")]
    TooManyGlyphs {
        /// Declared count.
        count: u16,
        /// Structural maximum.
        max: u16,
    },

    /// A font value violates a structural invariant and cannot be encoded.
    #[error("invalid font state: {reason}")]
    InvalidFontState {
        /// What is wrong.
        reason: String,
    },

    /// Measure or composite was called with an empty string.
    #[error("text must contain at least one character")]
    EmptyText,

    /// PNG encoding failed.
    #[error("PNG error: {0}")]
    Png(#[from] crate::png::PngError),

    /// Render configuration could not be parsed.
    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error other than a short read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BmfError {
    /// Build an [`BmfError::InvalidFontState`] from anything printable.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        BmfError::InvalidFontState {
            reason: reason.into(),
        }
    }
}
