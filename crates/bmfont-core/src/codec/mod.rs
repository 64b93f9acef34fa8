//! BMF container codec.
//!
//! # Layout
//!
//! All multi-byte integers are little-endian.
//!
//! ```text
//! 0   4        magic E1 E6 D5 1A
//! 4   1        version (<= 0x11)
//! 5   1        line height
//! 6   1        size over        (signed)
//! 7   1        size under       (signed)
//! 8   1        add space        (signed)
//! 9   1        size inner       (signed)
//! 10  1        used colors
//! 11  1        highest color
//! 12  4        reserved
//! 16  1        palette size N
//! 17  3*N      palette, 0..=63 per component
//! ..  1 + L    title length, title
//! ..  2        glyph count (<= 256)
//! ..  6 + W*H  per glyph: code, width, height, rel x, rel y, shift, pixels
//! ```
//!
//! Palette components are stored with 6 bits of precision and scaled by 4 on
//! decode, so a decode/encode round trip drops the two low bits.

mod glyph;
mod header;
mod io;
mod reader;
mod writer;

pub use glyph::{read_glyph, write_glyph, BMF_GLYPH_RECORD_SIZE, BMF_MAX_GLYPHS};
pub use header::{
    BmfHeader, BMF_HEADER_FIELDS_SIZE, BMF_HEADER_SIZE, BMF_MAGIC, BMF_MAX_COLORS,
    BMF_MAX_TITLE_LEN, BMF_MAX_VERSION,
};
pub use reader::{decode, decode_from};
pub use writer::{encode, encode_to, encoded_len};
