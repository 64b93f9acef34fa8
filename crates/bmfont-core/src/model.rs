//! In-memory representation of a BMF font.

use std::ops::{Index, IndexMut};
use std::path::Path;

use serde::Serialize;

use crate::codec::{self, BMF_MAX_COLORS, BMF_MAX_TITLE_LEN, BMF_MAX_VERSION};
use crate::color::Rgb;
use crate::error::{BmfError, BmfResult};
use crate::monospace::{monospace_check, Monospace};

/// Number of slots in a glyph table, one per byte code.
pub const GLYPH_SLOTS: usize = 256;

/// One character's metrics and bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Glyph {
    /// Bitmap width in pixels; 0 means no bitmap.
    pub width: u8,
    /// Bitmap height in pixels; 0 means no bitmap.
    pub height: u8,
    /// Horizontal offset from the pen to the bitmap's left edge.
    pub rel_x: i8,
    /// Vertical offset from the pen to the bitmap's top edge.
    pub rel_y: i8,
    /// Pen advance after drawing this glyph.
    pub shift: u8,
    /// Row-major palette indices, `width * height` bytes.
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Glyph {
    /// Create a glyph, checking that `data` matches the bitmap size.
    pub fn new(
        width: u8,
        height: u8,
        rel_x: i8,
        rel_y: i8,
        shift: u8,
        data: Vec<u8>,
    ) -> BmfResult<Self> {
        let glyph = Self {
            width,
            height,
            rel_x,
            rel_y,
            shift,
            data,
        };
        glyph.check_data()?;
        Ok(glyph)
    }

    /// A glyph with no bitmap that only advances the pen (e.g. space).
    pub fn spacing(shift: u8) -> Self {
        Self {
            shift,
            ..Self::default()
        }
    }

    /// Number of pixels in the bitmap.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if the glyph has drawable pixels.
    pub fn has_bitmap(&self) -> bool {
        self.area() > 0
    }

    /// True if the glyph carries nothing worth storing (no bitmap, no advance).
    pub fn is_default(&self) -> bool {
        !self.has_bitmap() && self.shift == 0
    }

    /// Palette index at column `k`, row `j`.
    pub fn pixel(&self, k: u8, j: u8) -> Option<u8> {
        if k >= self.width || j >= self.height {
            return None;
        }
        self.data
            .get(j as usize * self.width as usize + k as usize)
            .copied()
    }

    pub(crate) fn check_data(&self) -> BmfResult<()> {
        let expected = self.area();
        if self.data.len() != expected {
            return Err(BmfError::invalid_state(format!(
                "glyph {}x{} needs {} bytes of pixel data, has {}",
                self.width,
                self.height,
                expected,
                self.data.len()
            )));
        }
        Ok(())
    }
}

/// Fixed 256-slot mapping from byte code to glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    slots: Box<[Glyph]>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            slots: vec![Glyph::default(); GLYPH_SLOTS].into_boxed_slice(),
        }
    }
}

impl GlyphTable {
    /// Iterate over all 256 slots in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Glyph)> {
        self.slots.iter().enumerate().map(|(i, g)| (i as u8, g))
    }

    /// Iterate over slots that differ from the default glyph.
    pub fn present(&self) -> impl Iterator<Item = (u8, &Glyph)> {
        self.iter().filter(|(_, g)| !g.is_default())
    }

    /// Number of non-default glyphs.
    pub fn present_count(&self) -> usize {
        self.present().count()
    }
}

impl Index<u8> for GlyphTable {
    type Output = Glyph;

    fn index(&self, code: u8) -> &Glyph {
        &self.slots[code as usize]
    }
}

impl IndexMut<u8> for GlyphTable {
    fn index_mut(&mut self, code: u8) -> &mut Glyph {
        &mut self.slots[code as usize]
    }
}

/// A decoded (or hand-built) BMF font.
///
/// Equality compares the stored font data only: header fields, palette,
/// title and glyph table. `num_chars`, `letter_gap` and the cached
/// monospace result are ignored.
#[derive(Debug, Clone)]
pub struct Font {
    /// Format revision, 0x00..=0x11.
    pub version: u8,
    pub line_height: i8,
    /// Extent above the baseline.
    pub size_over: i8,
    /// Extent below the baseline.
    pub size_under: i8,
    /// Extra advance added after every character.
    pub add_space: i8,
    /// Height of small letters.
    pub size_inner: i8,
    /// Informational only.
    pub used_colors: u8,
    /// Informational only.
    pub highest_color: u8,
    /// Opaque bytes carried through decode/encode unchanged.
    pub reserved: [u8; 4],
    /// Palette, at most 255 entries.
    pub palette: Vec<Rgb>,
    /// Raw title bytes, at most 255.
    pub title: Vec<u8>,
    /// Glyph count declared by the stream this font was decoded from.
    pub num_chars: u16,
    /// Extra gap between letters when laying out text. Not stored on disk.
    pub letter_gap: i32,
    glyphs: GlyphTable,
    monospace: Monospace,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            version: BMF_MAX_VERSION,
            line_height: 0,
            size_over: 0,
            size_under: 0,
            add_space: 0,
            size_inner: 0,
            used_colors: 0,
            highest_color: 0,
            reserved: [0; 4],
            palette: Vec::new(),
            title: Vec::new(),
            num_chars: 0,
            letter_gap: 0,
            glyphs: GlyphTable::default(),
            monospace: Monospace::Unknown,
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.line_height == other.line_height
            && self.size_over == other.size_over
            && self.size_under == other.size_under
            && self.add_space == other.add_space
            && self.size_inner == other.size_inner
            && self.used_colors == other.used_colors
            && self.highest_color == other.highest_color
            && self.reserved == other.reserved
            && self.palette == other.palette
            && self.title == other.title
            && self.glyphs == other.glyphs
    }
}

impl Font {
    /// Create an empty font at the latest format revision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a font from an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> BmfResult<Self> {
        codec::decode(data)
    }

    /// Decode a font from any reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> BmfResult<Self> {
        codec::decode_from(reader)
    }

    /// Open and decode a font file.
    pub fn open(path: impl AsRef<Path>) -> BmfResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        codec::decode_from(std::io::BufReader::new(file))
    }

    /// Replace this font with one decoded from `data`.
    ///
    /// On failure `self` is left exactly as it was. The letter gap is a
    /// layout setting rather than font data and survives a reload.
    pub fn load_bytes(&mut self, data: &[u8]) -> BmfResult<()> {
        let fresh = codec::decode(data)?;
        self.replace(fresh);
        Ok(())
    }

    /// Replace this font with one decoded from the file at `path`.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> BmfResult<()> {
        let fresh = Self::open(path)?;
        self.replace(fresh);
        Ok(())
    }

    fn replace(&mut self, fresh: Font) {
        let letter_gap = self.letter_gap;
        *self = fresh;
        self.letter_gap = letter_gap;
    }

    /// Encode this font to BMF bytes.
    pub fn to_bytes(&self) -> BmfResult<Vec<u8>> {
        codec::encode(self)
    }

    /// Number of palette entries.
    pub fn colors(&self) -> usize {
        self.palette.len()
    }

    /// The title as text, replacing invalid UTF-8.
    pub fn title_str(&self) -> String {
        String::from_utf8_lossy(&self.title).into_owned()
    }

    /// The reserved field read as a little-endian integer, for display.
    pub fn reserved_u32(&self) -> u32 {
        u32::from_le_bytes(self.reserved)
    }

    /// The glyph table.
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Glyph for a byte code.
    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code]
    }

    /// Mutable glyph access. Invalidates the cached monospace result.
    pub fn glyph_mut(&mut self, code: u8) -> &mut Glyph {
        self.monospace = Monospace::Unknown;
        &mut self.glyphs[code]
    }

    /// Store a glyph at `code`, replacing whatever was there.
    pub fn set_glyph(&mut self, code: u8, glyph: Glyph) {
        *self.glyph_mut(code) = glyph;
    }

    /// Cached monospace result, computing it on first use.
    pub fn monospace(&mut self) -> Monospace {
        if self.monospace == Monospace::Unknown {
            self.monospace = monospace_check(&self.glyphs);
        }
        self.monospace
    }

    /// Discard the cached result and scan the glyph table again.
    pub fn rescan_monospace(&mut self) -> Monospace {
        self.monospace = monospace_check(&self.glyphs);
        self.monospace
    }

    /// The cached result without computing anything.
    pub fn cached_monospace(&self) -> Monospace {
        self.monospace
    }

    /// Check the structural invariants that encoding relies on.
    pub fn validate(&self) -> BmfResult<()> {
        if self.version > BMF_MAX_VERSION {
            return Err(BmfError::invalid_state(format!(
                "version 0x{:02X} exceeds 0x{:02X}",
                self.version, BMF_MAX_VERSION
            )));
        }
        if self.palette.len() > BMF_MAX_COLORS {
            return Err(BmfError::invalid_state(format!(
                "palette has {} colors (maximum {})",
                self.palette.len(),
                BMF_MAX_COLORS
            )));
        }
        if self.title.len() > BMF_MAX_TITLE_LEN {
            return Err(BmfError::invalid_state(format!(
                "title is {} bytes (maximum {})",
                self.title.len(),
                BMF_MAX_TITLE_LEN
            )));
        }
        for (code, glyph) in self.glyphs.iter() {
            glyph.check_data().map_err(|e| match e {
                BmfError::InvalidFontState { reason } => {
                    BmfError::invalid_state(format!("code {}: {}", code, reason))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
