//! Detection of fonts whose advancing glyphs all share one shift.

use serde::Serialize;

use crate::model::GlyphTable;

/// Outcome of a monospace scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Monospace {
    /// Not computed yet.
    Unknown,
    /// No glyph has a nonzero shift.
    Empty,
    /// Every glyph with a nonzero shift uses this value.
    Uniform { shift: u8 },
    /// The first code (ascending) whose shift differs from the earlier ones.
    NonUniform { first_divergent: u8 },
}

impl Monospace {
    /// Uniform shift, if the font is monospaced.
    pub fn uniform_shift(self) -> Option<u8> {
        match self {
            Monospace::Uniform { shift } => Some(shift),
            _ => None,
        }
    }

    pub fn is_uniform(self) -> bool {
        matches!(self, Monospace::Uniform { .. })
    }
}

/// Scan codes 0..=255 and classify the table.
///
/// Glyphs with a zero shift are ignored. The scan stops at the first glyph
/// whose shift differs from the first nonzero shift seen.
pub fn monospace_check(glyphs: &GlyphTable) -> Monospace {
    let mut candidate: Option<u8> = None;

    for (code, glyph) in glyphs.iter() {
        if glyph.shift == 0 {
            continue;
        }
        match candidate {
            None => candidate = Some(glyph.shift),
            Some(shift) if shift != glyph.shift => {
                return Monospace::NonUniform {
                    first_divergent: code,
                };
            }
            Some(_) => {}
        }
    }

    match candidate {
        Some(shift) => Monospace::Uniform { shift },
        None => Monospace::Empty,
    }
}
