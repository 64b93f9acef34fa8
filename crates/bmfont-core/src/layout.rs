//! Text measurement.
//!
//! Text is a sequence of byte codes; each byte indexes the 256-slot glyph
//! table directly.

use serde::Serialize;

use crate::error::{BmfError, BmfResult};
use crate::model::Font;

/// Canvas size needed to draw a string, plus where the pen should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels, at least 1.
    pub height: u32,
    /// Pen start that keeps a left overhang of the first glyph on the canvas.
    pub origin_x: i32,
}

/// Advance applied after a character, including the font's letter gap.
pub(crate) fn advance(font: &Font, code: u8) -> i32 {
    font.glyph(code).shift as i32 + font.add_space as i32 + font.letter_gap
}

/// Compute the canvas size for `text`.
pub fn measure(font: &Font, text: &[u8]) -> BmfResult<TextMetrics> {
    let (&first, &last) = match (text.first(), text.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(BmfError::EmptyText),
    };

    let body: i32 = text[..text.len() - 1]
        .iter()
        .map(|&code| advance(font, code))
        .sum();

    let origin_x = (-(font.glyph(first).rel_x as i32)).max(0);
    let last_glyph = font.glyph(last);
    let width = body + origin_x + last_glyph.rel_x as i32 + last_glyph.width as i32;

    let height = (font.line_height as i32)
        .max(font.size_under as i32 - font.size_over as i32)
        .max(1);

    Ok(TextMetrics {
        width: width.max(0) as u32,
        height: height as u32,
        origin_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glyph;

    fn font() -> Font {
        let mut font = Font::new();
        font.line_height = 10;
        font.set_glyph(b'A', Glyph::new(4, 2, 0, 0, 5, vec![1; 8]).unwrap());
        font.set_glyph(b'j', Glyph::new(3, 2, -2, 0, 2, vec![1; 6]).unwrap());
        font.set_glyph(b' ', Glyph::spacing(3));
        font
    }

    #[test]
    fn test_single_char() {
        let m = measure(&font(), b"A").unwrap();
        assert_eq!(m, TextMetrics { width: 4, height: 10, origin_x: 0 });
    }

    #[test]
    fn test_add_space_and_letter_gap() {
        let mut f = font();
        f.add_space = 1;
        f.letter_gap = 2;
        // (5 + 1 + 2) * 2 for the first two chars, then the last glyph's extent.
        let m = measure(&f, b"A A").unwrap();
        assert_eq!(m.width, (5 + 1 + 2) + (3 + 1 + 2) + 4);
    }

    #[test]
    fn test_left_overhang() {
        let m = measure(&font(), b"jA").unwrap();
        assert_eq!(m.origin_x, 2);
        assert_eq!(m.width, 2 + 2 + 4);
    }

    #[test]
    fn test_height_floor() {
        let mut f = Font::new();
        f.set_glyph(b'.', Glyph::spacing(1));
        assert_eq!(measure(&f, b".").unwrap().height, 1);

        f.size_over = -7;
        f.size_under = 3;
        assert_eq!(measure(&f, b".").unwrap().height, 10);
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(measure(&font(), b""), Err(BmfError::EmptyText)));
    }

    #[test]
    fn test_negative_width_clamps_to_zero() {
        let mut f = Font::new();
        f.set_glyph(b'<', Glyph::new(1, 1, -5, 0, 0, vec![1]).unwrap());
        f.set_glyph(b'.', Glyph::spacing(1));
        f.add_space = -20;
        assert_eq!(measure(&f, b".<").unwrap().width, 0);
    }
}
