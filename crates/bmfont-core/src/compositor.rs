//! Drawing glyph bitmaps onto a canvas.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{BmfError, BmfResult};
use crate::layout::advance;
use crate::model::Font;

/// A pixel handed to a canvas: the font palette index and its resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub index: u8,
    pub color: Rgba,
}

/// Destination for composited glyphs.
///
/// Implementations are allocated by the caller at the size returned by
/// [`crate::layout::measure`]; the compositor only writes pixels and never
/// calls `set_pixel` outside `0..width` x `0..height`.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel);
}

/// How palette index 0 is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroIndexPolicy {
    /// Index 0 is background and is never written.
    #[default]
    Transparent,
    /// Every pixel is written; index 0 is opaque black.
    Opaque,
}

/// Draws strings of glyphs with a fixed index-0 policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    pub policy: ZeroIndexPolicy,
}

impl Compositor {
    pub fn new(policy: ZeroIndexPolicy) -> Self {
        Self { policy }
    }

    /// Color for a palette index, or `None` if nothing should be drawn.
    pub fn resolve(&self, font: &Font, index: u8) -> Option<Rgba> {
        if index == 0 {
            return match self.policy {
                ZeroIndexPolicy::Transparent => None,
                ZeroIndexPolicy::Opaque => Some(Rgba::black()),
            };
        }
        font.palette.get(index as usize).map(|c| c.opaque())
    }

    /// Draw `text` with the pen starting at `(x0, y0)`.
    ///
    /// Returns the total horizontal advance. Pixels that land outside the
    /// canvas are clipped.
    pub fn composite<C: Canvas>(
        &self,
        font: &Font,
        canvas: &mut C,
        x0: i32,
        y0: i32,
        text: &[u8],
    ) -> BmfResult<i32> {
        if text.is_empty() {
            return Err(BmfError::EmptyText);
        }

        let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);
        let mut x = x0;

        for &code in text {
            let glyph = font.glyph(code);
            let left = x as i64 + glyph.rel_x as i64;
            let top = y0 as i64 + glyph.rel_y as i64;

            for (j, row) in glyph.data.chunks_exact(glyph.width.max(1) as usize).enumerate() {
                let py = top + j as i64;
                if py < 0 || py >= canvas_h {
                    continue;
                }
                for (k, &index) in row.iter().enumerate() {
                    let px = left + k as i64;
                    if px < 0 || px >= canvas_w {
                        continue;
                    }
                    if let Some(color) = self.resolve(font, index) {
                        canvas.set_pixel(px as u32, py as u32, Pixel { index, color });
                    }
                }
            }

            x += advance(font, code);
        }

        Ok(x - x0)
    }
}

/// Composite with the default (transparent index 0) policy.
pub fn composite<C: Canvas>(
    font: &Font,
    canvas: &mut C,
    x0: i32,
    y0: i32,
    text: &[u8],
) -> BmfResult<i32> {
    Compositor::default().composite(font, canvas, x0, y0, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::model::Glyph;

    /// Records every write.
    struct Recorder {
        width: u32,
        height: u32,
        writes: Vec<(u32, u32, u8)>,
    }

    impl Recorder {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                writes: Vec::new(),
            }
        }
    }

    impl Canvas for Recorder {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
            self.writes.push((x, y, pixel.index));
        }
    }

    fn font() -> Font {
        let mut font = Font::new();
        font.line_height = 4;
        font.palette = vec![Rgb::new(0, 0, 0), Rgb::new(252, 0, 0)];
        font.set_glyph(b'A', Glyph::new(2, 2, 0, 1, 3, vec![1, 0, 0, 1]).unwrap());
        font
    }

    #[test]
    fn test_transparent_skips_zero() {
        let mut canvas = Recorder::new(10, 4);
        let advance = composite(&font(), &mut canvas, 0, 0, b"AA").unwrap();
        assert_eq!(advance, 6);
        assert_eq!(
            canvas.writes,
            vec![(0, 1, 1), (1, 2, 1), (3, 1, 1), (4, 2, 1)]
        );
    }

    #[test]
    fn test_opaque_writes_every_pixel() {
        let mut canvas = Recorder::new(10, 4);
        Compositor::new(ZeroIndexPolicy::Opaque)
            .composite(&font(), &mut canvas, 0, 0, b"A")
            .unwrap();
        assert_eq!(canvas.writes.len(), 4);
        assert_eq!(
            Compositor::new(ZeroIndexPolicy::Opaque).resolve(&font(), 0),
            Some(Rgba::black())
        );
    }

    #[test]
    fn test_clips_outside_canvas() {
        let mut canvas = Recorder::new(1, 2);
        composite(&font(), &mut canvas, 0, 0, b"A").unwrap();
        assert_eq!(canvas.writes, vec![(0, 1, 1)]);

        let mut canvas = Recorder::new(4, 4);
        composite(&font(), &mut canvas, -1, -1, b"A").unwrap();
        assert_eq!(canvas.writes, vec![(0, 1, 1)]);
    }

    #[test]
    fn test_missing_palette_entry_is_skipped() {
        let mut f = font();
        f.set_glyph(b'B', Glyph::new(1, 1, 0, 0, 1, vec![9]).unwrap());
        let mut canvas = Recorder::new(4, 4);
        composite(&f, &mut canvas, 0, 0, b"B").unwrap();
        assert!(canvas.writes.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let mut canvas = Recorder::new(4, 4);
        assert!(matches!(
            composite(&font(), &mut canvas, 0, 0, b""),
            Err(BmfError::EmptyText)
        ));
    }
}
