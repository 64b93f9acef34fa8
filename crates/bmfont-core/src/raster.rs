//! Concrete canvases: truecolor RGBA and palette-indexed.

use crate::color::{Rgb, Rgba};
use crate::compositor::{Canvas, Compositor, Pixel, ZeroIndexPolicy};
use crate::model::Font;

/// An RGBA canvas with a transparent background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaCanvas {
    pub width: u32,
    pub height: u32,
    /// Pixel data, row-major.
    pub data: Vec<Rgba>,
}

impl RgbaCanvas {
    /// Allocate a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Rgba::transparent(); width as usize * height as usize],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Number of non-transparent pixels.
    pub fn painted(&self) -> usize {
        self.data.iter().filter(|p| p.a != 0).count()
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }
}

impl Canvas for RgbaCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = pixel.color;
    }
}

/// A palette canvas.
///
/// Entry 0 of its palette is a transparent background; entry `k + 1` holds
/// the color of font palette index `k`, so every font index (including 0
/// under the opaque policy) stays distinct from the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCanvas {
    pub width: u32,
    pub height: u32,
    /// Canvas palette indices, row-major.
    pub data: Vec<u8>,
    /// PNG palette, background first.
    pub palette: Vec<Rgb>,
    /// Alpha for each palette entry.
    pub alpha: Vec<u8>,
}

impl IndexedCanvas {
    /// Maximum palette entries in an 8-bit indexed image.
    pub const MAX_ENTRIES: usize = 256;

    /// Allocate a canvas whose palette mirrors the font's.
    pub fn for_font(width: u32, height: u32, font: &Font, policy: ZeroIndexPolicy) -> Self {
        let compositor = Compositor::new(policy);
        let font_entries = font.palette.len().max(1).min(Self::MAX_ENTRIES - 1);

        let mut palette = Vec::with_capacity(font_entries + 1);
        let mut alpha = Vec::with_capacity(font_entries + 1);
        palette.push(Rgb::new(0, 0, 0));
        alpha.push(0);
        for index in 0..font_entries {
            match compositor.resolve(font, index as u8) {
                Some(c) => {
                    palette.push(Rgb::new(c.r, c.g, c.b));
                    alpha.push(c.a);
                }
                None => {
                    palette.push(Rgb::new(0, 0, 0));
                    alpha.push(0);
                }
            }
        }

        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
            palette,
            alpha,
        }
    }

    /// Canvas index at the given coordinates (0 is background).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// PNG `PLTE` chunk contents.
    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}

impl Canvas for IndexedCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let entry = pixel.index as usize + 1;
        if entry < self.palette.len() {
            let idx = y as usize * self.width as usize + x as usize;
            self.data[idx] = entry as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_canvas_starts_transparent() {
        let canvas = RgbaCanvas::new(3, 2);
        assert_eq!(canvas.data.len(), 6);
        assert_eq!(canvas.painted(), 0);
        assert_eq!(canvas.to_rgba8().len(), 24);
    }

    #[test]
    fn test_indexed_palette_layout() {
        let mut font = Font::new();
        font.palette = vec![Rgb::new(4, 4, 4), Rgb::new(252, 0, 0)];

        let canvas = IndexedCanvas::for_font(2, 2, &font, ZeroIndexPolicy::Transparent);
        assert_eq!(canvas.palette.len(), 3);
        assert_eq!(canvas.alpha, vec![0, 0, 255]);
        assert_eq!(canvas.palette[2], Rgb::new(252, 0, 0));

        let canvas = IndexedCanvas::for_font(2, 2, &font, ZeroIndexPolicy::Opaque);
        assert_eq!(canvas.alpha, vec![0, 255, 255]);
        assert_eq!(canvas.palette[1], Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_indexed_set_pixel_offsets_by_one() {
        let mut font = Font::new();
        font.palette = vec![Rgb::new(0, 0, 0), Rgb::new(8, 8, 8)];
        let mut canvas = IndexedCanvas::for_font(2, 1, &font, ZeroIndexPolicy::Transparent);
        canvas.set_pixel(
            1,
            0,
            Pixel {
                index: 1,
                color: Rgba::new(8, 8, 8, 255),
            },
        );
        assert_eq!(canvas.data, vec![0, 2]);
    }
}
