//! Test fixture utilities: sample fonts and temporary font files.

use std::fs;
use std::path::{Path, PathBuf};

use bmfont_core::{encode, Font, Glyph, Rgb};
use tempfile::TempDir;

/// Palette shared by the sample fonts: index 0 black, 1 white, 2 red.
pub fn sample_palette() -> Vec<Rgb> {
    vec![
        Rgb::new(0, 0, 0),
        Rgb::new(252, 252, 252),
        Rgb::new(252, 0, 0),
    ]
}

/// A glyph whose border uses `ink` and whose interior is index 0.
pub fn outlined_glyph(width: u8, height: u8, rel_x: i8, rel_y: i8, shift: u8, ink: u8) -> Glyph {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for j in 0..height {
        for k in 0..width {
            let edge = j == 0 || k == 0 || j + 1 == height || k + 1 == width;
            data.push(if edge { ink } else { 0 });
        }
    }
    Glyph {
        width,
        height,
        rel_x,
        rel_y,
        shift,
        data,
    }
}

/// A proportional font with a descender and a left overhang.
///
/// Baseline sits 7 pixels below the top of the line. Glyphs:
/// `' '` (spacing only), `'A'`, `'B'`, `'i'`, `'j'` (overhangs left),
/// `'W'` (wider than its advance) and `'.'` drawn in red.
pub fn sample_font() -> Font {
    let mut font = Font::new();
    font.line_height = 10;
    font.size_over = -7;
    font.size_under = 3;
    font.add_space = 1;
    font.size_inner = 4;
    font.used_colors = 3;
    font.highest_color = 2;
    font.palette = sample_palette();
    font.title = b"Sample 7px".to_vec();

    font.set_glyph(b' ', Glyph::spacing(3));
    font.set_glyph(b'A', outlined_glyph(5, 7, 0, 0, 5, 1));
    font.set_glyph(b'B', outlined_glyph(4, 7, 0, 0, 4, 1));
    font.set_glyph(b'i', outlined_glyph(1, 5, 0, 2, 1, 1));
    font.set_glyph(b'j', outlined_glyph(3, 8, -2, 2, 1, 1));
    font.set_glyph(b'W', outlined_glyph(7, 7, 0, 0, 6, 1));
    font.set_glyph(b'.', outlined_glyph(1, 1, 0, 6, 1, 2));
    font
}

/// A font where every digit advances by 6 pixels.
pub fn mono_font() -> Font {
    let mut font = Font::new();
    font.line_height = 8;
    font.palette = sample_palette();
    font.title = b"Mono digits".to_vec();
    for code in b'0'..=b'9' {
        font.set_glyph(code, outlined_glyph(5, 7, 0, 0, 6, 1));
    }
    font
}

/// A temporary directory holding font files for CLI tests.
pub struct FontFixture {
    pub root: TempDir,
}

impl FontFixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of `name` inside the fixture, as a string for CLI arguments.
    pub fn file(&self, name: &str) -> String {
        self.root.path().join(name).to_string_lossy().into_owned()
    }

    /// Encode `font` and write it as `name`.
    pub fn write_font(&self, name: &str, font: &Font) -> PathBuf {
        let bytes = encode(font).expect("Failed to encode fixture font");
        self.write_bytes(name, &bytes)
    }

    /// Write raw bytes as `name`.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}

impl Default for FontFixture {
    fn default() -> Self {
        Self::new()
    }
}
