//! Tests for measurement, compositing and monospace detection.

use bmfont_core::{
    measure, rasterize, Canvas, Compositor, Font, Glyph, Monospace, Pixel, RenderConfig, Rgb,
    ZeroIndexPolicy,
};

/// Canvas that records writes and fails loudly on out-of-range ones.
struct StrictCanvas {
    width: u32,
    height: u32,
    touched: Vec<(u32, u32)>,
}

impl Canvas for StrictCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, _pixel: Pixel) {
        assert!(x < self.width && y < self.height, "write at ({}, {})", x, y);
        self.touched.push((x, y));
    }
}

fn proportional_font() -> Font {
    let mut font = Font::new();
    font.line_height = 9;
    font.size_over = -7;
    font.size_under = 2;
    font.add_space = 1;
    font.palette = vec![Rgb::new(0, 0, 0), Rgb::new(200, 200, 200)];
    font.set_glyph(b' ', Glyph::spacing(3));
    font.set_glyph(b'i', Glyph::new(1, 6, 0, 1, 2, vec![1; 6]).unwrap());
    font.set_glyph(b'm', Glyph::new(5, 4, 0, 3, 6, vec![1; 20]).unwrap());
    font.set_glyph(b'j', Glyph::new(3, 8, -2, 1, 2, vec![1; 24]).unwrap());
    font.set_glyph(b'W', Glyph::new(7, 7, 0, 0, 8, vec![1; 49]).unwrap());
    font
}

#[test]
fn test_composite_stays_inside_measured_rect() {
    let mut font = proportional_font();
    for gap in [-1, 0, 3] {
        font.letter_gap = gap;
        for text in [&b"i"[..], b"jim", b"W m j", b"jjjj", b"m  W", b"?j"] {
            let metrics = measure(&font, text).unwrap();
            let mut canvas = StrictCanvas {
                width: metrics.width,
                height: metrics.height,
                touched: Vec::new(),
            };
            Compositor::new(ZeroIndexPolicy::Opaque)
                .composite(&font, &mut canvas, metrics.origin_x, 0, text)
                .unwrap();
        }
    }
}

#[test]
fn test_right_edge_reaches_canvas_width() {
    let font = proportional_font();
    let metrics = measure(&font, b"imW").unwrap();
    let mut canvas = StrictCanvas {
        width: metrics.width,
        height: metrics.height,
        touched: Vec::new(),
    };
    Compositor::default()
        .composite(&font, &mut canvas, metrics.origin_x, 0, b"imW")
        .unwrap();

    let max_x = canvas.touched.iter().map(|&(x, _)| x).max().unwrap();
    assert_eq!(max_x + 1, metrics.width);
}

#[test]
fn test_advance_matches_sum_of_shifts() {
    let mut font = proportional_font();
    font.letter_gap = 2;
    let mut canvas = StrictCanvas {
        width: 100,
        height: 20,
        touched: Vec::new(),
    };
    let advance = Compositor::default()
        .composite(&font, &mut canvas, 5, 0, b"mi ")
        .unwrap();
    assert_eq!(advance, (6 + 1 + 2) + (2 + 1 + 2) + (3 + 1 + 2));
}

#[test]
fn test_overhang_glyph_visible() {
    let font = proportional_font();
    let canvas = rasterize(&font, b"j", &RenderConfig::default()).unwrap();
    assert_eq!(canvas.width, 3);
    assert_eq!(canvas.painted(), 3 * 8);
}

#[test]
fn test_height_uses_over_under_when_larger() {
    let mut font = proportional_font();
    font.line_height = 4;
    assert_eq!(measure(&font, b"i").unwrap().height, 9);
}

#[test]
fn test_monospace_uniform() {
    let mut font = Font::new();
    for code in 32..127u8 {
        font.set_glyph(code, Glyph::spacing(6));
    }
    assert_eq!(font.monospace(), Monospace::Uniform { shift: 6 });
    assert_eq!(font.monospace().uniform_shift(), Some(6));
}

#[test]
fn test_monospace_first_divergent() {
    let mut font = Font::new();
    font.set_glyph(65, Glyph::spacing(10));
    font.set_glyph(66, Glyph::spacing(12));
    assert_eq!(
        font.monospace(),
        Monospace::NonUniform {
            first_divergent: 66
        }
    );
}

#[test]
fn test_monospace_rescan() {
    let mut font = proportional_font();
    assert!(!font.monospace().is_uniform());

    let mut empty = Font::new();
    assert_eq!(empty.cached_monospace(), Monospace::Unknown);
    assert_eq!(empty.rescan_monospace(), Monospace::Empty);
    assert_eq!(empty.cached_monospace(), Monospace::Empty);
}
