//! Property-based tests for the BMF codec and layout using proptest.
//!
//! These verify that decoding never panics on arbitrary input, that every
//! proper prefix of a valid stream is reported as truncated, and that
//! measured canvases always contain what the compositor draws.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bmfont-tests --test proptest_codec
//! ```

use proptest::prelude::*;

use bmfont_core::codec::BMF_MAGIC;
use bmfont_core::{
    decode, encode, measure, BmfError, Canvas, Compositor, Font, Glyph, Pixel, Rgb,
    ZeroIndexPolicy,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_glyph(colors: u8) -> impl Strategy<Value = Glyph> {
    (0u8..6, 0u8..6, any::<i8>(), any::<i8>(), any::<u8>()).prop_flat_map(
        move |(width, height, rel_x, rel_y, shift)| {
            let len = width as usize * height as usize;
            prop::collection::vec(0..=colors, len).prop_map(move |data| Glyph {
                width,
                height,
                rel_x,
                rel_y,
                shift,
                data,
            })
        },
    )
}

fn arb_font() -> impl Strategy<Value = Font> {
    (
        0u8..=0x11,
        any::<[i8; 5]>(),
        any::<[u8; 4]>(),
        prop::collection::vec(any::<(u8, u8, u8)>(), 0..8),
        prop::collection::vec(any::<u8>(), 0..40),
    )
        .prop_flat_map(|(version, metrics, reserved, colors, title)| {
            let max_index = colors.len() as u8;
            prop::collection::btree_map(any::<u8>(), arb_glyph(max_index), 0..12).prop_map(
                move |glyphs| {
                    let mut font = Font::new();
                    font.version = version;
                    font.line_height = metrics[0];
                    font.size_over = metrics[1];
                    font.size_under = metrics[2];
                    font.add_space = metrics[3];
                    font.size_inner = metrics[4];
                    font.reserved = reserved;
                    // Stored palette precision is 6 bits
                    font.palette = colors
                        .iter()
                        .map(|&(r, g, b)| Rgb::new(r & 0xFC, g & 0xFC, b & 0xFC))
                        .collect();
                    font.title = title.clone();
                    // Default-looking glyphs are dropped on encode, offsets and all
                    for (code, glyph) in glyphs.into_iter().filter(|(_, g)| !g.is_default()) {
                        font.set_glyph(code, glyph);
                    }
                    font
                },
            )
        })
}

/// A canvas that fails the property on any out-of-range write.
struct BoundsCanvas {
    width: u32,
    height: u32,
    violations: usize,
}

impl Canvas for BoundsCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, _pixel: Pixel) {
        if x >= self.width || y >= self.height {
            self.violations += 1;
        }
    }
}

// ============================================================================
// Decoder robustness
// ============================================================================

proptest! {
    /// Arbitrary bytes never panic the decoder.
    #[test]
    fn decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode(&data);
    }

    /// Arbitrary bytes after a valid magic never panic either.
    #[test]
    fn decode_after_magic_never_panics(rest in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut data = BMF_MAGIC.to_vec();
        data.extend_from_slice(&rest);
        let bad_magic = matches!(decode(&data), Err(BmfError::InvalidMagic { .. }));
        prop_assert!(!bad_magic);
    }
}

// ============================================================================
// Codec round trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Encoding then decoding reproduces every stored field.
    #[test]
    fn round_trip_preserves_font(font in arb_font()) {
        let bytes = encode(&font).unwrap();
        let back = decode(&bytes).unwrap();

        prop_assert_eq!(&back, &font);
        prop_assert_eq!(encode(&back).unwrap(), bytes);
    }

    /// Every proper prefix of a valid stream is truncated input.
    #[test]
    fn prefixes_are_truncated(font in arb_font(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&font).unwrap();
        let cut = cut.index(bytes.len());
        let is_truncated = matches!(decode(&bytes[..cut]), Err(BmfError::TruncatedInput { .. }));
        prop_assert!(is_truncated, "prefix of {} bytes", cut);
    }
}

// ============================================================================
// Layout containment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The compositor never writes outside the measured canvas.
    #[test]
    fn composite_stays_in_bounds(
        font in arb_font(),
        text in prop::collection::vec(any::<u8>(), 1..16),
        gap in -4i32..8,
        opaque in any::<bool>(),
    ) {
        let mut font = font;
        font.letter_gap = gap;
        let metrics = measure(&font, &text).unwrap();
        let mut canvas = BoundsCanvas {
            width: metrics.width,
            height: metrics.height,
            violations: 0,
        };
        let policy = if opaque { ZeroIndexPolicy::Opaque } else { ZeroIndexPolicy::Transparent };
        Compositor::new(policy)
            .composite(&font, &mut canvas, metrics.origin_x, 0, &text)
            .unwrap();
        prop_assert_eq!(canvas.violations, 0);
        prop_assert!(metrics.height >= 1);
    }
}
