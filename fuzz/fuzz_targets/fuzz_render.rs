#![no_main]

use bmfont_core::{rasterize, Font, RenderConfig, ZeroIndexPolicy};
use libfuzzer_sys::fuzz_target;

// First byte picks options, the next 16 are the text, the rest is the font.
fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    let (opts, rest) = data.split_at(1);
    let (text, font_bytes) = rest.split_at(16);

    let Ok(font) = Font::from_bytes(font_bytes) else {
        return;
    };
    let config = RenderConfig {
        letter_gap: Some((opts[0] & 0x0F) as i32 - 8),
        zero_index: if opts[0] & 0x80 != 0 {
            ZeroIndexPolicy::Opaque
        } else {
            ZeroIndexPolicy::Transparent
        },
        ..Default::default()
    };
    let _ = rasterize(&font, text, &config);
});
