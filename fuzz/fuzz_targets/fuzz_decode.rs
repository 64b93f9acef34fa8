#![no_main]

use bmfont_core::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must encode, and re-decoding that must be stable.
    if let Ok(font) = decode(data) {
        if let Ok(bytes) = encode(&font) {
            let again = decode(&bytes).expect("re-encoded font must decode");
            assert!(again.glyphs().present().eq(font.glyphs().present()));
            assert_eq!(encode(&again).expect("stable encode"), bytes);
        }
    }
});
