//! Decode rendered PNGs back into pixels for assertions.

use png::{BitDepth, ColorType};

/// A decoded 8-bit PNG image.
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
    pub bit_depth: BitDepth,
    /// Raw samples, one row after another.
    pub data: Vec<u8>,
    /// PLTE chunk contents for indexed images.
    pub palette: Option<Vec<u8>>,
    /// tRNS chunk contents, if present.
    pub trns: Option<Vec<u8>>,
}

impl DecodedPng {
    /// RGBA sample at (x, y). Panics on non-RGBA images.
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        assert_eq!(self.color_type, ColorType::Rgba, "not an RGBA image");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Palette index at (x, y). Panics on non-indexed images.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        assert_eq!(self.color_type, ColorType::Indexed, "not an indexed image");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels with nonzero alpha (RGBA) or nonzero index (indexed).
    pub fn opaque_count(&self) -> usize {
        match self.color_type {
            ColorType::Rgba => self.data.chunks_exact(4).filter(|px| px[3] != 0).count(),
            ColorType::Indexed => self.data.iter().filter(|&&i| i != 0).count(),
            other => panic!("unexpected color type {:?}", other),
        }
    }
}

/// Decode PNG bytes without any color transformations.
pub fn decode_png(bytes: &[u8]) -> DecodedPng {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).expect("Failed to decode PNG frame");
    data.truncate(frame.buffer_size());

    let info = reader.info();
    DecodedPng {
        width: frame.width,
        height: frame.height,
        color_type: frame.color_type,
        bit_depth: frame.bit_depth,
        data,
        palette: info.palette.as_ref().map(|p| p.to_vec()),
        trns: info.trns.as_ref().map(|t| t.to_vec()),
    }
}
