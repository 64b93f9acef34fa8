//! Palette and canvas colors.

use serde::{Deserialize, Serialize};

/// A palette entry with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new palette color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand a stored 6-bit triple (0..=63 per component) to 8 bits.
    ///
    /// Components above 63 clamp to 255, which stores back as 63.
    pub const fn from_stored(raw: [u8; 3]) -> Self {
        Self {
            r: raw[0].saturating_mul(4),
            g: raw[1].saturating_mul(4),
            b: raw[2].saturating_mul(4),
        }
    }

    /// Reduce to the stored 6-bit triple (truncating division by 4).
    pub const fn to_stored(self) -> [u8; 3] {
        [self.r / 4, self.g / 4, self.b / 4]
    }

    /// Opaque RGBA version of this color.
    pub const fn opaque(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, 255)
    }
}

/// A canvas pixel with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, the canvas background.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_scaling() {
        let c = Rgb::from_stored([63, 32, 0]);
        assert_eq!(c, Rgb::new(252, 128, 0));
        assert_eq!(c.to_stored(), [63, 32, 0]);
    }

    #[test]
    fn test_out_of_range_stored_clamps() {
        let c = Rgb::from_stored([64, 200, 63]);
        assert_eq!(c, Rgb::new(255, 255, 252));
        assert_eq!(c.to_stored(), [63, 63, 63]);
    }

    #[test]
    fn test_to_stored_truncates() {
        assert_eq!(Rgb::new(255, 3, 7).to_stored(), [63, 0, 1]);
    }
}
