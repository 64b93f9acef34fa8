//! BMF Bitmap Font Core
//!
//! This crate reads and writes the BMF bitmap font container and turns byte
//! strings into composited rasters using a font's glyphs.
//!
//! # Features
//!
//! - **Codec**: bit-exact decode/encode of the BMF header, palette, title and
//!   glyph table (format revisions up to 0x11)
//! - **Layout**: canvas measurement for a string of byte codes
//! - **Compositor**: glyph placement onto any [`Canvas`], with a configurable
//!   policy for palette index 0
//! - **Monospace detection**: tri-state result cached on the font
//! - **Deterministic PNG**: RGBA or indexed output with fixed settings
//!
//! # Example
//!
//! ```no_run
//! use bmfont_core::{render_text, Font, RenderConfig};
//!
//! let font = Font::open("fonts/small.bmf").unwrap();
//! let result = render_text(&font, b"Hello", &RenderConfig::default()).unwrap();
//! std::fs::write("hello.png", &result.png_data).unwrap();
//! ```
//!
//! # Signedness
//!
//! The earliest format revision stored the vertical metrics and the add-space
//! value as unsigned bytes. This crate always uses the later convention:
//! `line_height`, `size_over`, `size_under`, `add_space`, `size_inner`,
//! `rel_x` and `rel_y` are signed; `shift`, `width` and `height` are unsigned.

pub mod codec;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod monospace;
pub mod png;
pub mod raster;
pub mod render;

// Re-export main types for convenience
pub use codec::{decode, decode_from, encode, encode_to};
pub use color::{Rgb, Rgba};
pub use compositor::{composite, Canvas, Compositor, Pixel, ZeroIndexPolicy};
pub use config::{CanvasKind, CompressionLevel, RenderConfig};
pub use error::{BmfError, BmfResult, Section};
pub use layout::{measure, TextMetrics};
pub use model::{Font, Glyph, GlyphTable};
pub use monospace::{monospace_check, Monospace};
pub use png::{PngConfig, PngError};
pub use raster::{IndexedCanvas, RgbaCanvas};
pub use render::{rasterize, render_text, RenderResult};
