//! Text to PNG: measure, allocate, composite, encode.

use serde::Serialize;

use crate::compositor::{Canvas, Compositor};
use crate::config::{CanvasKind, RenderConfig};
use crate::error::BmfResult;
use crate::layout::{measure, TextMetrics};
use crate::model::Font;
use crate::png::{write_indexed_to_vec_with_hash, write_rgba_to_vec_with_hash};
use crate::raster::{IndexedCanvas, RgbaCanvas};

/// Result of rendering a string.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// PNG-encoded image.
    #[serde(skip)]
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    pub width: u32,
    pub height: u32,
    /// Total pen advance returned by the compositor.
    pub advance: i32,
}

/// Apply the config's letter gap override, if any.
fn with_overrides<'a>(font: &'a Font, config: &RenderConfig) -> std::borrow::Cow<'a, Font> {
    match config.letter_gap {
        Some(gap) if gap != font.letter_gap => {
            let mut owned = font.clone();
            owned.letter_gap = gap;
            std::borrow::Cow::Owned(owned)
        }
        _ => std::borrow::Cow::Borrowed(font),
    }
}

/// Canvas size for `text`; width is at least 1 so the result is encodable.
fn canvas_size(metrics: &TextMetrics) -> (u32, u32) {
    (metrics.width.max(1), metrics.height)
}

fn draw<C: Canvas>(
    font: &Font,
    canvas: &mut C,
    metrics: &TextMetrics,
    text: &[u8],
    config: &RenderConfig,
) -> BmfResult<i32> {
    Compositor::new(config.zero_index).composite(font, canvas, metrics.origin_x, 0, text)
}

/// Draw `text` onto a freshly allocated RGBA canvas.
pub fn rasterize(font: &Font, text: &[u8], config: &RenderConfig) -> BmfResult<RgbaCanvas> {
    let font = with_overrides(font, config);
    let metrics = measure(&font, text)?;
    let (width, height) = canvas_size(&metrics);

    let mut canvas = RgbaCanvas::new(width, height);
    draw(&font, &mut canvas, &metrics, text, config)?;
    Ok(canvas)
}

/// Render `text` to PNG bytes.
pub fn render_text(font: &Font, text: &[u8], config: &RenderConfig) -> BmfResult<RenderResult> {
    let font = with_overrides(font, config);
    let metrics = measure(&font, text)?;
    let (width, height) = canvas_size(&metrics);
    let png_config = config.compression.png_config();

    let (png_data, hash, advance) = match config.canvas {
        CanvasKind::Rgba => {
            let mut canvas = RgbaCanvas::new(width, height);
            let advance = draw(&font, &mut canvas, &metrics, text, config)?;
            let (data, hash) = write_rgba_to_vec_with_hash(&canvas, &png_config)?;
            (data, hash, advance)
        }
        CanvasKind::Indexed => {
            let mut canvas = IndexedCanvas::for_font(width, height, &font, config.zero_index);
            let advance = draw(&font, &mut canvas, &metrics, text, config)?;
            let (data, hash) = write_indexed_to_vec_with_hash(&canvas, &png_config)?;
            (data, hash, advance)
        }
    };

    log::info!(
        "rendered {} chars to {}x{} PNG ({} bytes)",
        text.len(),
        width,
        height,
        png_data.len()
    );

    Ok(RenderResult {
        png_data,
        hash,
        width,
        height,
        advance,
    })
}
