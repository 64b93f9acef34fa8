//! Render command implementation
//!
//! Draws a string with a BMF font and writes the result as PNG.

use anyhow::{Context, Result};
use bmfont_core::{render_text, BmfResult, CanvasKind, Font, RenderConfig, ZeroIndexPolicy};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, RenderOutput};
use super::load_font_json;

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Optional JSON config file, applied before the flags below.
    pub config: Option<String>,
    pub letter_gap: Option<i32>,
    /// Paint palette index 0 as opaque black.
    pub opaque_zero: bool,
    /// Write an 8-bit palette PNG.
    pub indexed: bool,
}

impl RenderOptions {
    /// Resolve the effective render config.
    pub fn resolve(&self) -> BmfResult<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(Path::new(path))?,
            None => RenderConfig::default(),
        };
        if let Some(gap) = self.letter_gap {
            config.letter_gap = Some(gap);
        }
        if self.opaque_zero {
            config.zero_index = ZeroIndexPolicy::Opaque;
        }
        if self.indexed {
            config.canvas = CanvasKind::Indexed;
        }
        log::debug!("render config: {:?}", config);
        Ok(config)
    }
}

/// Run the render command
///
/// `text` is drawn byte by byte, so each byte of its UTF-8 encoding selects
/// one glyph slot.
///
/// # Arguments
/// * `font_path` - Path to the BMF file
/// * `text` - Text to draw
/// * `out_path` - PNG output path
/// * `options` - Config file and overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    font_path: &str,
    text: &str,
    out_path: &str,
    options: &RenderOptions,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(font_path, text, out_path, options)
    } else {
        run_human(font_path, text, out_path, options)
    }
}

fn run_human(
    font_path: &str,
    text: &str,
    out_path: &str,
    options: &RenderOptions,
) -> Result<ExitCode> {
    println!("{} {:?}", "Rendering:".cyan().bold(), text);
    println!("{} {}", "Font:".dimmed(), font_path);

    let config = options.resolve().with_context(|| {
        format!(
            "Failed to load config: {}",
            options.config.as_deref().unwrap_or("(none)")
        )
    })?;
    let font =
        Font::open(font_path).with_context(|| format!("Failed to load font: {}", font_path))?;

    let result = render_text(&font, text.as_bytes(), &config)
        .with_context(|| format!("Failed to render {:?}", text))?;
    fs::write(out_path, &result.png_data)
        .with_context(|| format!("Failed to write output: {}", out_path))?;

    println!(
        "{} {} ({}x{}, {} bytes)",
        "SUCCESS".green().bold(),
        out_path,
        result.width,
        result.height,
        result.png_data.len()
    );
    println!("{} {}", "Hash:".dimmed(), result.hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    font_path: &str,
    text: &str,
    out_path: &str,
    options: &RenderOptions,
) -> Result<ExitCode> {
    let config = match options.resolve() {
        Ok(config) => config,
        Err(e) => {
            let mut error = JsonError::from_bmf(&e);
            if let Some(path) = &options.config {
                error = error.with_file(path);
            }
            CommandOutput::<RenderOutput>::failure(vec![error]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let Some(font) = load_font_json(font_path)? else {
        return Ok(ExitCode::from(1));
    };

    let result = match render_text(&font, text.as_bytes(), &config) {
        Ok(result) => result,
        Err(e) => {
            let error = JsonError::from_bmf(&e).with_file(font_path);
            CommandOutput::<RenderOutput>::failure(vec![error]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    if let Err(e) = fs::write(out_path, &result.png_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(out_path);
        CommandOutput::<RenderOutput>::failure(vec![error]).print()?;
        return Ok(ExitCode::from(1));
    }

    CommandOutput::success(RenderOutput {
        output: out_path.to_string(),
        width: result.width,
        height: result.height,
        advance: result.advance,
        bytes: result.png_data.len(),
        hash: result.hash,
    })
    .print()?;
    Ok(ExitCode::SUCCESS)
}
