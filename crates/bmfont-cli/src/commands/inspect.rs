//! Inspect command implementation
//!
//! Prints the header, palette and glyph table of a BMF font.

use anyhow::{Context, Result};
use bmfont_core::{Font, Monospace};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, GlyphEntry, InspectResult};
use super::load_font_json;

/// Run the inspect command
///
/// # Arguments
/// * `font_path` - Path to the BMF file
/// * `glyphs` - Whether to list every present glyph
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the font could not be loaded
pub fn run(font_path: &str, glyphs: bool, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(font_path, glyphs)
    } else {
        run_human(font_path, glyphs)
    }
}

/// Build the JSON payload for a loaded font.
pub fn inspect_font(font: &mut Font, file: &str, glyphs: bool) -> InspectResult {
    let monospace = font.monospace();
    let glyph_list: Option<Vec<GlyphEntry>> = glyphs.then(|| {
        font.glyphs()
            .present()
            .map(|(code, glyph)| GlyphEntry {
                code,
                glyph: glyph.clone(),
            })
            .collect()
    });

    InspectResult {
        file: file.to_string(),
        version: font.version,
        line_height: font.line_height,
        size_over: font.size_over,
        size_under: font.size_under,
        add_space: font.add_space,
        size_inner: font.size_inner,
        used_colors: font.used_colors,
        highest_color: font.highest_color,
        reserved: font.reserved_u32(),
        palette: font.palette.clone(),
        title: font.title_str(),
        num_chars: font.num_chars,
        glyph_count: font.glyphs().present_count(),
        monospace,
        glyphs: glyph_list,
    }
}

/// One-line description of a monospace scan.
pub fn describe_monospace(monospace: Monospace) -> String {
    match monospace {
        Monospace::Unknown => "not computed".to_string(),
        Monospace::Empty => "no advancing glyphs".to_string(),
        Monospace::Uniform { shift } => format!("yes (shift {})", shift),
        Monospace::NonUniform { first_divergent } => {
            format!("no (first divergent code {})", first_divergent)
        }
    }
}

fn run_human(font_path: &str, glyphs: bool) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), font_path);

    let mut font =
        Font::open(font_path).with_context(|| format!("Failed to load font: {}", font_path))?;
    let info = inspect_font(&mut font, font_path, glyphs);

    println!();
    println!("  {:<14} 0x{:02X}", "Version:".dimmed(), info.version);
    println!("  {:<14} {:?}", "Title:".dimmed(), info.title);
    println!(
        "  {:<14} {} (over {}, under {}, inner {})",
        "Line height:".dimmed(),
        info.line_height,
        info.size_over,
        info.size_under,
        info.size_inner
    );
    println!("  {:<14} {}", "Add space:".dimmed(), info.add_space);
    println!(
        "  {:<14} {} (used {}, highest {})",
        "Palette:".dimmed(),
        info.palette.len(),
        info.used_colors,
        info.highest_color
    );
    println!("  {:<14} 0x{:08X}", "Reserved:".dimmed(), info.reserved);
    println!(
        "  {:<14} {} (declared {})",
        "Glyphs:".dimmed(),
        info.glyph_count,
        info.num_chars
    );
    println!(
        "  {:<14} {}",
        "Monospace:".dimmed(),
        describe_monospace(info.monospace)
    );

    if let Some(entries) = &info.glyphs {
        println!();
        println!(
            "  {}",
            format!(
                "{:>4} {:>4} {:>5} {:>5} {:>5} {:>5} {:>5}",
                "code", "chr", "w", "h", "rel_x", "rel_y", "shift"
            )
            .bold()
        );
        for entry in entries {
            let printable = if entry.code.is_ascii_graphic() {
                (entry.code as char).to_string()
            } else {
                String::new()
            };
            println!(
                "  {:>4} {:>4} {:>5} {:>5} {:>5} {:>5} {:>5}",
                entry.code,
                printable,
                entry.glyph.width,
                entry.glyph.height,
                entry.glyph.rel_x,
                entry.glyph.rel_y,
                entry.glyph.shift
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(font_path: &str, glyphs: bool) -> Result<ExitCode> {
    let Some(mut font) = load_font_json(font_path)? else {
        return Ok(ExitCode::from(1));
    };
    let info = inspect_font(&mut font, font_path, glyphs);
    CommandOutput::success(info).print()?;
    Ok(ExitCode::SUCCESS)
}
