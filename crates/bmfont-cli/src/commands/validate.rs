//! Validate command implementation
//!
//! Decodes a font file and reports whether it is well formed.

use anyhow::Result;
use bmfont_core::{BmfResult, Font};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, JsonError, ValidateResult};

/// Run the validate command
///
/// # Arguments
/// * `font_path` - Path to the BMF file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(font_path: &str, json_output: bool) -> Result<ExitCode> {
    let outcome = check(font_path);
    if json_output {
        run_json(font_path, outcome)
    } else {
        run_human(font_path, outcome)
    }
}

/// Decode the file and check that it would encode again.
pub fn check(font_path: &str) -> BmfResult<ValidateResult> {
    let font = Font::open(font_path)?;
    font.validate()?;
    Ok(ValidateResult {
        file: font_path.to_string(),
        version: font.version,
        glyph_count: font.glyphs().present_count(),
        colors: font.colors(),
    })
}

fn run_human(font_path: &str, outcome: BmfResult<ValidateResult>) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), font_path);

    match outcome {
        Ok(result) => {
            println!(
                "{} version 0x{:02X}, {} glyphs, {} colors",
                "SUCCESS".green().bold(),
                result.version,
                result.glyph_count,
                result.colors
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}

fn run_json(font_path: &str, outcome: BmfResult<ValidateResult>) -> Result<ExitCode> {
    match outcome {
        Ok(result) => {
            CommandOutput::success(result).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = JsonError::from_bmf(&e).with_file(font_path);
            CommandOutput::<ValidateResult>::failure(vec![error]).print()?;
            Ok(ExitCode::from(1))
        }
    }
}
