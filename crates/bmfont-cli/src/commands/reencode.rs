//! Reencode command implementation
//!
//! Decodes a font and writes it back out, reporting whether the bytes survived
//! unchanged.

use anyhow::{Context, Result};
use bmfont_core::{BmfResult, Font};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, ReencodeResult};

/// Decode `input` and encode it again.
///
/// Returns the new bytes. Palette components above 63 and a stale glyph
/// count are the usual reasons the output differs from the input.
pub fn reencode_bytes(input: &[u8]) -> BmfResult<Vec<u8>> {
    Font::from_reader(input)?.to_bytes()
}

/// Run the reencode command
///
/// # Arguments
/// * `font_path` - Path to the BMF file
/// * `out_path` - Path for the re-encoded file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(font_path: &str, out_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(font_path, out_path)
    } else {
        run_human(font_path, out_path)
    }
}

fn run_human(font_path: &str, out_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Re-encoding:".cyan().bold(), font_path);

    let input =
        fs::read(font_path).with_context(|| format!("Failed to read font: {}", font_path))?;
    let output = reencode_bytes(&input)
        .with_context(|| format!("Failed to re-encode font: {}", font_path))?;
    fs::write(out_path, &output)
        .with_context(|| format!("Failed to write output: {}", out_path))?;

    println!(
        "{} {} ({} -> {} bytes)",
        "SUCCESS".green().bold(),
        out_path,
        input.len(),
        output.len()
    );
    if input == output {
        println!("  {}", "byte-identical".dimmed());
    } else {
        println!("  {}", "output differs from input".yellow());
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(font_path: &str, out_path: &str) -> Result<ExitCode> {
    let fail = |error: JsonError| -> Result<ExitCode> {
        CommandOutput::<ReencodeResult>::failure(vec![error]).print()?;
        Ok(ExitCode::from(1))
    };

    let input = match fs::read(font_path) {
        Ok(input) => input,
        Err(e) => {
            return fail(JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(font_path))
        }
    };
    let output = match reencode_bytes(&input) {
        Ok(output) => output,
        Err(e) => return fail(JsonError::from_bmf(&e).with_file(font_path)),
    };
    if let Err(e) = fs::write(out_path, &output) {
        return fail(JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(out_path));
    }

    CommandOutput::success(ReencodeResult {
        output: out_path.to_string(),
        input_bytes: input.len(),
        output_bytes: output.len(),
        identical: input == output,
    })
    .print()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmfont_core::{encode, BmfError, Glyph, Rgb};

    #[test]
    fn test_reencode_canonical_font_is_identical() {
        let mut font = Font::new();
        font.palette = vec![Rgb::new(4, 8, 12)];
        font.set_glyph(b'x', Glyph::new(1, 1, 0, 0, 1, vec![1]).unwrap());
        let bytes = encode(&font).unwrap();
        assert_eq!(reencode_bytes(&bytes).unwrap(), bytes);
    }

    #[test]
    fn test_reencode_rejects_garbage() {
        assert!(matches!(
            reencode_bytes(b"not a font"),
            Err(BmfError::InvalidMagic { .. })
        ));
    }
}
