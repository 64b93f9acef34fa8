//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints exactly one
//! [`CommandOutput`] object to stdout instead of colored text.

use anyhow::Result;
use bmfont_core::{BmfError, Glyph, Monospace, Rgb};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "BMF_001";
    /// Stream does not start with the BMF magic
    pub const INVALID_MAGIC: &str = "BMF_002";
    /// Format revision newer than supported
    pub const UNSUPPORTED_VERSION: &str = "BMF_003";
    /// Stream ended early
    pub const TRUNCATED: &str = "BMF_004";
    /// Glyph count above 256
    pub const TOO_MANY_GLYPHS: &str = "BMF_005";
    /// Font cannot be encoded as-is
    pub const INVALID_FONT_STATE: &str = "BMF_006";
    /// Render called with empty text
    pub const EMPTY_TEXT: &str = "BMF_007";
    /// PNG encoding failed
    pub const PNG: &str = "BMF_008";
    /// Render configuration could not be parsed
    pub const CONFIG: &str = "BMF_009";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "BMF_010";
}

/// Maps a library error to its stable code.
pub fn error_code(err: &BmfError) -> &'static str {
    match err {
        BmfError::InvalidMagic { .. } => error_codes::INVALID_MAGIC,
        BmfError::UnsupportedVersion { .. } => error_codes::UNSUPPORTED_VERSION,
        BmfError::TruncatedInput { .. } => error_codes::TRUNCATED,
        BmfError::TooManyGlyphs { .. } => error_codes::TOO_MANY_GLYPHS,
        BmfError::InvalidFontState { .. } => error_codes::INVALID_FONT_STATE,
        BmfError::EmptyText => error_codes::EMPTY_TEXT,
        BmfError::Png(_) => error_codes::PNG,
        BmfError::Config(_) => error_codes::CONFIG,
        BmfError::Io(_) => error_codes::FILE_READ,
    }
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "BMF_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Creates an error from a library error.
    pub fn from_bmf(err: &BmfError) -> Self {
        Self::new(error_code(err), err.to_string())
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Envelope printed by every command in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<JsonError>,
    /// Command-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Pretty-prints to stdout.
    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// One present glyph in `inspect --glyphs`.
#[derive(Debug, Clone, Serialize)]
pub struct GlyphEntry {
    pub code: u8,
    #[serde(flatten)]
    pub glyph: Glyph,
}

/// Result of `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    pub file: String,
    pub version: u8,
    pub line_height: i8,
    pub size_over: i8,
    pub size_under: i8,
    pub add_space: i8,
    pub size_inner: i8,
    pub used_colors: u8,
    pub highest_color: u8,
    pub reserved: u32,
    pub palette: Vec<Rgb>,
    pub title: String,
    pub num_chars: u16,
    pub glyph_count: usize,
    pub monospace: Monospace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<Vec<GlyphEntry>>,
}

/// Result of `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    pub file: String,
    pub version: u8,
    pub glyph_count: usize,
    pub colors: usize,
}

/// Result of `render`.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub advance: i32,
    pub bytes: usize,
    pub hash: String,
}

/// Result of `reencode`.
#[derive(Debug, Clone, Serialize)]
pub struct ReencodeResult {
    pub output: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Whether the output is byte-for-byte equal to the input.
    pub identical: bool,
}
