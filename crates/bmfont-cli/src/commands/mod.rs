//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod reencode;
pub mod render;
pub mod validate;

use anyhow::Result;
use bmfont_core::Font;

use json_output::{CommandOutput, JsonError};

/// Load a font for a JSON-mode command.
///
/// On failure the error envelope is printed and `None` is returned; the
/// caller should exit with status 1.
pub(crate) fn load_font_json(path: &str) -> Result<Option<Font>> {
    match Font::open(path) {
        Ok(font) => Ok(Some(font)),
        Err(e) => {
            log::debug!("failed to load {}: {}", path, e);
            let error = JsonError::from_bmf(&e).with_file(path);
            CommandOutput::<()>::failure(vec![error]).print()?;
            Ok(None)
        }
    }
}
