//! Keymap document parsing.

use crate::error::{Error, Result};
use crate::models::KeymapDocument;

/// Parses a keymap document.
///
/// The document carries `keyboard` (board identifier), `layout` (layout
/// variant name), and `layers` (ordered layers of raw keycode tokens).
/// Token/geometry alignment is checked later at composition time, once the
/// board description is known.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] when the document fails to parse,
/// when `keyboard` or `layout` is empty, or when no layers are present.
pub fn parse_keymap_str(content: &str) -> Result<KeymapDocument> {
    let doc: KeymapDocument = json5::from_str(content)
        .map_err(|e| Error::MalformedDocument(format!("failed to parse keymap: {e}")))?;

    if doc.keyboard.is_empty() {
        return Err(Error::MalformedDocument(
            "keymap is missing a keyboard identifier".to_string(),
        ));
    }
    if doc.layout.is_empty() {
        return Err(Error::MalformedDocument(
            "keymap is missing a layout variant name".to_string(),
        ));
    }
    if doc.layers.is_empty() {
        return Err(Error::MalformedDocument(
            "keymap defines no layers".to_string(),
        ));
    }

    tracing::debug!(
        keyboard = %doc.keyboard,
        layout = %doc.layout,
        layers = doc.layer_count(),
        "parsed keymap"
    );
    Ok(doc)
}
