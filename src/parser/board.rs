//! Board description parsing.
//!
//! The board description is keyed by layout-variant name under `layouts`,
//! each variant holding an ordered list of per-key objects with numeric
//! `x`, `y` and optional `w`, `h` (defaulting to 1.0). Other sections of a
//! QMK info.json (matrix pins, RGB config, USB identifiers) are ignored.

use crate::error::{Error, Result};
use crate::models::geometry::{RawBoardDescription, RawLayoutDefinition};
use crate::models::BoardGeometry;

/// Parses a board description document into a [`BoardGeometry`].
///
/// Variant order and per-variant key order are preserved exactly as they
/// appear in the source; key order defines the positional alignment with
/// keymap layer tokens.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] when the document fails to parse,
/// lacks a `layouts` section, or a variant violates the per-key schema.
pub fn parse_board_str(content: &str) -> Result<BoardGeometry> {
    let raw: RawBoardDescription = json5::from_str(content)
        .map_err(|e| Error::MalformedDocument(format!("failed to parse board description: {e}")))?;

    let mut board = BoardGeometry::new();
    for (name, value) in raw.layouts {
        let definition: RawLayoutDefinition = serde_json::from_value(value).map_err(|e| {
            Error::MalformedDocument(format!("invalid layout variant '{name}': {e}"))
        })?;
        board.add_variant(name, definition.layout);
    }

    tracing::debug!(variants = board.variant_count(), "parsed board description");
    Ok(board)
}
