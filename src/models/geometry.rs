//! Physical board geometry loaded from a board description document.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::error::{Error, Result};

/// Individual key's physical placement in layout units (1u = key width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyGeometry {
    /// Physical X position in layout units.
    pub x: f32,
    /// Physical Y position in layout units (origin top-left).
    pub y: f32,
    /// Key width in layout units (default 1.0).
    #[serde(default = "default_key_size")]
    pub w: f32,
    /// Key height in layout units (default 1.0).
    #[serde(default = "default_key_size")]
    pub h: f32,
}

fn default_key_size() -> f32 {
    1.0
}

impl KeyGeometry {
    /// Creates a 1u key at the given position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            w: 1.0,
            h: 1.0,
        }
    }

    /// Sets the key width.
    #[must_use]
    pub const fn with_width(mut self, w: f32) -> Self {
        self.w = w;
        self
    }

    /// Sets the key height.
    #[must_use]
    pub const fn with_height(mut self, h: f32) -> Self {
        self.h = h;
        self
    }
}

/// Board geometry description: layout variants keyed by name.
///
/// Each variant holds an ordered key list; the order defines the positional
/// alignment with keymap layer tokens, so it must be preserved exactly as
/// it appears in the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardGeometry {
    variants: Vec<(String, Vec<KeyGeometry>)>,
}

impl BoardGeometry {
    /// Creates an empty board geometry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Adds a layout variant with its ordered key list.
    pub fn add_variant(&mut self, name: impl Into<String>, keys: Vec<KeyGeometry>) {
        self.variants.push((name.into(), keys));
    }

    /// Returns the ordered key list for a layout variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLayoutVariant`] when the variant name is
    /// absent from the board description.
    pub fn keys_for(&self, variant: &str) -> Result<&[KeyGeometry]> {
        self.variants
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, keys)| keys.as_slice())
            .ok_or_else(|| Error::UnknownLayoutVariant {
                variant: variant.to_string(),
                available: self.variant_names(),
            })
    }

    /// Returns the names of all layout variants, in source order.
    #[must_use]
    pub fn variant_names(&self) -> Vec<String> {
        self.variants.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Returns the number of layout variants.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

/// Raw layout-variant shape inside the board description document.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLayoutDefinition {
    /// Physical key positions, in alignment order.
    pub layout: Vec<KeyGeometry>,
}

/// Raw board description document shape.
///
/// Only the `layouts` section is consumed; other QMK info.json fields
/// (matrix pins, RGB config, USB identifiers) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBoardDescription {
    /// Layout variants keyed by name; `Map` preserves source order.
    pub layouts: Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> BoardGeometry {
        let mut board = BoardGeometry::new();
        board.add_variant(
            "LAYOUT_2x2",
            vec![
                KeyGeometry::new(0.0, 0.0),
                KeyGeometry::new(1.0, 0.0),
                KeyGeometry::new(0.0, 1.0),
                KeyGeometry::new(1.0, 1.0),
            ],
        );
        board
    }

    #[test]
    fn test_key_geometry_defaults() {
        let key = KeyGeometry::new(2.5, 1.0);
        assert_eq!(key.w, 1.0);
        assert_eq!(key.h, 1.0);
    }

    #[test]
    fn test_key_geometry_builder() {
        let key = KeyGeometry::new(0.0, 0.0).with_width(1.5).with_height(2.0);
        assert_eq!(key.w, 1.5);
        assert_eq!(key.h, 2.0);
    }

    #[test]
    fn test_keys_for_known_variant() {
        let board = two_by_two();
        let keys = board.keys_for("LAYOUT_2x2").unwrap();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[3].x, 1.0);
        assert_eq!(keys[3].y, 1.0);
    }

    #[test]
    fn test_keys_for_preserves_order() {
        let board = two_by_two();
        let keys = board.keys_for("LAYOUT_2x2").unwrap();
        let positions: Vec<(f32, f32)> = keys.iter().map(|k| (k.x, k.y)).collect();
        assert_eq!(
            positions,
            vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_keys_for_unknown_variant() {
        let board = two_by_two();
        let err = board.keys_for("LAYOUT_ortho_4x12").unwrap_err();
        match err {
            Error::UnknownLayoutVariant { variant, available } => {
                assert_eq!(variant, "LAYOUT_ortho_4x12");
                assert_eq!(available, vec!["LAYOUT_2x2".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
