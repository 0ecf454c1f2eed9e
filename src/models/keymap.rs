//! Keymap document: layered keycode assignments for one board.

use serde::{Deserialize, Serialize};

/// A parsed keymap document.
///
/// Layers are ordered sequences of raw keycode tokens, positionally aligned
/// 1:1 with the key list of the board's layout variant. The alignment is
/// validated at composition time, not at parse time, because it depends on
/// the board description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapDocument {
    /// Board identifier (e.g., "crkbd").
    pub keyboard: String,
    /// Layout variant name (e.g., "`LAYOUT_split_3x6_3`").
    pub layout: String,
    /// Ordered layers, each an ordered sequence of raw keycode tokens.
    pub layers: Vec<Vec<String>>,
}

impl KeymapDocument {
    /// Creates a keymap document.
    pub fn new(
        keyboard: impl Into<String>,
        layout: impl Into<String>,
        layers: Vec<Vec<String>>,
    ) -> Self {
        Self {
            keyboard: keyboard.into(),
            layout: layout.into(),
            layers,
        }
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
