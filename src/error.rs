//! Error types for the composition core.
//!
//! Every failure in the core is fatal to the current request: no partial
//! output is produced and the layer cursor is never mutated on the error
//! path. Unresolved individual keycodes are deliberately *not* errors; they
//! degrade to a raw-token or blank label during resolution.

use thiserror::Error;

/// Errors produced while resolving keycodes and composing layers.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested layout variant does not exist in the board description.
    #[error("layout variant '{variant}' not found in board description (available: {available:?})")]
    UnknownLayoutVariant {
        /// Variant name that was requested.
        variant: String,
        /// Variant names the board actually defines.
        available: Vec<String>,
    },

    /// The requested layer index is outside the keymap's layer range.
    #[error("layer index {index} out of range (keymap has {layer_count} layers)")]
    LayerIndexOutOfRange {
        /// Requested layer index.
        index: usize,
        /// Number of layers in the keymap.
        layer_count: usize,
    },

    /// A layer's token count does not match the layout variant's key count.
    #[error("layer {layer} has {tokens} keycodes but layout variant defines {keys} keys")]
    LayoutMismatch {
        /// Index of the offending layer.
        layer: usize,
        /// Number of keycode tokens in the layer.
        tokens: usize,
        /// Number of keys in the geometry.
        keys: usize,
    },

    /// A layer count of zero was passed to the cursor.
    #[error("layer count must be at least 1")]
    InvalidLayerCount,

    /// A keymap token could not be parsed against the token grammar.
    #[error("malformed keycode token '{0}'")]
    MalformedToken(String),

    /// A source document failed to parse or violated its schema.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
