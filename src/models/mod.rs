//! Data models for board geometry, keymaps, and render output.
//!
//! Models are loaded once at startup and immutable thereafter, except for
//! [`LayerCursor`] which holds the single piece of mutable state (the
//! active layer index).

pub mod cursor;
pub mod geometry;
pub mod keymap;
pub mod renderable;

// Re-export all model types
pub use cursor::LayerCursor;
pub use geometry::{BoardGeometry, KeyGeometry};
pub use keymap::KeymapDocument;
pub use renderable::RenderableKey;
