//! Active-layer cursor.

use crate::error::{Error, Result};

/// Tracks which layer is currently displayed and advances it cyclically.
///
/// The cursor is the only mutable state in the system; whatever orchestrates
/// rendering owns one and re-composes the layer after each [`advance`].
///
/// [`advance`]: LayerCursor::advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerCursor {
    index: usize,
}

impl LayerCursor {
    /// Creates a cursor pointing at layer 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns the active layer index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.index
    }

    /// Advances to the next layer, wrapping to 0 past the last one.
    ///
    /// Returns the new index. The cursor is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayerCount`] when `layer_count` is 0.
    pub fn advance(&mut self, layer_count: usize) -> Result<usize> {
        if layer_count == 0 {
            return Err(Error::InvalidLayerCount);
        }
        self.index = if self.index + 1 < layer_count {
            self.index + 1
        } else {
            0
        };
        Ok(self.index)
    }
}
